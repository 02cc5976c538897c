//! Integration tests for the flat condition grammar

use hestia_foundation::FactSet;
use hestia_language::{Condition, parse_condition};

fn facts(names: &[&str]) -> FactSet {
    names.iter().copied().collect()
}

fn holds(text: &str, names: &[&str]) -> bool {
    parse_condition(text).evaluate(&facts(names))
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn atom_is_membership() {
    assert!(holds("kişi_evde", &["kişi_evde"]));
    assert!(!holds("kişi_evde", &[]));
}

#[test]
fn and_requires_every_operand() {
    let text = "zaman_gece & kişi_evde & ışık_isteği";
    assert!(holds(text, &["zaman_gece", "kişi_evde", "ışık_isteği"]));
    assert!(!holds(text, &["zaman_gece", "kişi_evde"]));
}

#[test]
fn or_requires_any_operand() {
    assert!(holds("a | b", &["b"]));
    assert!(!holds("a | b", &["c"]));
}

#[test]
fn negation_prefix() {
    assert!(holds("zaman_gece & !kişi_evde", &["zaman_gece"]));
    assert!(!holds("zaman_gece & !kişi_evde", &["zaman_gece", "kişi_evde"]));
    assert!(holds("!!a", &["a"]));
}

#[test]
fn and_binds_tighter_than_or() {
    // a | (b & c)
    assert!(holds("a | b & c", &["a"]));
    assert!(holds("a | b & c", &["b", "c"]));
    assert!(!holds("a | b & c", &["b"]));
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn stray_separators_are_vacuous() {
    assert_eq!(parse_condition("&"), Condition::And(vec![]));
    assert_eq!(parse_condition("|"), Condition::Or(vec![]));
    assert!(holds("&", &[]));
    assert!(!holds("|", &["a"]));
}

#[test]
fn empty_operands_are_dropped() {
    assert_eq!(parse_condition("a & & b"), parse_condition("a & b"));
    assert_eq!(parse_condition("| a"), Condition::atom("a"));
}

#[test]
fn parentheses_are_name_characters() {
    let condition = parse_condition("(zaman_sabah | zaman_akşam) & kişi_evde");
    // Splits into "(zaman_sabah" | "zaman_akşam) & kişi_evde".
    assert!(!condition.evaluate(&facts(&["zaman_sabah", "kişi_evde"])));
    assert!(condition.evaluate(&facts(&["(zaman_sabah"])));
    assert!(condition.evaluate(&facts(&["zaman_akşam)", "kişi_evde"])));
}

#[test]
fn atoms_are_listed_once() {
    let condition = parse_condition("a & b | a & !c");
    let atoms = condition.atoms();
    let names: Vec<&str> = atoms.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
