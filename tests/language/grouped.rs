//! Integration tests for the grouped condition grammar

use hestia_foundation::{ErrorKind, FactSet};
use hestia_language::{ConditionSyntax, parse_with};

fn holds(text: &str, names: &[&str]) -> bool {
    let facts: FactSet = names.iter().copied().collect();
    parse_with(text, ConditionSyntax::Grouped)
        .unwrap()
        .evaluate(&facts)
}

#[test]
fn parentheses_group() {
    let text = "(zaman_sabah | zaman_akşam) & kişi_evde";
    assert!(holds(text, &["zaman_sabah", "kişi_evde"]));
    assert!(holds(text, &["zaman_akşam", "kişi_evde"]));
    assert!(!holds(text, &["zaman_sabah"]));
}

#[test]
fn not_applies_to_groups() {
    assert!(holds("!(a | b)", &[]));
    assert!(!holds("!(a | b)", &["b"]));
}

#[test]
fn precedence_matches_flat_grammar_without_parentheses() {
    let text = "a | b & !c";
    for names in [&["a"][..], &["b"], &["b", "c"], &[]] {
        let facts: FactSet = names.iter().copied().collect();
        let flat = parse_with(text, ConditionSyntax::Flat).unwrap();
        let grouped = parse_with(text, ConditionSyntax::Grouped).unwrap();
        assert_eq!(flat.evaluate(&facts), grouped.evaluate(&facts), "{names:?}");
    }
}

#[test]
fn unbalanced_parentheses_are_errors() {
    let err = parse_with("(a & b", ConditionSyntax::Grouped).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
    assert!(parse_with("a)", ConditionSyntax::Grouped).is_err());
    assert!(parse_with("a & ", ConditionSyntax::Grouped).is_err());
}
