//! Integration tests for rule text

use hestia_foundation::ErrorKind;
use hestia_language::parse_rule;

#[test]
fn splits_on_first_arrow() {
    let decl = parse_rule("a -> b -> c").unwrap();
    assert_eq!(decl.condition_text, "a");
    assert_eq!(decl.action_id, "b -> c");
}

#[test]
fn trims_both_sides() {
    let decl = parse_rule("   kişi_üşüyor   ->   ısıtıcı_aç  ").unwrap();
    assert_eq!(decl.condition_text, "kişi_üşüyor");
    assert_eq!(decl.action_id, "ısıtıcı_aç");
}

#[test]
fn missing_arrow_is_invalid_syntax() {
    let err = parse_rule("kişi_üşüyor ısıtıcı_aç").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRuleSyntax { .. }));
}
