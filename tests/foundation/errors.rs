//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use hestia_foundation::{Error, ErrorContext, ErrorKind, SemanticLimit};

#[test]
fn invalid_rule_syntax() {
    let err = Error::invalid_rule("kişi_üşüyor ısıtıcı_aç");
    assert!(matches!(err.kind, ErrorKind::InvalidRuleSyntax { .. }));
    assert!(!err.is_inference_overflow());
    assert!(err.to_string().contains("kişi_üşüyor ısıtıcı_aç"));
}

#[test]
fn inference_overflow_is_distinct() {
    let err = Error::limit_exceeded(SemanticLimit::InferenceDepth {
        limit: 64,
        fact: Some("a".to_string()),
    });
    assert!(err.is_inference_overflow());
    let msg = err.to_string();
    assert!(msg.contains("inference overflow"));
    assert!(msg.contains("64"));
}

#[test]
fn context_is_displayed_separately() {
    let err = Error::parse("expected ')'", 1, 4)
        .with_context(ErrorContext::new().with_source("home.rules").with_line(9));
    assert_eq!(err.context.as_ref().unwrap().to_string(), "at home.rules:9");
    assert!(err.to_string().contains("expected ')'"));
}
