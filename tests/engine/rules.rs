//! Integration tests for the rule table

use crate::agent;

#[test]
fn rules_keep_insertion_order() {
    let agent = agent(&["c -> ışık_aç", "a -> perde_aç", "b -> kapı_aç"]);
    let conditions: Vec<String> = agent
        .snapshot_rules()
        .into_iter()
        .map(|(condition, _)| condition)
        .collect();
    assert_eq!(conditions, vec!["c", "a", "b"]);
}

#[test]
fn same_condition_overwrites_in_place() {
    let mut agent = agent(&["a -> ışık_aç", "b -> perde_aç"]);
    agent.tell_rule("a -> ışık_kapat").unwrap();
    assert_eq!(
        agent.snapshot_rules(),
        vec![
            ("a".to_string(), "ışık_kapat".to_string()),
            ("b".to_string(), "perde_aç".to_string()),
        ]
    );
}

#[test]
fn condition_text_is_the_key_not_its_meaning() {
    let agent = agent(&["a & b -> ışık_aç", "b & a -> ışık_aç"]);
    assert_eq!(agent.rules().len(), 2);
}

#[test]
fn adding_a_rule_runs_no_pass() {
    let mut agent = agent(&[]);
    agent.assert_fact("a").unwrap();
    agent.tell_rule("a -> ışık_aç").unwrap();
    assert!(agent.dispatcher().calls.is_empty());
    assert_eq!(agent.stats().passes, 1);
}

#[test]
fn missing_arrow_stores_nothing() {
    let mut agent = agent(&["a -> ışık_aç"]);
    assert!(agent.tell_rule("b ışık_aç").is_err());
    assert_eq!(agent.rules().len(), 1);
}

#[test]
fn action_identifier_is_trimmed() {
    let agent = agent(&["a  ->   perde_kapat   "]);
    assert_eq!(
        agent.snapshot_rules(),
        vec![("a".to_string(), "perde_kapat".to_string())]
    );
}
