//! Property tests for condition evaluation

use hestia_foundation::FactSet;
use hestia_language::{Condition, parse_condition};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

fn arb_facts() -> impl Strategy<Value = FactSet> {
    proptest::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
        .prop_map(|names| names.into_iter().collect())
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    let leaf = proptest::sample::select(NAMES.to_vec()).prop_map(Condition::atom);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::And),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::Or),
            inner.prop_map(Condition::not),
        ]
    })
}

proptest! {
    #[test]
    fn not_inverts(condition in arb_condition(), facts in arb_facts()) {
        prop_assert_eq!(
            Condition::not(condition.clone()).evaluate(&facts),
            !condition.evaluate(&facts)
        );
    }

    #[test]
    fn flat_parse_accepts_any_operator_text(
        tokens in prop::collection::vec(
            prop_oneof![
                proptest::sample::select(NAMES.to_vec()).prop_map(str::to_string),
                Just("&".to_string()),
                Just("|".to_string()),
                Just("!".to_string()),
            ],
            0..12,
        ),
        facts in arb_facts(),
    ) {
        let text = tokens.join(" ");
        let _ = parse_condition(&text).evaluate(&facts);
    }
}

#[test]
fn vacuous_operands() {
    let facts: FactSet = NAMES.iter().copied().collect();
    assert!(Condition::And(vec![]).evaluate(&facts));
    assert!(!Condition::Or(vec![]).evaluate(&facts));
    assert!(Condition::And(vec![]).evaluate(&FactSet::new()));
}
