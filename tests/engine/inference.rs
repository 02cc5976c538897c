//! Integration tests for inference passes

use hestia_engine::{AgentConfig, Device};

use crate::{agent, agent_with};

#[test]
fn rules_fire_in_insertion_order() {
    let mut agent = agent(&["a -> perde_aç", "a & !b -> ışık_aç", "a | b -> kapı_aç"]);
    agent.assert_fact("a").unwrap();
    assert_eq!(agent.dispatcher().calls, vec!["perde_aç", "ışık_aç", "kapı_aç"]);
}

#[test]
fn repeated_assert_runs_a_pass_each_time() {
    let mut agent = agent(&["a -> ışık_aç"]);
    agent.assert_fact("a").unwrap();
    agent.assert_fact("a").unwrap();
    assert_eq!(agent.pass_count(), 2);
    assert_eq!(agent.dispatcher().calls.len(), 2);
    assert_eq!(agent.snapshot_facts(), vec!["a"]);
}

#[test]
fn every_pass_rechecks_all_rules() {
    let mut agent = agent(&["a | b -> ışık_aç"]);
    agent.assert_fact("a").unwrap();
    agent.assert_fact("b").unwrap();
    assert_eq!(agent.dispatcher().calls, vec!["ışık_aç", "ışık_aç"]);
}

#[test]
fn unrelated_assert_still_fires_standing_rules() {
    let mut agent = agent(&["a -> ışık_aç"]);
    agent.assert_fact("a").unwrap();
    agent.assert_fact("z").unwrap();
    assert_eq!(agent.stats().firings, 2);
}

#[test]
fn retraction_runs_no_pass() {
    let mut agent = agent(&["!a -> ışık_aç"]);
    agent.assert_fact("a").unwrap();
    assert!(agent.retract_fact("a"));
    assert!(agent.dispatcher().calls.is_empty());
    assert!(!agent.retract_fact("a"));
}

#[test]
fn later_rule_wins_within_a_pass() {
    let mut agent = agent(&["a -> ışık_aç", "a & a -> ışık_kapat"]);
    agent.assert_fact("a").unwrap();
    assert_eq!(agent.dispatcher().calls, vec!["ışık_aç", "ışık_kapat"]);
    assert!(!agent.dispatcher().inner.devices().is_on(Device::Light));
}

#[test]
fn derived_fact_runs_nested_pass_immediately() {
    let mut agent = agent(&["a & !b -> +b", "b -> ışık_aç", "a -> perde_aç"]);
    agent.assert_fact("a").unwrap();
    assert_eq!(
        agent.dispatcher().calls,
        vec!["+b", "ışık_aç", "perde_aç", "ışık_aç", "perde_aç"]
    );
    assert!(agent.contains("b"));
    assert_eq!(agent.stats().deepest, 2);
}

#[test]
fn chained_derivation() {
    let mut agent = agent(&["a & !b -> +b", "b & !c -> +c", "c -> kapı_aç"]);
    agent.assert_fact("a").unwrap();
    assert!(agent.contains("c"));
    assert_eq!(agent.stats().deepest, 3);
    assert!(agent.dispatcher().inner.devices().is_on(Device::Door));
}

#[test]
fn unguarded_cycle_overflows() {
    let mut agent = agent(&["a -> +a"]);
    let err = agent.assert_fact("a").unwrap_err();
    assert!(err.is_inference_overflow());
    assert_eq!(agent.stats().deepest, 64);
    assert!(agent.contains("a"));
}

#[test]
fn overflow_keeps_earlier_effects() {
    let config = AgentConfig::new().with_max_inference_depth(3);
    let mut agent = agent_with(config, &["a -> ışık_aç", "a | a -> +a"]);
    let err = agent.assert_fact("a").unwrap_err();
    assert!(err.is_inference_overflow());
    assert!(agent.dispatcher().inner.devices().is_on(Device::Light));
    assert_eq!(agent.stats().deepest, 3);
}

#[test]
fn agent_stays_usable_after_overflow() {
    let config = AgentConfig::new().with_max_inference_depth(2);
    let mut agent = agent_with(config, &["loop -> +loop", "b -> kapı_aç"]);
    assert!(agent.assert_fact("loop").is_err());
    agent.retract_fact("loop");
    agent.assert_fact("b").unwrap();
    assert!(agent.dispatcher().inner.devices().is_on(Device::Door));
}

#[test]
fn agents_are_independent() {
    let mut first = agent(&["a -> ışık_aç"]);
    let second = agent(&["a -> ışık_aç"]);
    first.assert_fact("a").unwrap();
    assert!(!second.contains("a"));
    assert!(!second.dispatcher().inner.devices().is_on(Device::Light));
}
