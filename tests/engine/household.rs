//! Integration tests for the household rule set

use hestia_engine::{Agent, AgentConfig, Device, NullObserver};
use hestia_language::ConditionSyntax;

use crate::{Recorder, home};

fn is_on(agent: &crate::TestAgent, device: Device) -> bool {
    agent.dispatcher().inner.devices().is_on(device)
}

#[test]
fn cold_person_gets_heat() {
    let mut agent = home(14);
    agent.assert_fact("kişi_üşüyor").unwrap();
    assert!(is_on(&agent, Device::Heater));
}

#[test]
fn light_request_needs_night() {
    let mut day = home(14);
    day.assert_fact("ışık_isteği").unwrap();
    assert!(!is_on(&day, Device::Light));

    let mut night = home(23);
    night.assert_fact("ışık_isteği").unwrap();
    assert!(is_on(&night, Device::Light));
}

#[test]
fn curtain_request_needs_morning() {
    let mut agent = home(8);
    agent.assert_fact("perde_isteği").unwrap();
    assert!(is_on(&agent, Device::Curtain));
}

#[test]
fn leaving_closes_the_door() {
    let mut agent = home(14);
    agent.assert_fact("kapı_aç_isteği").unwrap();
    assert!(is_on(&agent, Device::Door));
    agent.assert_fact("kişi_çıkıyor").unwrap();
    assert!(!is_on(&agent, Device::Door));
}

#[test]
fn empty_house_at_night_overrides_light_request() {
    let mut agent = home(23);
    agent.retract_fact("kişi_evde");
    // "ışık_aç_isteği" fires first, then the empty-house rule turns it off.
    agent.assert_fact("ışık_aç_isteği").unwrap();
    assert!(!is_on(&agent, Device::Light));
    assert_eq!(
        agent.dispatcher().calls,
        vec!["ışık_aç", "ışık_kapat"]
    );
}

#[test]
fn entertainment_rule_is_inert_under_flat_grammar() {
    let mut evening = home(19);
    evening.assert_fact("eğlence_isteği").unwrap();
    assert!(!is_on(&evening, Device::Television));
}

#[test]
fn entertainment_rule_groups_under_grouped_grammar() {
    let config = AgentConfig::new().with_condition_syntax(ConditionSyntax::Grouped);
    for hour in [8, 19] {
        let mut agent = Agent::home(Recorder::default(), NullObserver, config, hour).unwrap();
        agent.assert_fact("eğlence_isteği").unwrap();
        assert!(is_on(&agent, Device::Television), "hour {hour}");
    }
}

#[test]
fn tired_in_the_evening_prepares_sleep() {
    let mut agent = home(19);
    agent.assert_fact("televizyon_isteği").unwrap();
    agent.assert_fact("ışık_aç_isteği").unwrap();
    assert!(is_on(&agent, Device::Television));

    agent.retract_fact("televizyon_isteği");
    agent.retract_fact("ışık_aç_isteği");
    agent.assert_fact("kullanıcı_duygu_yorgun").unwrap();
    assert!(!is_on(&agent, Device::Television));
    assert!(!is_on(&agent, Device::Light));
}

#[test]
fn happy_in_the_evening_brightens() {
    let mut agent = home(19);
    agent.assert_fact("kullanıcı_duygu_mutlu").unwrap();
    assert!(is_on(&agent, Device::Light));
}

#[test]
fn refreshing_time_moves_the_agent() {
    let mut agent = home(8);
    agent.refresh_time_of_day(23).unwrap();
    assert!(agent.contains("zaman_gece"));
    assert!(!agent.contains("zaman_sabah"));
    agent.assert_fact("ışık_isteği").unwrap();
    assert!(is_on(&agent, Device::Light));
}
