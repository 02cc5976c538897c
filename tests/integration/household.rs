//! Household scenarios

use hestia_engine::{Device, TimeOfDay};
use hestia_foundation::Fact;
use hestia_parser::Emotion;

use crate::{is_on, session_at};

#[test]
fn morning_curtains() {
    let mut session = session_at(8);
    let outcome = session.process_command("Perdeyi aç").unwrap();
    assert_eq!(outcome.time, TimeOfDay::Morning);
    assert_eq!(outcome.devices_changed, vec![(Device::Curtain, true)]);
}

#[test]
fn leaving_home_closes_the_door() {
    let mut session = session_at(14);
    session.process_command("kapıyı aç").unwrap();
    assert!(is_on(&session, Device::Door));

    let outcome = session.process_command("Ben gidiyorum").unwrap();
    assert_eq!(outcome.parse.facts, vec![Fact::new("kişi_çıkıyor")]);
    assert_eq!(outcome.devices_changed, vec![(Device::Door, false)]);
}

#[test]
fn happy_evening_with_light_request() {
    let mut session = session_at(19);
    let outcome = session.process_command("Harika bir gün, ışıkları aç").unwrap();
    assert_eq!(outcome.emotion(), Some(Emotion::Happy));
    assert_eq!(outcome.devices_changed, vec![(Device::Light, true)]);
    assert_eq!(
        outcome.facts_added,
        vec![Fact::new("kullanıcı_duygu_mutlu"), Fact::new("ışık_aç_isteği")]
    );
}

#[test]
fn request_facts_persist_across_commands() {
    let mut session = session_at(23);
    session.process_command("ışıkları aç").unwrap();
    assert!(is_on(&session, Device::Light));

    // Both requests now stand; the off rule comes later in the table.
    let outcome = session.process_command("ışıkları kapat").unwrap();
    assert_eq!(outcome.devices_changed, vec![(Device::Light, false)]);
    assert!(session.agent().contains("ışık_aç_isteği"));

    // Asserting the first request again cannot win either.
    let outcome = session.process_command("ışıkları aç").unwrap();
    assert!(outcome.devices_changed.is_empty());
    assert!(!is_on(&session, Device::Light));
}

#[test]
fn temperature_steps() {
    let mut session = session_at(10);
    session.process_command("ısıtıcıyı aç").unwrap();
    session.process_command("daha sıcak").unwrap();
    let outcome = session.process_command("daha sıcak").unwrap();
    assert_eq!(outcome.temperature, Some(24.0));

    let outcome = session.process_command("sıcaklığı azalt").unwrap();
    assert_eq!(outcome.temperature, Some(23.0));
    assert!(is_on(&session, Device::Heater));
}

#[test]
fn unknown_command_changes_nothing() {
    let mut session = session_at(10);
    let before = session.status();
    let outcome = session.process_command("hava nasıl").unwrap();
    assert!(!outcome.understood());
    assert!(outcome.facts_added.is_empty());
    assert_eq!(session.status(), before);
}

#[test]
fn tired_evening_winds_down() {
    let mut session = session_at(20);
    session.process_command("televizyonu aç").unwrap();
    session.process_command("perdeyi aç").unwrap();
    assert!(is_on(&session, Device::Television));
    assert!(is_on(&session, Device::Curtain));

    session.retract_fact("televizyon_aç_isteği");
    session.retract_fact("perde_aç_isteği");
    let outcome = session.process_command("çok yorgunum").unwrap();
    assert_eq!(
        outcome.devices_changed,
        vec![(Device::Curtain, false), (Device::Television, false)]
    );
}

#[test]
fn sessions_are_independent() {
    let mut first = session_at(14);
    let second = session_at(14);
    first.process_command("üşüyorum").unwrap();
    assert!(is_on(&first, Device::Heater));
    assert!(!is_on(&second, Device::Heater));
}
