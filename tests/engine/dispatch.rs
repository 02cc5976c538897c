//! Integration tests for action resolution and dispatch

use hestia_engine::{Action, Device, DeviceDispatcher};

use crate::agent;

#[test]
fn switch_identifiers_resolve() {
    assert_eq!(
        Action::parse("televizyon_kapat"),
        Action::Switch {
            device: Device::Television,
            on: false
        }
    );
    assert_eq!(Action::parse("+kahve"), Action::Derive("kahve".into()));
}

#[test]
fn unknown_identifiers_are_kept_but_inert() {
    for id in ["gece_modu", "soğutma_öner", "fırın_aç", "+"] {
        assert!(Action::parse(id).is_unrecognized(), "{id}");
    }

    let mut agent = agent(&["a -> gece_modu"]);
    agent.assert_fact("a").unwrap();
    assert_eq!(agent.dispatcher().calls, vec!["gece_modu"]);
    assert_eq!(agent.dispatcher().inner.devices(), DeviceDispatcher::new().devices());
}

#[test]
fn happy_ambient_light_turns_light_on() {
    let mut agent = agent(&["a -> mutlu_ortam_ışığı"]);
    agent.assert_fact("a").unwrap();
    assert!(agent.dispatcher().inner.devices().is_on(Device::Light));
}

#[test]
fn uplifting_music_leaves_devices_alone() {
    let mut agent = agent(&["a -> neşeli_müzik_çal"]);
    agent.assert_fact("a").unwrap();
    let status = agent.dispatcher().inner.devices().status();
    assert!(status.devices.iter().all(|(_, on)| !on));
}

#[test]
fn prepare_sleep_switches_three_devices_off() {
    let mut agent = agent(&["a -> uyku_ortamı_hazırla"]);
    for device in Device::ALL {
        agent
            .dispatcher_mut()
            .inner
            .devices_mut()
            .set_device(device, true);
    }
    agent.assert_fact("a").unwrap();

    let devices = agent.dispatcher().inner.devices();
    assert!(!devices.is_on(Device::Television));
    assert!(!devices.is_on(Device::Light));
    assert!(!devices.is_on(Device::Curtain));
    assert!(devices.is_on(Device::Heater));
    assert!(devices.is_on(Device::Door));
}

#[test]
fn status_display() {
    let mut dispatcher = DeviceDispatcher::new();
    dispatcher.devices_mut().set_device(Device::Heater, true);
    dispatcher.devices_mut().adjust_temperature(1.0);
    let text = dispatcher.devices().status().to_string();
    assert_eq!(
        text,
        "ısıtıcı: AÇIK\nkapı: KAPALI\nperde: KAPALI\ntelevizyon: KAPALI\nışık: KAPALI\nısıtıcı_sıcaklığı: 23.0°C"
    );
}
