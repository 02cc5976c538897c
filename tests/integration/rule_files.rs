//! Loading rule files into a session

use std::fs;

use hestia_engine::Device;
use hestia_foundation::ErrorKind;

use crate::{is_on, session_at};

#[test]
fn loads_rules_from_disk() {
    let path = std::env::temp_dir().join("hestia_guest_rules.rules");
    fs::write(
        &path,
        "# misafir\n\nmisafir_geliyor & !misafir_hazır -> +misafir_hazır\nmisafir_hazır -> ışık_aç\n",
    )
    .unwrap();

    let mut session = session_at(14);
    assert_eq!(session.load_rules(&path).unwrap(), 2);
    assert_eq!(session.agent().rules().len(), 25);

    session.assert_fact("misafir_geliyor").unwrap();
    assert!(session.agent().contains("misafir_hazır"));
    assert!(is_on(&session, Device::Light));

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("hestia_missing_rules_file.rules");
    let _ = fs::remove_file(&path);

    let mut session = session_at(14);
    let err = session.load_rules(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(session.agent().rules().len(), 23);
}

#[test]
fn rule_file_can_override_baseline_actions() {
    let mut session = session_at(14);
    session
        .load_rules_source("kişi_üşüyor -> perde_kapat\n", "override.rules")
        .unwrap();
    assert_eq!(session.agent().rules().len(), 23);

    session.process_command("üşüyorum").unwrap();
    assert!(!is_on(&session, Device::Heater));
}
