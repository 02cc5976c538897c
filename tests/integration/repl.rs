//! REPL scripts run through the line-editor seam

use hestia_debug::TracerConfig;
use hestia_engine::{AgentConfig, Device};
use hestia_runtime::{Evaluation, FixedClock, Repl, ScriptEditor, Session};

use crate::is_on;

fn repl(hour: u32, script: &'static str) -> Repl<ScriptEditor<&'static [u8]>> {
    let session =
        Session::new(AgentConfig::new(), TracerConfig::new(), Box::new(FixedClock(hour)))
            .unwrap();
    Repl::with_editor(ScriptEditor::new(script.as_bytes()), session).without_banner()
}

#[test]
fn script_runs_until_exit() {
    let mut repl = repl(23, "ışıkları aç\n\n:assert kişi_üşüyor\nçıkış\nkapıyı aç\n");
    repl.run().unwrap();
    let session = repl.session();
    assert!(is_on(session, Device::Light));
    assert!(is_on(session, Device::Heater));
    assert!(!is_on(session, Device::Door));
}

#[test]
fn script_runs_until_eof() {
    let mut repl = repl(14, "kapıyı aç\ndurum\n");
    repl.run().unwrap();
    assert!(is_on(repl.session(), Device::Door));
}

#[test]
fn errors_do_not_stop_the_loop() {
    let script = ":rule broken\n:load /nonexistent/hestia.rules\nüşüyorum\n";
    let mut repl = repl(14, script);
    repl.run().unwrap();
    assert!(is_on(repl.session(), Device::Heater));
}

#[test]
fn overflow_surfaces_from_eval() {
    let mut repl = repl(14, "");
    repl.eval(":rule döngü -> +döngü").unwrap();
    let err = repl.eval(":assert döngü").unwrap_err();
    assert!(err.is_inference_overflow());
}

#[test]
fn added_rule_is_listed_last() {
    let mut repl = repl(14, "");
    repl.eval(":rule misafir_geliyor -> kapı_aç").unwrap();
    let Evaluation::Output(rules) = repl.eval("rules").unwrap() else {
        panic!("expected output");
    };
    assert_eq!(
        rules.lines().last(),
        Some("- EĞER misafir_geliyor İSE kapı_aç")
    );
}
