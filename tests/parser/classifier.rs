//! Integration tests for classifier replies

use hestia_foundation::Fact;
use hestia_parser::{CommandParser, Emotion, extract_classifier_facts};

#[test]
fn list_markers_and_backticks_are_stripped() {
    let reply = "Şu gerçekler:\n- `ışık_aç_isteği`\n2) kişi_üşüyor\n• perde_kapat_isteği\n";
    assert_eq!(
        extract_classifier_facts(reply),
        vec!["ışık_aç_isteği", "kişi_üşüyor", "perde_kapat_isteği"]
    );
}

#[test]
fn prose_lines_are_ignored() {
    let reply = "kullanıcı ışık_aç_isteği istiyor\nkişi_mutlu\n";
    assert!(extract_classifier_facts(reply).is_empty());
}

#[test]
fn duplicates_are_dropped() {
    let reply = "kapı_aç_isteği\n- kapı_aç_isteği\n";
    assert_eq!(extract_classifier_facts(reply), vec!["kapı_aç_isteği"]);
}

#[test]
fn classified_parse_uses_reply_facts() {
    let parse = CommandParser::new().parse_classified(
        "hava buz gibi, yoruldum",
        "kişi_üşüyor\nısıtıcı_aç_isteği",
    );
    assert_eq!(
        parse.facts,
        vec![Fact::new("kişi_üşüyor"), Fact::new("ısıtıcı_aç_isteği")]
    );
    assert_eq!(parse.emotion, Some(Emotion::Tired));
    assert_eq!(parse.temperature_delta, None);
}

#[test]
fn empty_reply_falls_back_to_phrases() {
    let parser = CommandParser::new();
    let parse = parser.parse_classified("daha sıcak", "bilmiyorum");
    assert_eq!(parse, parser.parse("daha sıcak"));
}
