//! Integration tests for emotion detection

use hestia_foundation::Fact;
use hestia_parser::{CommandParser, Emotion};

#[test]
fn emotion_alongside_request() {
    let parse = CommandParser::new().parse("Çok yorgunum, ışıkları kapat");
    assert_eq!(parse.emotion, Some(Emotion::Tired));
    assert_eq!(parse.facts, vec![Fact::new("ışık_kapat_isteği")]);
    assert_eq!(parse.emotion_fact(), Some(Fact::new("kullanıcı_duygu_yorgun")));
}

#[test]
fn emotion_alone_is_not_a_request() {
    let parse = CommandParser::new().parse("Bugün çok mutluyum");
    assert_eq!(parse.emotion, Some(Emotion::Happy));
    assert!(!parse.is_understood());
}

#[test]
fn first_emotion_in_fixed_order_wins() {
    let parse = CommandParser::new().parse("yorgunum ama mutluyum");
    assert_eq!(parse.emotion, Some(Emotion::Happy));
}

#[test]
fn emotion_fact_names() {
    let names: Vec<String> = Emotion::ALL.iter().map(|e| e.fact_name()).collect();
    assert_eq!(
        names,
        vec![
            "kullanıcı_duygu_mutlu",
            "kullanıcı_duygu_üzgün",
            "kullanıcı_duygu_kızgın",
            "kullanıcı_duygu_yorgun",
        ]
    );
}
