//! Fact extraction from a classifier's reply.
//!
//! An external classifier (for instance a hosted language model) may be
//! asked which request facts a command implies. Its reply is free text;
//! this module keeps the lines that name a fact. No client is provided.

/// Non-request facts a classifier may name.
pub const CLASSIFIER_FACTS: [&str; 3] = ["kişi_çıkıyor", "kişi_uyuma_hazırlığı", "kişi_üşüyor"];

/// Suffix shared by all request facts.
pub const REQUEST_SUFFIX: &str = "_isteği";

/// Extracts fact names from a classifier reply, in reply order, without
/// duplicates.
///
/// A line is kept if, after trimming and stripping a list marker (`-`,
/// `*`, `•`, `1.`, `2)`), it is a single word that contains `_isteği` or
/// equals one of [`CLASSIFIER_FACTS`]. Surrounding backticks are removed.
#[must_use]
pub fn extract_classifier_facts(reply: &str) -> Vec<String> {
    let mut facts: Vec<String> = Vec::new();
    for line in reply.lines() {
        let candidate = strip_marker(line.trim()).trim().trim_matches('`');
        if candidate.is_empty() || candidate.contains(char::is_whitespace) {
            continue;
        }
        let is_fact =
            candidate.contains(REQUEST_SUFFIX) || CLASSIFIER_FACTS.contains(&candidate);
        if is_fact && !facts.iter().any(|f| f == candidate) {
            facts.push(candidate.to_string());
        }
    }
    facts
}

fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(['-', '*', '•']) {
        return rest;
    }
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(['.', ')']) {
            return rest;
        }
    }
    line
}
