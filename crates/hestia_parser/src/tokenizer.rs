//! Input tokenization.
//!
//! Converts raw user input into lowercase words.

/// Tokenizes user input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase, with Turkish dotted and dotless `I`
    /// - Strips punctuation, except an apostrophe joining two word
    ///   characters (`tv'yi`)
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut chars = input.chars().peekable();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                c if c.is_whitespace() => flush(&mut current_word, &mut words),
                '\'' | '’' => {
                    let joins = !current_word.is_empty()
                        && chars.peek().is_some_and(|c| c.is_alphanumeric());
                    if joins {
                        current_word.push('\'');
                    }
                }
                c if is_punctuation(c) => {}
                _ => current_word.push(ch),
            }
        }

        flush(&mut current_word, &mut words);
        words
    }

    /// Returns the input's words joined by single spaces.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        Self::tokenize(input).join(" ")
    }
}

fn flush(current_word: &mut String, words: &mut Vec<String>) {
    if !current_word.is_empty() {
        words.push(to_lowercase_tr(current_word));
        current_word.clear();
    }
}

/// Lowercases with Turkish casing: `I` becomes `ı` and `İ` becomes `i`.
fn to_lowercase_tr(word: &str) -> String {
    let mut lower = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            'I' => lower.push('ı'),
            'İ' => lower.push('i'),
            _ => lower.extend(c.to_lowercase()),
        }
    }
    lower
}

fn is_punctuation(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '_') || matches!(c, '“' | '”' | '‘' | '…' | '«' | '»')
}
