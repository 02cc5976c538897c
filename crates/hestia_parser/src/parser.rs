//! Main parser pipeline.
//!
//! Orchestrates the flow from raw command text to the facts it implies.

use hestia_foundation::Fact;

use crate::classifier::extract_classifier_facts;
use crate::emotion::{Emotion, EmotionDetector};
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::PhraseTable;

/// Result of parsing a command.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandParse {
    /// The normalized command text.
    pub normalized: String,
    /// Facts the command requests, in assertion order.
    pub facts: Vec<Fact>,
    /// Emotion detected in the command, if any.
    pub emotion: Option<Emotion>,
    /// Heater temperature change the command asks for, if any.
    pub temperature_delta: Option<f64>,
}

impl CommandParse {
    /// Returns true if the command requested at least one fact.
    #[must_use]
    pub fn is_understood(&self) -> bool {
        !self.facts.is_empty()
    }

    /// Returns the fact for the detected emotion.
    #[must_use]
    pub fn emotion_fact(&self) -> Option<Fact> {
        self.emotion.map(|e| Fact::new(e.fact_name()))
    }
}

/// Parses household commands.
#[derive(Clone, Debug)]
pub struct CommandParser {
    phrases: PhraseTable,
    emotions: EmotionDetector,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Creates a parser over the household phrase table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_phrases(PhraseTable::standard())
    }

    /// Creates a parser over a custom phrase table.
    #[must_use]
    pub fn with_phrases(phrases: PhraseTable) -> Self {
        Self {
            phrases,
            emotions: EmotionDetector::new(),
        }
    }

    /// Returns the phrase table.
    #[must_use]
    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    /// Returns mutable access to the phrase table.
    pub fn phrases_mut(&mut self) -> &mut PhraseTable {
        &mut self.phrases
    }

    /// Parses a command with the phrase table.
    ///
    /// At most one phrase entry matches, so `facts` holds zero or one fact.
    #[must_use]
    pub fn parse(&self, text: &str) -> CommandParse {
        let normalized = InputTokenizer::normalize(text);
        let emotion = self.emotions.detect(&normalized);
        let entry = self.phrases.lookup(&normalized);

        CommandParse {
            facts: entry
                .map(|e| vec![Fact::new(e.fact.as_str())])
                .unwrap_or_default(),
            temperature_delta: entry.and_then(|e| e.temperature_delta),
            emotion,
            normalized,
        }
    }

    /// Parses a command using facts named in a classifier's reply.
    ///
    /// Falls back to [`CommandParser::parse`] when the reply names no
    /// facts. Facts from a classifier never carry a temperature change.
    #[must_use]
    pub fn parse_classified(&self, text: &str, reply: &str) -> CommandParse {
        let facts = extract_classifier_facts(reply);
        if facts.is_empty() {
            return self.parse(text);
        }

        let normalized = InputTokenizer::normalize(text);
        CommandParse {
            facts: facts.into_iter().map(Fact::from).collect(),
            emotion: self.emotions.detect(&normalized),
            temperature_delta: None,
            normalized,
        }
    }
}
