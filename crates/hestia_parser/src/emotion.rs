//! Emotion detection.

use std::fmt;

/// Prefix of the fact asserted for a detected emotion.
pub const EMOTION_FACT_PREFIX: &str = "kullanıcı_duygu_";

/// An emotion the agent can recognize in a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    /// `mutlu`
    Happy,
    /// `üzgün`
    Sad,
    /// `kızgın`
    Angry,
    /// `yorgun`
    Tired,
}

impl Emotion {
    /// All emotions, in detection order.
    pub const ALL: [Emotion; 4] = [Emotion::Happy, Emotion::Sad, Emotion::Angry, Emotion::Tired];

    /// The emotion's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Happy => "mutlu",
            Self::Sad => "üzgün",
            Self::Angry => "kızgın",
            Self::Tired => "yorgun",
        }
    }

    /// Keywords that signal this emotion.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Happy => &["mutlu", "sevinçli", "neşeli", "harika", "güzel", "memnun"],
            Self::Sad => &["üzgün", "mutsuz", "kötü", "kederli", "sıkıntılı"],
            Self::Angry => &["kızgın", "sinirli", "öfkeli", "kızmış", "sinirlendim"],
            Self::Tired => &["yorgun", "yoruldum", "bitkin", "tükendim", "uykulu"],
        }
    }

    /// The fact asserted when this emotion is detected.
    #[must_use]
    pub fn fact_name(self) -> String {
        format!("{EMOTION_FACT_PREFIX}{}", self.name())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detects emotions by keyword.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmotionDetector;

impl EmotionDetector {
    /// Creates a detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the first emotion, in [`Emotion::ALL`] order, with a keyword
    /// occurring in the normalized input.
    #[must_use]
    pub fn detect(&self, normalized: &str) -> Option<Emotion> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.keywords().iter().any(|k| normalized.contains(k)))
    }
}
