//! The phrase table.
//!
//! An ordered list of entries, each mapping a set of phrases to the fact a
//! command requests. Matching is by substring on normalized input, and the
//! first entry with any matching phrase wins, so entry order matters:
//! `"daha soğuk"` contains `"soğuk"` and is claimed by the cold entry that
//! precedes the cooling entry.

use crate::tokenizer::InputTokenizer;

/// One phrase table entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseEntry {
    /// Normalized phrases that select this entry.
    pub phrases: Vec<String>,
    /// Fact asserted when the entry matches.
    pub fact: String,
    /// Heater temperature change applied when the entry matches.
    pub temperature_delta: Option<f64>,
}

impl PhraseEntry {
    /// Creates an entry. Phrases are normalized the way input is.
    #[must_use]
    pub fn new<I, S>(fact: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| InputTokenizer::normalize(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
            fact: fact.into(),
            temperature_delta: None,
        }
    }

    /// Builder method to attach a temperature change.
    #[must_use]
    pub fn with_temperature_delta(mut self, delta: f64) -> Self {
        self.temperature_delta = Some(delta);
        self
    }

    /// Returns true if any phrase occurs in the normalized input.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.phrases.iter().any(|p| normalized.contains(p.as_str()))
    }
}

/// Ordered phrase table.
#[derive(Clone, Debug, Default)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the household phrase table.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.push(PhraseEntry::new(
            "ısıtıcı_aç_isteği",
            ["klimayı aç", "ısıtıcıyı aç", "ısıtıcı aç"],
        ));
        table.push(PhraseEntry::new(
            "ısıtıcı_kapat_isteği",
            ["klimayı kapat", "ısıtıcıyı kapat", "ısıtıcı kapat"],
        ));
        table.push(PhraseEntry::new("kişi_üşüyor", ["üşüyorum", "soğuk", "çok soğuk"]));
        table.push(PhraseEntry::new("kapı_aç_isteği", ["kapıyı aç", "kapı aç"]));
        table.push(PhraseEntry::new("kapı_kapat_isteği", ["kapıyı kapat", "kapı kapat"]));
        table.push(PhraseEntry::new(
            "perde_aç_isteği",
            ["perdeyi aç", "perdeleri aç", "perde aç"],
        ));
        table.push(PhraseEntry::new(
            "perde_kapat_isteği",
            ["perdeyi kapat", "perdeleri kapat", "perde kapat"],
        ));
        table.push(PhraseEntry::new(
            "televizyon_aç_isteği",
            ["televizyonu aç", "tv aç", "tv'yi aç"],
        ));
        table.push(PhraseEntry::new(
            "televizyon_kapat_isteği",
            ["televizyonu kapat", "tv kapat", "tv'yi kapat"],
        ));
        table.push(PhraseEntry::new(
            "ışık_aç_isteği",
            ["ışıkları aç", "lambayı aç", "ışık aç"],
        ));
        table.push(PhraseEntry::new(
            "ışık_kapat_isteği",
            ["ışıkları kapat", "lambayı kapat", "ışık kapat"],
        ));
        table.push(
            PhraseEntry::new("sıcaklık_artır_isteği", ["sıcaklığı arttır", "daha sıcak"])
                .with_temperature_delta(1.0),
        );
        table.push(
            PhraseEntry::new("sıcaklık_azalt_isteği", ["sıcaklığı azalt", "daha soğuk"])
                .with_temperature_delta(-1.0),
        );
        table.push(PhraseEntry::new("kişi_çıkıyor", ["çıkıyorum", "gidiyorum"]));
        table.push(PhraseEntry::new("kişi_uyuma_hazırlığı", ["uyumak"]));
        table
    }

    /// Appends an entry. It matches only if no earlier entry does.
    pub fn push(&mut self, entry: PhraseEntry) {
        self.entries.push(entry);
    }

    /// Returns the first entry matching the normalized input.
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<&PhraseEntry> {
        self.entries.iter().find(|e| e.matches(normalized))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over entries in match order.
    pub fn iter(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }
}
