//! Natural language command matching for Hestia.
//!
//! This crate turns household commands like "ışıkları aç" or "üşüyorum"
//! into facts the agent can reason about.
//!
//! # Architecture
//!
//! ```text
//! "Işıkları aç, lütfen!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → "ışıkları aç lütfen"
//! └─────────────────┘
//!          │
//!          ├──────────────────────┐
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │ PHRASE TABLE    │    │ EMOTION         │
//! │ (first match)   │    │ DETECTOR        │
//! └─────────────────┘    └─────────────────┘
//!          │                      │
//!          ▼                      ▼
//!   ışık_aç_isteği        kullanıcı_duygu_*
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Normalize raw input into lowercase words
//! - [`vocabulary`] - Ordered phrase table mapping phrases to request facts
//! - [`emotion`] - Emotion keyword detection
//! - [`parser`] - Pipeline orchestration
//! - [`classifier`] - Fact extraction from an external classifier's reply

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod emotion;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;


pub use classifier::{CLASSIFIER_FACTS, extract_classifier_facts};
pub use emotion::{Emotion, EmotionDetector};
pub use parser::{CommandParse, CommandParser};
pub use tokenizer::InputTokenizer;
pub use vocabulary::{PhraseEntry, PhraseTable};
