//! Session, REPL, and CLI for Hestia.
//!
//! This crate provides:
//! - [`Session`] - A household agent wired to devices, tracing, and a clock
//! - [`Repl`] - Interactive read-eval-print loop
//! - Rule file loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod rules;
pub mod session;

pub use clock::{Clock, FixedClock, LocalClock};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use repl::{Evaluation, Repl};
pub use rules::{parse_rules_source, read_rules_file};
pub use session::{CommandOutcome, HomeAgent, Session};
