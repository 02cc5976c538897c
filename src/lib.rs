//! Hestia - Rule-based smart-home logic agent
//!
//! This crate re-exports all layers of the Hestia system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: hestia_runtime    - REPL, CLI, sessions, rule files
//! Layer 3: hestia_debug      - Inference tracing
//! Layer 2: hestia_engine     - Rule table, inference passes, devices, agent
//!          hestia_parser     - Turkish command parsing, emotion detection
//! Layer 1: hestia_language   - Condition grammar and rule text
//! Layer 0: hestia_foundation - Core types (Fact, FactSet, Error)
//! ```

pub use hestia_debug as debug;
pub use hestia_engine as engine;
pub use hestia_foundation as foundation;
pub use hestia_language as language;
pub use hestia_parser as parser;
pub use hestia_runtime as runtime;
