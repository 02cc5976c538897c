//! Integration tests for Layer 1: Language
//!
//! Tests for condition parsing, evaluation, and rule text.

mod conditions;
mod grouped;
mod properties;
mod rules;
