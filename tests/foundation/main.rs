//! Integration tests for Layer 0: Foundation
//!
//! Tests for facts, fact sets, and errors.

mod errors;
