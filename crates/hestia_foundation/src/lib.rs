//! Core types, facts, and errors for Hestia.
//!
//! This crate provides:
//! - [`Fact`] - Case-sensitive atomic proposition names
//! - [`FactSet`] - Persistent ordered set of facts
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fact;

pub use error::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
pub use fact::{Fact, FactSet};
