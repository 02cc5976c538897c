//! Inference tracing for Hestia.
//!
//! This crate provides:
//! - [`Tracer`] - Records agent activity into a bounded ring buffer
//! - [`TraceBuffer`] - Queryable buffer indexed by inference pass
//! - [`HumanFormatter`] / [`JsonFormatter`] - Trace output formats

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
