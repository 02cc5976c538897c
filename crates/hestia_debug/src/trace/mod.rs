//! Tracing of agent inference.
//!
//! The [`Tracer`] is an [`InferenceObserver`]: plug it into an agent and
//! every assertion, pass, firing, and device switch is recorded into a
//! ring buffer. Recording costs nothing beyond a branch when disabled.
//! Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```text
//! hestia> :trace on          enable tracing
//! hestia> üşüyorum           run a command (traces are recorded)
//! hestia> :trace last 10     show recent trace records
//! hestia> :trace off         disable tracing
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{DEFAULT_BUFFER_SIZE, TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use hestia_engine::{Device, InferenceObserver, Rule};
use hestia_foundation::Fact;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent as it is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records agent activity.
///
/// Events that happen outside a pass (rule additions, retractions) are
/// attributed to the most recent pass.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    pass_stack: Vec<u64>,
    last_pass: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            pass_stack: Vec::new(),
            last_pass: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the pass events are currently attributed to.
    #[must_use]
    pub fn current_pass(&self) -> u64 {
        self.pass_stack.last().copied().unwrap_or(self.last_pass)
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_pass(), timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl InferenceObserver for Tracer {
    fn fact_asserted(&mut self, fact: &Fact, added: bool, depth: usize) {
        self.record(TraceEvent::FactAsserted {
            fact: fact.to_string(),
            added,
            depth,
        });
    }

    fn fact_retracted(&mut self, fact: &Fact) {
        self.record(TraceEvent::FactRetracted {
            fact: fact.to_string(),
        });
    }

    fn rule_added(&mut self, rule: &Rule, replaced: bool) {
        self.record(TraceEvent::RuleAdded {
            condition: rule.condition_text.clone(),
            action: rule.action.to_string(),
            replaced,
        });
    }

    fn pass_started(&mut self, pass: u64, depth: usize) {
        // Pass numbering is tracked even while disabled, so enabling
        // mid-session attributes records correctly.
        self.pass_stack.push(pass);
        self.last_pass = pass;
        self.record(TraceEvent::PassStart { pass, depth });
    }

    fn pass_finished(&mut self, pass: u64, depth: usize, fired: usize) {
        self.record(TraceEvent::PassEnd { pass, depth, fired });
        self.pass_stack.pop();
    }

    fn rule_fired(&mut self, rule: &Rule, depth: usize) {
        self.record(TraceEvent::RuleFired {
            condition: rule.condition_text.clone(),
            action: rule.action.to_string(),
            depth,
        });
    }

    fn device_switched(&mut self, device: Device, on: bool) {
        self.record(TraceEvent::DeviceSwitched { device, on });
    }

    fn notice(&mut self, message: &str) {
        self.record(TraceEvent::Notice {
            message: message.to_string(),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
