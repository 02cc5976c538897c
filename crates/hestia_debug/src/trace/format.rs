//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "AÇIK" } else { "KAPALI" }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form, indented by depth.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth.saturating_sub(1))
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "P{:04} ", record.pass);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::FactAsserted { fact, added, depth } => {
                let note = if *added { "" } else { " (already present)" };
                format!("{}ASSERT {fact}{note}", Self::indent(*depth))
            }
            TraceEvent::FactRetracted { fact } => format!("RETRACT {fact}"),
            TraceEvent::RuleAdded {
                condition,
                action,
                replaced,
            } => {
                let verb = if *replaced { "REPLACE" } else { "RULE" };
                format!("{verb} {condition} -> {action}")
            }
            TraceEvent::PassStart { pass, depth } => {
                format!("{}=== PASS {pass} START (depth {depth}) ===", Self::indent(*depth))
            }
            TraceEvent::PassEnd { pass, depth, fired } => {
                format!(
                    "{}=== PASS {pass} END ({fired} fired) ===",
                    Self::indent(*depth)
                )
            }
            TraceEvent::RuleFired {
                condition,
                action,
                depth,
            } => format!("{}  FIRED {condition} -> {action}", Self::indent(*depth)),
            TraceEvent::DeviceSwitched { device, on } => {
                format!("    {device}: {}", on_off(*on))
            }
            TraceEvent::Notice { message } => format!("    NOTICE {message}"),
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON, one object per record.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to put each record of a batch on its own line.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn string(s: &str) -> String {
        format!("\"{}\"", Self::escape_string(s))
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::FactAsserted { fact, added, depth } => format!(
                "\"fact\":{},\"added\":{added},\"depth\":{depth}",
                Self::string(fact)
            ),
            TraceEvent::FactRetracted { fact } => format!("\"fact\":{}", Self::string(fact)),
            TraceEvent::RuleAdded {
                condition,
                action,
                replaced,
            } => format!(
                "\"condition\":{},\"action\":{},\"replaced\":{replaced}",
                Self::string(condition),
                Self::string(action)
            ),
            TraceEvent::PassStart { pass, depth } => {
                format!("\"pass\":{pass},\"depth\":{depth}")
            }
            TraceEvent::PassEnd { pass, depth, fired } => {
                format!("\"pass\":{pass},\"depth\":{depth},\"fired\":{fired}")
            }
            TraceEvent::RuleFired {
                condition,
                action,
                depth,
            } => format!(
                "\"condition\":{},\"action\":{},\"depth\":{depth}",
                Self::string(condition),
                Self::string(action)
            ),
            TraceEvent::DeviceSwitched { device, on } => {
                format!("\"device\":{},\"on\":{on}", Self::string(device.name()))
            }
            TraceEvent::Notice { message } => format!("\"message\":{}", Self::string(message)),
        };

        format!(
            "{{\"id\":{},\"pass\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.pass,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
