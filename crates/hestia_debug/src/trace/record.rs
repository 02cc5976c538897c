//! Trace event and record types.
//!
//! This module defines the events an agent reports while it infers.

use hestia_engine::Device;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while an agent runs.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A fact was asserted.
    FactAsserted {
        /// The fact name.
        fact: String,
        /// False if the fact was already present.
        added: bool,
        /// Depth of the assertion (1 for external asserts).
        depth: usize,
    },

    /// A fact was retracted.
    FactRetracted {
        /// The fact name.
        fact: String,
    },

    /// A rule was added or replaced.
    RuleAdded {
        /// The rule's condition text.
        condition: String,
        /// The rule's action identifier.
        action: String,
        /// Whether an existing rule with the same condition was replaced.
        replaced: bool,
    },

    /// An inference pass has started.
    PassStart {
        /// The pass number.
        pass: u64,
        /// Nesting depth.
        depth: usize,
    },

    /// An inference pass has ended.
    PassEnd {
        /// The pass number.
        pass: u64,
        /// Nesting depth.
        depth: usize,
        /// Rules fired by this pass itself.
        fired: usize,
    },

    /// A rule's condition held and its action was dispatched.
    RuleFired {
        /// The rule's condition text.
        condition: String,
        /// The rule's action identifier.
        action: String,
        /// Nesting depth.
        depth: usize,
    },

    /// A device was switched.
    DeviceSwitched {
        /// The device.
        device: Device,
        /// The new state.
        on: bool,
    },

    /// The dispatcher produced a message.
    Notice {
        /// The message.
        message: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FactAsserted { .. } => "fact-asserted",
            Self::FactRetracted { .. } => "fact-retracted",
            Self::RuleAdded { .. } => "rule-added",
            Self::PassStart { .. } => "pass-start",
            Self::PassEnd { .. } => "pass-end",
            Self::RuleFired { .. } => "rule-fired",
            Self::DeviceSwitched { .. } => "device-switched",
            Self::Notice { .. } => "notice",
        }
    }

    /// Returns true if this is a pass boundary event.
    #[must_use]
    pub fn is_pass_boundary(&self) -> bool {
        matches!(self, Self::PassStart { .. } | Self::PassEnd { .. })
    }

    /// Returns true if this is a fact event.
    #[must_use]
    pub fn is_fact_event(&self) -> bool {
        matches!(
            self,
            Self::FactAsserted { .. } | Self::FactRetracted { .. }
        )
    }

    /// Returns true if this event comes from dispatching an action.
    #[must_use]
    pub fn is_action_event(&self) -> bool {
        matches!(
            self,
            Self::RuleFired { .. } | Self::DeviceSwitched { .. } | Self::Notice { .. }
        )
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The pass in progress when this event occurred (0 before the first).
    pub pass: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, pass: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            pass,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
