//! Agent configuration.

use hestia_language::ConditionSyntax;

/// Default bound on re-entrant inference depth.
pub const DEFAULT_MAX_INFERENCE_DEPTH: usize = 64;

/// Configuration for an [`crate::Agent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    /// Maximum nesting of inference passes before reporting an overflow.
    /// An assertion made from outside the agent runs at depth 1.
    pub max_inference_depth: usize,

    /// Grammar used to parse rule conditions.
    pub condition_syntax: ConditionSyntax,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_inference_depth: DEFAULT_MAX_INFERENCE_DEPTH,
            condition_syntax: ConditionSyntax::Flat,
        }
    }
}

impl AgentConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the inference depth bound.
    #[must_use]
    pub fn with_max_inference_depth(mut self, depth: usize) -> Self {
        self.max_inference_depth = depth;
        self
    }

    /// Builder method to select the condition grammar.
    #[must_use]
    pub fn with_condition_syntax(mut self, syntax: ConditionSyntax) -> Self {
        self.condition_syntax = syntax;
        self
    }
}
