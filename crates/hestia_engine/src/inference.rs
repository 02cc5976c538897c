//! The inference pass.
//!
//! A pass walks a snapshot of the rule table once, in insertion order, and
//! dispatches the action of every rule whose condition holds against the
//! live fact set. It is a single pass, not a fixpoint loop.
//!
//! Re-entry happens through derived facts: when an action asks for a fact,
//! it is asserted immediately, which runs a nested pass one level deeper.
//! The nested pass completes before the outer pass moves to its next rule.
//! Rules the outer pass has already visited are not re-checked by it.

use hestia_foundation::{Error, Fact, Result, SemanticLimit};

use crate::agent::Agent;
use crate::dispatch::{ActionDispatcher, DispatchContext, DispatchEffect};
use crate::observer::InferenceObserver;

/// Counters accumulated over an agent's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InferenceStats {
    /// Passes started.
    pub passes: u64,
    /// Rules fired across all passes.
    pub firings: u64,
    /// Deepest pass reached.
    pub deepest: usize,
}

impl<D: ActionDispatcher, O: InferenceObserver> Agent<D, O> {
    pub(crate) fn assert_at(&mut self, fact: Fact, depth: usize) -> Result<()> {
        if depth > self.config.max_inference_depth {
            return Err(Error::limit_exceeded(SemanticLimit::InferenceDepth {
                limit: self.config.max_inference_depth,
                fact: Some(fact.to_string()),
            }));
        }

        let added = self.facts.insert(fact.clone());
        self.observer.fact_asserted(&fact, added, depth);
        self.run_pass(depth)
    }

    /// Runs one pass over the rule table at the given depth.
    ///
    /// The observer always sees the pass finish, including when a nested
    /// assertion overflows and the error unwinds through this pass.
    fn run_pass(&mut self, depth: usize) -> Result<()> {
        self.stats.passes += 1;
        self.stats.deepest = self.stats.deepest.max(depth);
        let pass = self.stats.passes;
        self.observer.pass_started(pass, depth);

        let mut fired = 0;
        let result = self.fire_rules(depth, &mut fired);
        self.observer.pass_finished(pass, depth, fired);
        result
    }

    fn fire_rules(&mut self, depth: usize, fired: &mut usize) -> Result<()> {
        let rules = self.rules.all_rules();

        for rule in &rules {
            if !rule.condition.evaluate(&self.facts) {
                continue;
            }

            *fired += 1;
            self.stats.firings += 1;
            self.observer.rule_fired(rule, depth);

            let mut ctx = DispatchContext::new();
            self.dispatcher.dispatch(&rule.action, &mut ctx);

            for effect in ctx.into_effects() {
                match effect {
                    DispatchEffect::Switched { device, on } => {
                        self.observer.device_switched(device, on);
                    }
                    DispatchEffect::Notice(message) => self.observer.notice(&message),
                    DispatchEffect::Derive(fact) => self.assert_at(fact, depth + 1)?,
                }
            }
        }

        Ok(())
    }
}
