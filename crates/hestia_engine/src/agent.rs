//! The agent facade.
//!
//! An [`Agent`] owns one fact set, one rule table, a dispatcher, and an
//! observer. There is no shared or global state: independent agents never
//! see each other's facts. The agent is not internally synchronized; a
//! multi-threaded host should guard each agent with a single lock.

use hestia_foundation::{Fact, FactSet, Result};
use hestia_language::{parse_rule, parse_with};

use crate::action::Action;
use crate::baseline;
use crate::config::AgentConfig;
use crate::dispatch::{ActionDispatcher, DeviceDispatcher};
use crate::inference::InferenceStats;
use crate::observer::{InferenceObserver, NullObserver};
use crate::rule::{Rule, RuleTable};
use crate::time::TimeOfDay;

/// A forward-chaining rule agent.
pub struct Agent<D = DeviceDispatcher, O = NullObserver> {
    pub(crate) facts: FactSet,
    pub(crate) rules: RuleTable,
    pub(crate) dispatcher: D,
    pub(crate) observer: O,
    pub(crate) config: AgentConfig,
    pub(crate) stats: InferenceStats,
}

impl Agent {
    /// Creates an empty household agent with no observer.
    #[must_use]
    pub fn with_devices(config: AgentConfig) -> Self {
        Self::new(DeviceDispatcher::new(), NullObserver, config)
    }
}

impl<D: ActionDispatcher, O: InferenceObserver> Agent<D, O> {
    /// Creates an agent with no facts and no rules.
    #[must_use]
    pub fn new(dispatcher: D, observer: O, config: AgentConfig) -> Self {
        Self {
            facts: FactSet::new(),
            rules: RuleTable::new(),
            dispatcher,
            observer,
            config,
            stats: InferenceStats::default(),
        }
    }

    /// Creates an agent seeded for the household: the time-of-day fact for
    /// `hour`, the person-at-home fact, then the baseline rule set.
    ///
    /// # Errors
    /// Returns an error if a baseline rule fails to parse under the
    /// configured grammar.
    pub fn home(dispatcher: D, observer: O, config: AgentConfig, hour: u32) -> Result<Self> {
        let mut agent = Self::new(dispatcher, observer, config);
        agent.refresh_time_of_day(hour)?;
        agent.assert_fact(baseline::PERSON_HOME)?;
        for text in baseline::all_rules() {
            agent.tell_rule(text)?;
        }
        Ok(agent)
    }

    // -------------------------------------------------------------------------
    // Facts
    // -------------------------------------------------------------------------

    /// Asserts a fact and runs an inference pass.
    ///
    /// The pass runs even if the fact was already present.
    ///
    /// # Errors
    /// Returns an inference overflow if actions re-enter deeper than
    /// [`AgentConfig::max_inference_depth`]. Facts asserted before the
    /// overflow stay asserted.
    pub fn assert_fact(&mut self, name: impl Into<Fact>) -> Result<()> {
        self.assert_at(name.into(), 1)
    }

    /// Retracts a fact. Returns true if it was present.
    ///
    /// Retraction never runs an inference pass.
    pub fn retract_fact(&mut self, name: &str) -> bool {
        let removed = self.facts.remove(name);
        if removed {
            self.observer.fact_retracted(&Fact::new(name));
        }
        removed
    }

    /// Returns true if the fact is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains(name)
    }

    /// Returns the fact set.
    #[must_use]
    pub fn facts(&self) -> &FactSet {
        &self.facts
    }

    /// Returns fact names, sorted.
    #[must_use]
    pub fn snapshot_facts(&self) -> Vec<String> {
        self.facts.names()
    }

    /// Replaces whichever time-of-day fact is present with the one for
    /// `hour`, then runs a pass for it.
    ///
    /// # Errors
    /// Propagates inference overflow from the assertion.
    pub fn refresh_time_of_day(&mut self, hour: u32) -> Result<TimeOfDay> {
        for time in TimeOfDay::ALL {
            self.retract_fact(time.fact_name());
        }
        let now = TimeOfDay::from_hour(hour);
        self.assert_fact(now.fact_name())?;
        Ok(now)
    }

    // -------------------------------------------------------------------------
    // Rules
    // -------------------------------------------------------------------------

    /// Adds a rule, replacing the action of any rule with the same
    /// condition text. Adding a rule does not run a pass.
    ///
    /// # Errors
    /// Returns a parse error if the grouped grammar is configured and
    /// rejects the condition. The flat grammar never fails.
    pub fn add_rule(&mut self, condition_text: &str, action_id: &str) -> Result<()> {
        let condition_text = condition_text.trim();
        let condition = parse_with(condition_text, self.config.condition_syntax)?;
        let rule = Rule::new(condition_text, condition, Action::parse(action_id));

        let replaced = self.rules.get(condition_text).is_some();
        self.observer.rule_added(&rule, replaced);
        self.rules.insert(rule);
        Ok(())
    }

    /// Adds a rule written as `condition -> action`.
    ///
    /// # Errors
    /// Returns an invalid rule syntax error if the arrow is missing, and
    /// nothing is stored.
    pub fn tell_rule(&mut self, text: &str) -> Result<()> {
        let decl = parse_rule(text)?;
        self.add_rule(&decl.condition_text, &decl.action_id)
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Returns `(condition_text, action_id)` pairs in insertion order.
    #[must_use]
    pub fn snapshot_rules(&self) -> Vec<(String, String)> {
        self.rules.snapshot()
    }

    // -------------------------------------------------------------------------
    // Collaborators
    // -------------------------------------------------------------------------

    /// Returns the dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Returns mutable access to the dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns inference counters.
    #[must_use]
    pub fn stats(&self) -> InferenceStats {
        self.stats
    }

    /// Returns the number of inference passes run so far.
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.stats.passes
    }
}
