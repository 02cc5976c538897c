//! Integration tests for Layer 2: Engine
//!
//! Tests for the rule table, inference passes, dispatch, and the household
//! rule set.

mod dispatch;
mod household;
mod inference;
mod rules;

use hestia_engine::{
    Action, ActionDispatcher, Agent, AgentConfig, DeviceDispatcher, DispatchContext,
    NullObserver,
};

/// Dispatcher that records every action before handing it to the device
/// dispatcher.
#[derive(Default)]
pub struct Recorder {
    pub inner: DeviceDispatcher,
    pub calls: Vec<String>,
}

impl ActionDispatcher for Recorder {
    fn dispatch(&mut self, action: &Action, ctx: &mut DispatchContext) {
        self.calls.push(action.to_string());
        self.inner.dispatch(action, ctx);
    }
}

pub type TestAgent = Agent<Recorder, NullObserver>;

/// Creates an empty agent with the given rules.
pub fn agent(rules: &[&str]) -> TestAgent {
    agent_with(AgentConfig::new(), rules)
}

/// Creates an empty agent with a custom configuration and the given rules.
pub fn agent_with(config: AgentConfig, rules: &[&str]) -> TestAgent {
    let mut agent = Agent::new(Recorder::default(), NullObserver, config);
    for rule in rules {
        agent.tell_rule(rule).unwrap();
    }
    agent
}

/// Creates a household agent at the given hour.
pub fn home(hour: u32) -> TestAgent {
    Agent::home(Recorder::default(), NullObserver, AgentConfig::new(), hour).unwrap()
}
