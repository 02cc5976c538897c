//! Inference observation hooks.
//!
//! The agent reports what it does through an [`InferenceObserver`]. Every
//! hook has an empty default, so observers only implement what they need.
//! The tracer in `hestia_debug` is the main implementation.

use hestia_foundation::Fact;

use crate::device::Device;
use crate::rule::Rule;

/// Receives inference events from an agent.
#[allow(unused_variables)]
pub trait InferenceObserver {
    /// A fact was asserted. `added` is false if it was already present.
    fn fact_asserted(&mut self, fact: &Fact, added: bool, depth: usize) {}

    /// A fact was retracted.
    fn fact_retracted(&mut self, fact: &Fact) {}

    /// A rule was added or replaced.
    fn rule_added(&mut self, rule: &Rule, replaced: bool) {}

    /// An inference pass began.
    fn pass_started(&mut self, pass: u64, depth: usize) {}

    /// An inference pass finished. `fired` counts rules fired by this pass
    /// itself, excluding nested passes.
    fn pass_finished(&mut self, pass: u64, depth: usize, fired: usize) {}

    /// A rule's condition held and its action is being dispatched.
    fn rule_fired(&mut self, rule: &Rule, depth: usize) {}

    /// The dispatcher switched a device.
    fn device_switched(&mut self, device: Device, on: bool) {}

    /// The dispatcher produced a message.
    fn notice(&mut self, message: &str) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl InferenceObserver for NullObserver {}
