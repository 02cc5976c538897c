//! Rule table, inference engine, action dispatch, and agent facade for Hestia.
//!
//! This crate provides:
//! - [`RuleTable`] - Insertion-ordered rules keyed by condition text
//! - [`Action`] - Closed set of recognized action kinds
//! - [`DeviceTable`] - On/off state of household devices
//! - [`ActionDispatcher`] - Applies actions to device state
//! - [`Agent`] - Owns facts and rules; runs an inference pass per assertion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod agent;
pub mod baseline;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod inference;
pub mod observer;
pub mod rule;
pub mod time;

pub use action::Action;
pub use agent::Agent;
pub use config::AgentConfig;
pub use device::{Device, DeviceStatus, DeviceTable};
pub use dispatch::{ActionDispatcher, DeviceDispatcher, DispatchContext, DispatchEffect};
pub use inference::InferenceStats;
pub use observer::{InferenceObserver, NullObserver};
pub use rule::{Rule, RuleTable};
pub use time::TimeOfDay;
