//! End-to-end integration tests
//!
//! Tests that drive a household session the way the REPL does: commands in,
//! device changes out.

mod household;
mod repl;
mod rule_files;

use hestia_debug::TracerConfig;
use hestia_engine::{AgentConfig, Device};
use hestia_runtime::{FixedClock, Session};

/// Creates a session whose clock is stuck at `hour`.
pub fn session_at(hour: u32) -> Session {
    Session::new(AgentConfig::new(), TracerConfig::new(), Box::new(FixedClock(hour))).unwrap()
}

/// Returns true if the session's device is on.
pub fn is_on(session: &Session, device: Device) -> bool {
    session.agent().dispatcher().devices().is_on(device)
}
