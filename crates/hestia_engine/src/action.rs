//! Action identifiers.
//!
//! Rule actions are written as opaque strings and resolved once, when the
//! rule is added, into a closed set of [`Action`] kinds. Anything not
//! recognized becomes [`Action::Unrecognized`] and is ignored on dispatch.

use std::fmt;

use hestia_foundation::Fact;

use crate::device::Device;

/// Suffix for "switch on" action identifiers.
pub const ON_SUFFIX: &str = "_aç";
/// Suffix for "switch off" action identifiers.
pub const OFF_SUFFIX: &str = "_kapat";
/// Prefix marking a derived-fact action (`+fact`).
pub const DERIVE_PREFIX: char = '+';

const HAPPY_AMBIENT_LIGHT: &str = "mutlu_ortam_ışığı";
const UPLIFTING_MUSIC: &str = "neşeli_müzik_çal";
const PREPARE_SLEEP: &str = "uyku_ortamı_hazırla";

/// A recognized rule action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Switch a single device on or off.
    Switch {
        /// Target device.
        device: Device,
        /// Desired state.
        on: bool,
    },
    /// Lights on with a bright, warm mood.
    HappyAmbientLight,
    /// Play uplifting music (no device effect).
    UpliftingMusic,
    /// Television, light, and curtain off, in that order.
    PrepareSleep,
    /// Assert a derived fact, re-entering inference.
    Derive(Fact),
    /// Unknown identifier. Dispatching it does nothing.
    Unrecognized(String),
}

impl Action {
    /// Resolves an action identifier.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        let id = id.trim();

        if let Some(fact) = id.strip_prefix(DERIVE_PREFIX) {
            let fact = fact.trim();
            if !fact.is_empty() {
                return Self::Derive(Fact::new(fact));
            }
        }

        match id {
            HAPPY_AMBIENT_LIGHT => return Self::HappyAmbientLight,
            UPLIFTING_MUSIC => return Self::UpliftingMusic,
            PREPARE_SLEEP => return Self::PrepareSleep,
            _ => {}
        }

        let switch = id
            .strip_suffix(ON_SUFFIX)
            .map(|name| (name, true))
            .or_else(|| id.strip_suffix(OFF_SUFFIX).map(|name| (name, false)));
        if let Some((name, on)) = switch {
            if let Some(device) = Device::from_name(name) {
                return Self::Switch { device, on };
            }
        }

        Self::Unrecognized(id.to_string())
    }

    /// Returns true if dispatching this action has no effect.
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch { device, on: true } => write!(f, "{device}{ON_SUFFIX}"),
            Self::Switch { device, on: false } => write!(f, "{device}{OFF_SUFFIX}"),
            Self::HappyAmbientLight => f.write_str(HAPPY_AMBIENT_LIGHT),
            Self::UpliftingMusic => f.write_str(UPLIFTING_MUSIC),
            Self::PrepareSleep => f.write_str(PREPARE_SLEEP),
            Self::Derive(fact) => write!(f, "{DERIVE_PREFIX}{fact}"),
            Self::Unrecognized(id) => f.write_str(id),
        }
    }
}
