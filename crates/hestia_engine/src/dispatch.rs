//! Action dispatch.
//!
//! A dispatcher applies an [`Action`] and reports what it did through a
//! [`DispatchContext`]. The agent replays the recorded effects in order,
//! forwarding device switches and notices to its observer and asserting
//! derived facts before moving on to the next rule.

use hestia_foundation::Fact;

use crate::action::Action;
use crate::device::{Device, DeviceTable};

/// One effect produced while dispatching an action.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchEffect {
    /// A device was switched.
    Switched {
        /// The device.
        device: Device,
        /// Its new state.
        on: bool,
    },
    /// A human-readable message.
    Notice(String),
    /// A fact to assert once dispatch returns.
    Derive(Fact),
}

/// Collects effects produced by a single dispatch.
#[derive(Debug, Default)]
pub struct DispatchContext {
    effects: Vec<DispatchEffect>,
}

impl DispatchContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a device switch.
    pub fn switched(&mut self, device: Device, on: bool) {
        self.effects.push(DispatchEffect::Switched { device, on });
    }

    /// Records a notice.
    pub fn notice(&mut self, message: impl Into<String>) {
        self.effects.push(DispatchEffect::Notice(message.into()));
    }

    /// Requests that a fact be asserted after dispatch.
    pub fn derive(&mut self, fact: Fact) {
        self.effects.push(DispatchEffect::Derive(fact));
    }

    /// Returns the recorded effects.
    #[must_use]
    pub fn effects(&self) -> &[DispatchEffect] {
        &self.effects
    }

    /// Consumes the context, yielding effects in the order recorded.
    #[must_use]
    pub fn into_effects(self) -> Vec<DispatchEffect> {
        self.effects
    }
}

/// Applies actions.
pub trait ActionDispatcher {
    /// Applies `action`, recording effects in `ctx`.
    fn dispatch(&mut self, action: &Action, ctx: &mut DispatchContext);
}

/// The household dispatcher: applies actions to a [`DeviceTable`].
#[derive(Clone, Debug, Default)]
pub struct DeviceDispatcher {
    devices: DeviceTable,
}

impl DeviceDispatcher {
    /// Creates a dispatcher over a fresh device table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher over an existing device table.
    #[must_use]
    pub fn with_devices(devices: DeviceTable) -> Self {
        Self { devices }
    }

    /// Returns the device table.
    #[must_use]
    pub fn devices(&self) -> &DeviceTable {
        &self.devices
    }

    /// Returns mutable access to the device table.
    pub fn devices_mut(&mut self) -> &mut DeviceTable {
        &mut self.devices
    }

    fn switch(&mut self, device: Device, on: bool, ctx: &mut DispatchContext) {
        self.devices.set_device(device, on);
        ctx.switched(device, on);
    }
}

impl ActionDispatcher for DeviceDispatcher {
    fn dispatch(&mut self, action: &Action, ctx: &mut DispatchContext) {
        match action {
            Action::Switch { device, on } => self.switch(*device, *on, ctx),
            Action::HappyAmbientLight => {
                self.switch(Device::Light, true, ctx);
                ctx.notice("mutlu ortam ışığı ayarlanıyor: parlak, sıcak tonlar");
            }
            Action::UpliftingMusic => ctx.notice("moral yükseltici müzik çalınıyor"),
            Action::PrepareSleep => {
                self.switch(Device::Television, false, ctx);
                self.switch(Device::Light, false, ctx);
                self.switch(Device::Curtain, false, ctx);
                ctx.notice("uyku ortamı hazırlanıyor: perdeler kapatılıyor, ışıklar söndürülüyor");
            }
            Action::Derive(fact) => ctx.derive(fact.clone()),
            Action::Unrecognized(_) => {}
        }
    }
}
