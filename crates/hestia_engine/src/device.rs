//! Household device state.
//!
//! The device table is the external collaborator the dispatcher writes to:
//! a fixed set of on/off devices, plus a temperature setting for the heater.

use std::fmt;

const DEVICE_COUNT: usize = 5;

/// A controllable household device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Device {
    /// Heater (`ısıtıcı`).
    Heater,
    /// Front door (`kapı`).
    Door,
    /// Curtains (`perde`).
    Curtain,
    /// Television (`televizyon`).
    Television,
    /// Lights (`ışık`).
    Light,
}

impl Device {
    /// All devices, in display order.
    pub const ALL: [Device; DEVICE_COUNT] = [
        Device::Heater,
        Device::Door,
        Device::Curtain,
        Device::Television,
        Device::Light,
    ];

    /// The device's name as used in facts and action identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heater => "ısıtıcı",
            Self::Door => "kapı",
            Self::Curtain => "perde",
            Self::Television => "televizyon",
            Self::Light => "ışık",
        }
    }

    /// Looks a device up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Heater => 0,
            Self::Door => 1,
            Self::Curtain => 2,
            Self::Television => 3,
            Self::Light => 4,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default heater temperature in degrees Celsius.
pub const DEFAULT_HEATER_TEMPERATURE: f64 = 22.0;

/// On/off state for every device plus the heater temperature.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceTable {
    states: [bool; DEVICE_COUNT],
    heater_temperature: f64,
}

impl Default for DeviceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceTable {
    /// Creates a table with every device off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: [false; DEVICE_COUNT],
            heater_temperature: DEFAULT_HEATER_TEMPERATURE,
        }
    }

    /// Switches a device on or off. Returns the previous state.
    pub fn set_device(&mut self, device: Device, on: bool) -> bool {
        std::mem::replace(&mut self.states[device.index()], on)
    }

    /// Returns true if the device is on.
    #[must_use]
    pub fn is_on(&self, device: Device) -> bool {
        self.states[device.index()]
    }

    /// Returns the heater temperature.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.heater_temperature
    }

    /// Adjusts the heater temperature by `delta` and returns the new value.
    pub fn adjust_temperature(&mut self, delta: f64) -> f64 {
        self.heater_temperature += delta;
        self.heater_temperature
    }

    /// Returns a snapshot suitable for display.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            devices: Device::ALL.iter().map(|d| (*d, self.is_on(*d))).collect(),
            heater_temperature: self.heater_temperature,
        }
    }
}

/// Point-in-time view of the device table.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceStatus {
    /// Each device with its on/off state, in display order.
    pub devices: Vec<(Device, bool)>,
    /// Heater temperature in degrees Celsius.
    pub heater_temperature: f64,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (device, on) in &self.devices {
            let state = if *on { "AÇIK" } else { "KAPALI" };
            writeln!(f, "{device}: {state}")?;
        }
        write!(f, "ısıtıcı_sıcaklığı: {:.1}°C", self.heater_temperature)
    }
}
