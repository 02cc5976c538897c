//! Time-of-day facts.

use std::fmt;

/// The four parts of the day the agent reasons about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 16:59.
    Afternoon,
    /// 17:00 to 21:59.
    Evening,
    /// 22:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Every time-of-day value.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Classifies an hour of the day (0-23). Out-of-range hours are night.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// The fact asserted while this part of the day is current.
    #[must_use]
    pub const fn fact_name(self) -> &'static str {
        match self {
            Self::Morning => "zaman_sabah",
            Self::Afternoon => "zaman_öğle",
            Self::Evening => "zaman_akşam",
            Self::Night => "zaman_gece",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fact_name())
    }
}
