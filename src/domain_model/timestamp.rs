use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

bitflags::bitflags! {
    /// Controls the header a driver writes in front of every line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TimestampFlags: u8 {
        /// The date in the local time zone: 2009/01/23
        const DATE = 1 << 0;
        /// The time in the local time zone: 01:23:23
        const TIME = 1 << 1;
        /// Microsecond resolution: 01:23:23.123123. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Use UTC rather than the local time zone for `DATE` and `TIME`.
        const UTC = 1 << 3;
        /// Write the driver prefix before the timestamp instead of after it.
        const LEADING_PREFIX = 1 << 4;

        /// Date and time in UTC.
        const STD = Self::DATE.bits() | Self::TIME.bits() | Self::UTC.bits();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown timestamp flag {0:?}")]
pub struct ParseTimestampFlagError(pub String);

impl TimestampFlags {
    /// Parses flag names as written in settings files, e.g. `["date", "time", "utc"]`.
    pub fn from_names<I, S>(names: I) -> Result<Self, ParseTimestampFlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::empty(), |flags, name| {
            let name = name.as_ref();
            Self::from_name(&name.trim().to_ascii_uppercase())
                .map(|flag| flags | flag)
                .ok_or_else(|| ParseTimestampFlagError(name.to_string()))
        })
    }

    /// Renders the timestamp for `now`, including its trailing space.
    /// Empty when neither `DATE` nor `TIME` is set.
    pub fn stamp(self, now: DateTime<Utc>) -> String {
        if self.contains(Self::UTC) {
            self.stamp_in(&now)
        } else {
            self.stamp_in(&now.with_timezone(&Local))
        }
    }

    fn stamp_in<Tz>(self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut stamp = String::new();
        if self.contains(Self::DATE) {
            stamp.push_str(&at.format("%Y/%m/%d ").to_string());
        }
        if self.contains(Self::MICROSECONDS) {
            stamp.push_str(&at.format("%H:%M:%S%.6f ").to_string());
        } else if self.contains(Self::TIME) {
            stamp.push_str(&at.format("%H:%M:%S ").to_string());
        }
        stamp
    }
}
