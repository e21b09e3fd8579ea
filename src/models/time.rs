//! Minute-level clock arithmetic for itinerary timelines.
//!
//! The engine works in fractional hours but anchors every activity boundary
//! to a whole minute. Time points are tracked as absolute minutes from
//! midnight of trip day 1, so day boundaries fall at exact multiples of
//! [`MINUTES_PER_DAY`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Convert fractional hours to whole minutes, rounded to the nearest minute.
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

/// Convert whole minutes to fractional hours.
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Format a minute-of-day as 24-hour "HH:MM".
///
/// A value of `1440` renders as `"24:00"`, the boundary that closes a day.
pub fn format_clock(minute_of_day: i64) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

/// A point in trip time: a 1-based day index plus a 24-hour clock time.
///
/// Serialized as `"Day 1, 08:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripTime(i64);

impl TripTime {
    /// Create from absolute minutes since midnight of day 1.
    pub fn from_abs_minutes(abs_minutes: i64) -> Self {
        Self(abs_minutes)
    }

    /// Create from a 1-based day index and a minute of that day.
    pub fn new(day: u32, minute_of_day: i64) -> Self {
        Self((day as i64 - 1) * MINUTES_PER_DAY + minute_of_day)
    }

    /// Absolute minutes since midnight of day 1.
    pub fn abs_minutes(&self) -> i64 {
        self.0
    }

    /// 1-based day index.
    pub fn day(&self) -> u32 {
        (self.0 / MINUTES_PER_DAY) as u32 + 1
    }

    /// Minute of day in `[0, 1440)`.
    pub fn minute_of_day(&self) -> i64 {
        self.0 % MINUTES_PER_DAY
    }

    /// 24-hour "HH:MM" clock string for this point.
    pub fn clock(&self) -> String {
        format_clock(self.minute_of_day())
    }

    /// Advance by a whole number of minutes.
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + minutes)
    }
}

impl fmt::Display for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}, {}", self.day(), self.clock())
    }
}

impl FromStr for TripTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("Day ")
            .ok_or_else(|| format!("invalid trip time: {}", s))?;
        let (day_part, clock_part) = rest
            .split_once(", ")
            .ok_or_else(|| format!("invalid trip time: {}", s))?;
        let day: u32 = day_part
            .parse()
            .map_err(|_| format!("invalid day index in trip time: {}", s))?;
        let (hh, mm) = clock_part
            .split_once(':')
            .ok_or_else(|| format!("invalid clock in trip time: {}", s))?;
        let hours: i64 = hh
            .parse()
            .map_err(|_| format!("invalid clock in trip time: {}", s))?;
        let minutes: i64 = mm
            .parse()
            .map_err(|_| format!("invalid clock in trip time: {}", s))?;
        if day == 0 || hours > 24 || minutes > 59 {
            return Err(format!("trip time out of range: {}", s));
        }
        Ok(TripTime::new(day, hours * 60 + minutes))
    }
}

impl Serialize for TripTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TripTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
