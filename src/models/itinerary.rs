//! Itinerary value objects: stops, duty activities, and daily logs.
//!
//! All types serialize to the camelCase JSON shape expected by downstream
//! consumers; hour totals serialize as one-decimal strings so fractional-hour
//! precision survives transport.

use crate::models::time::TripTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of stop along the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopKind {
    Start,
    Pickup,
    Rest,
    Fuel,
    Overnight,
    Dropoff,
}

/// A scheduled stop along the route.
///
/// Stops are ordered by arrival time; the sequence is append-only during
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// What happens at this stop.
    #[serde(rename = "type")]
    pub kind: StopKind,
    /// Resolved name or placeholder derived from route position.
    pub location: String,
    /// Human-readable stop description.
    pub description: String,
    /// When the driver arrives (day index + clock time).
    pub arrival_time: TripTime,
    /// When the driver departs.
    pub departure_time: TripTime,
    /// Time spent at the stop, fractional hours.
    pub duration_hours: f64,
    /// Miles covered from the trip start to this stop.
    pub cumulative_mileage: f64,
}

/// Duty status for a log activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

/// A single duty-status interval within one calendar day.
///
/// Clock times are 24-hour "HH:MM"; `"24:00"` closes the day. Within a day,
/// activities are contiguous, non-overlapping, and cover 00:00-24:00 exactly
/// once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyActivity {
    /// Duty status during this interval.
    #[serde(rename = "type")]
    pub activity: ActivityType,
    /// Interval start, "HH:MM".
    pub start_time: String,
    /// Interval end, "HH:MM" (up to "24:00").
    pub end_time: String,
    /// Where the activity takes place.
    pub location: String,
    /// Optional detail (e.g. "Pre-trip inspection").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-day hour totals by duty status.
///
/// Serialized as one-decimal strings (`"9.5"`) to preserve fractional-hour
/// precision exactly on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalHours {
    #[serde(with = "one_decimal")]
    pub off_duty: f64,
    #[serde(with = "one_decimal")]
    pub sleeper_berth: f64,
    #[serde(with = "one_decimal")]
    pub driving: f64,
    #[serde(with = "one_decimal")]
    pub on_duty_not_driving: f64,
}

impl TotalHours {
    /// Sum of the four totals. 24.0 for any fully generated day.
    pub fn sum(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty_not_driving
    }

    /// Driving plus on-duty-not-driving hours.
    pub fn on_duty(&self) -> f64 {
        self.driving + self.on_duty_not_driving
    }
}

/// One driver's daily log for a single calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calendar date of the log.
    pub date: NaiveDate,
    /// Location at the start of the day.
    pub start_location: String,
    /// Location at the end of the day.
    pub end_location: String,
    /// Miles driven during the day.
    pub total_miles: f64,
    /// Shipping document reference.
    pub shipping_documents: String,
    /// Timestamp-prefixed stop remarks, in arrival order.
    pub remarks: Vec<String>,
    /// Contiguous duty-status timeline covering 00:00-24:00.
    pub activities: Vec<DutyActivity>,
    /// Aggregated hours per duty status.
    pub total_hours: TotalHours,
}

/// Complete planning result: the stop sequence plus the daily logs, with the
/// trip summary fields callers display alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Trip origin.
    pub start_location: String,
    /// Trip destination.
    pub end_location: String,
    /// Total route length in miles.
    pub total_distance_miles: f64,
    /// Total driving time rendered as "N days, M hours".
    pub total_duration: String,
    /// Ordered stop sequence.
    pub stops: Vec<Stop>,
    /// One log per calendar day, ordered by date.
    pub logs: Vec<DailyLog>,
}

mod one_decimal {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.1}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNumber {
            Text(String),
            Number(f64),
        }
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Text(s) => s.parse().map_err(serde::de::Error::custom),
            StringOrNumber::Number(n) => Ok(n),
        }
    }
}
