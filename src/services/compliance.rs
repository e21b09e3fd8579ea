//! Cycle-hours compliance check over a generated log set.

use crate::models::{DailyLog, RegulationProfile};
use serde::{Deserialize, Serialize};

/// Summary of a trip's impact on the driver's duty cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    /// True iff the trip fits in the remaining cycle hours.
    pub is_compliant: bool,
    /// Hours already consumed before the trip.
    pub cycle_hours_used: f64,
    /// Driving hours added by the trip.
    pub trip_driving_hours: f64,
    /// Driving plus on-duty-not-driving hours added by the trip.
    pub trip_on_duty_hours: f64,
    /// Cycle hours left after the trip, clamped at zero.
    pub cycle_hours_remaining: f64,
    /// Share of the cycle consumed after the trip, capped at 100.
    pub cycle_hours_used_percentage: f64,
}

/// Compute the compliance summary for a generated log set.
///
/// Pure function: the logs are only read, never mutated. The engine does not
/// refuse to plan a trip that exceeds the cycle cap; this check is how the
/// overflow is reported.
pub fn check_compliance(
    logs: &[DailyLog],
    cycle_hours_used: f64,
    regulation: &RegulationProfile,
) -> ComplianceSummary {
    let trip_driving_hours: f64 = logs.iter().map(|log| log.total_hours.driving).sum();
    let trip_on_duty_hours: f64 = logs.iter().map(|log| log.total_hours.on_duty()).sum();

    let remaining = regulation.cycle_hours - (cycle_hours_used + trip_on_duty_hours);

    ComplianceSummary {
        is_compliant: remaining >= 0.0,
        cycle_hours_used,
        trip_driving_hours,
        trip_on_duty_hours,
        cycle_hours_remaining: remaining.max(0.0),
        cycle_hours_used_percentage: (((cycle_hours_used + trip_on_duty_hours)
            / regulation.cycle_hours)
            * 100.0)
            .min(100.0),
    }
}
