//! Resolved route profile consumed by the itinerary engine.
//!
//! Route geometry is supplied by an external routing/geocoding collaborator.
//! The engine only ever sees the resolved totals and the ordered segment
//! list; a collaborator that cannot resolve a location must report the
//! failure instead of handing over an empty route.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// A contiguous portion of a route with known distance and duration.
///
/// Segments are the engine's unit of simulation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    /// Segment length in miles.
    pub distance_miles: f64,
    /// Segment driving time in fractional hours.
    pub duration_hours: f64,
}

impl RouteSegment {
    /// Create a new segment.
    pub fn new(distance_miles: f64, duration_hours: f64) -> Self {
        Self {
            distance_miles,
            duration_hours,
        }
    }
}

/// A fully resolved route from the current location through pickup to
/// dropoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteProfile {
    /// Total route length in miles.
    pub total_distance_miles: f64,
    /// Total driving time in fractional hours.
    pub total_duration_hours: f64,
    /// Index of the last segment of the leg ending at the pickup waypoint.
    pub pickup_after: usize,
    /// Ordered route segments.
    pub segments: Vec<RouteSegment>,
}

impl RouteProfile {
    /// Create a route profile, checking structural soundness.
    ///
    /// # Errors
    /// Returns [`PlanError::UpstreamResolution`] when the segment list is
    /// empty, a segment has a non-positive duration or negative distance, or
    /// `pickup_after` does not address a segment.
    pub fn new(
        total_distance_miles: f64,
        total_duration_hours: f64,
        pickup_after: usize,
        segments: Vec<RouteSegment>,
    ) -> PlanResult<Self> {
        if segments.is_empty() {
            return Err(PlanError::upstream("route contains no segments"));
        }
        if !total_distance_miles.is_finite() || total_distance_miles <= 0.0 {
            return Err(PlanError::upstream("route total distance must be positive"));
        }
        if !total_duration_hours.is_finite() || total_duration_hours <= 0.0 {
            return Err(PlanError::upstream("route total duration must be positive"));
        }
        if pickup_after >= segments.len() {
            return Err(PlanError::upstream(format!(
                "pickup waypoint index {} is out of range for {} segments",
                pickup_after,
                segments.len()
            )));
        }
        for (index, segment) in segments.iter().enumerate() {
            if !segment.duration_hours.is_finite() || segment.duration_hours <= 0.0 {
                return Err(PlanError::upstream(format!(
                    "segment {} has a non-positive duration",
                    index
                )));
            }
            if !segment.distance_miles.is_finite() || segment.distance_miles < 0.0 {
                return Err(PlanError::upstream(format!(
                    "segment {} has a negative distance",
                    index
                )));
            }
        }
        Ok(Self {
            total_distance_miles,
            total_duration_hours,
            pickup_after,
            segments,
        })
    }

    /// Build a profile from the two legs of a standard trip
    /// (current location -> pickup, pickup -> dropoff). Totals are derived
    /// from the segments.
    pub fn from_legs(
        to_pickup: Vec<RouteSegment>,
        to_dropoff: Vec<RouteSegment>,
    ) -> PlanResult<Self> {
        if to_pickup.is_empty() {
            return Err(PlanError::upstream("pickup leg contains no segments"));
        }
        let pickup_after = to_pickup.len() - 1;
        let segments: Vec<RouteSegment> =
            to_pickup.into_iter().chain(to_dropoff.into_iter()).collect();
        let total_distance_miles = segments.iter().map(|s| s.distance_miles).sum();
        let total_duration_hours = segments.iter().map(|s| s.duration_hours).sum();
        Self::new(
            total_distance_miles,
            total_duration_hours,
            pickup_after,
            segments,
        )
    }

    /// Render the total duration as "N days, M hours" (hours only when the
    /// route fits in one day).
    pub fn duration_text(&self) -> String {
        let total_hours = self.total_duration_hours;
        let days = (total_hours / 24.0).floor() as i64;
        let hours = (total_hours - days as f64 * 24.0).round() as i64;
        if days > 0 {
            format!("{} days, {} hours", days, hours)
        } else {
            format!("{} hours", hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> RouteProfile {
        RouteProfile::from_legs(
            vec![RouteSegment::new(120.0, 2.0)],
            vec![RouteSegment::new(630.0, 9.5)],
        )
        .unwrap()
    }

    #[test]
    fn test_from_legs_totals_and_pickup_index() {
        let route = sample_route();
        assert_eq!(route.total_distance_miles, 750.0);
        assert_eq!(route.total_duration_hours, 11.5);
        assert_eq!(route.pickup_after, 0);
        assert_eq!(route.segments.len(), 2);
    }

    #[test]
    fn test_empty_segments_rejected() {
        let result = RouteProfile::new(100.0, 2.0, 0, vec![]);
        assert!(matches!(result, Err(PlanError::UpstreamResolution(_))));
    }

    #[test]
    fn test_empty_pickup_leg_rejected() {
        let result = RouteProfile::from_legs(vec![], vec![RouteSegment::new(10.0, 0.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pickup_index_out_of_range_rejected() {
        let result = RouteProfile::new(100.0, 2.0, 2, vec![RouteSegment::new(100.0, 2.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_duration_segment_rejected() {
        let result = RouteProfile::new(
            100.0,
            2.0,
            0,
            vec![RouteSegment::new(100.0, 2.0), RouteSegment::new(5.0, 0.0)],
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("segment 1"));
    }

    #[test]
    fn test_duration_text_hours_only() {
        let route = sample_route();
        assert_eq!(route.duration_text(), "12 hours");
    }

    #[test]
    fn test_duration_text_with_days() {
        let route = RouteProfile::new(
            2000.0,
            30.0,
            0,
            vec![RouteSegment::new(2000.0, 30.0)],
        )
        .unwrap();
        assert_eq!(route.duration_text(), "1 days, 6 hours");
    }
}
