//! Trip input validation.
//!
//! Cheap structural checks on the trip request, run before any route
//! resolution or planning. Independent of the itinerary engine.

use crate::models::{RegulationProfile, TripDetails};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cycle-hours bound applied when no regulation profile is supplied.
const DEFAULT_CYCLE_HOURS: f64 = 70.0;

/// Result of validating a trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// True iff no rule produced an error.
    pub valid: bool,
    /// Field name mapped to a human-readable message.
    pub errors: BTreeMap<String, String>,
}

/// Validate trip details before planning.
///
/// Every rule is checked independently; no short-circuiting. When a
/// regulation profile is supplied, its `cycle_hours` bounds the
/// `cycle_hours_used` field, otherwise the 70-hour default applies.
pub fn validate_trip(
    trip: &TripDetails,
    regulation: Option<&RegulationProfile>,
) -> ValidationOutcome {
    let cycle_hours = regulation.map_or(DEFAULT_CYCLE_HOURS, |r| r.cycle_hours);
    let mut errors = BTreeMap::new();

    if !trip.cycle_hours_used.is_finite()
        || trip.cycle_hours_used < 0.0
        || trip.cycle_hours_used > cycle_hours
    {
        errors.insert(
            "cycle_hours_used".to_string(),
            format!("Cycle hours used must be between 0 and {}.", cycle_hours),
        );
    }

    if trip.current_location.trim().is_empty() {
        errors.insert(
            "current_location".to_string(),
            "Current location is required.".to_string(),
        );
    }

    if trip.pickup_location.trim().is_empty() {
        errors.insert(
            "pickup_location".to_string(),
            "Pickup location is required.".to_string(),
        );
    }

    if trip.dropoff_location.trim().is_empty() {
        errors.insert(
            "dropoff_location".to_string(),
            "Dropoff location is required.".to_string(),
        );
    }

    ValidationOutcome {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_trip() -> TripDetails {
        TripDetails::new("Chicago, IL", "Joliet, IL", "Denver, CO", 10.0)
    }

    #[test]
    fn test_valid_trip_passes() {
        let outcome = validate_trip(&valid_trip(), None);
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_empty_pickup_location_fails() {
        let mut trip = valid_trip();
        trip.pickup_location = String::new();
        let outcome = validate_trip(&trip, None);
        assert!(!outcome.valid);
        assert!(outcome.errors.contains_key("pickup_location"));
    }

    #[test]
    fn test_whitespace_location_fails() {
        let mut trip = valid_trip();
        trip.dropoff_location = "   ".to_string();
        let outcome = validate_trip(&trip, None);
        assert!(outcome.errors.contains_key("dropoff_location"));
    }

    #[test]
    fn test_cycle_hours_out_of_range() {
        let mut trip = valid_trip();
        trip.cycle_hours_used = 70.5;
        let outcome = validate_trip(&trip, None);
        assert!(outcome.errors.contains_key("cycle_hours_used"));

        trip.cycle_hours_used = -1.0;
        let outcome = validate_trip(&trip, None);
        assert!(outcome.errors.contains_key("cycle_hours_used"));
    }

    #[test]
    fn test_cycle_hours_nan_rejected() {
        let mut trip = valid_trip();
        trip.cycle_hours_used = f64::NAN;
        let outcome = validate_trip(&trip, None);
        assert!(outcome.errors.contains_key("cycle_hours_used"));
    }

    #[test]
    fn test_profile_bound_overrides_default() {
        let mut regulation = RegulationProfile::default();
        regulation.cycle_hours = 60.0;
        let mut trip = valid_trip();
        trip.cycle_hours_used = 65.0;
        let outcome = validate_trip(&trip, Some(&regulation));
        assert!(outcome.errors.contains_key("cycle_hours_used"));
        assert!(outcome.errors["cycle_hours_used"].contains("60"));
    }

    #[test]
    fn test_all_rules_reported_together() {
        let trip = TripDetails::new("", "", "", 999.0);
        let outcome = validate_trip(&trip, None);
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.len(), 4);
    }

    #[test]
    fn test_boundary_values_accepted() {
        let mut trip = valid_trip();
        trip.cycle_hours_used = 0.0;
        assert!(validate_trip(&trip, None).valid);
        trip.cycle_hours_used = 70.0;
        assert!(validate_trip(&trip, None).valid);
    }
}
