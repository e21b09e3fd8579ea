use hos_trip_planner::api::{
    check_compliance, validate_trip, ItineraryPlanner, RegulationProfile, RouteProfile,
    RouteSegment, TripDetails,
};

fn default_regulation() -> RegulationProfile {
    RegulationProfile::property_carrying_70_hour()
}

#[test]
fn test_empty_pickup_location_reports_field_error() {
    let trip = TripDetails::new("Chicago, IL", "", "Denver, CO", 0.0);
    let outcome = validate_trip(&trip, Some(&default_regulation()));
    assert!(!outcome.valid);
    assert_eq!(
        outcome.errors.get("pickup_location").map(String::as_str),
        Some("Pickup location is required.")
    );
}

#[test]
fn test_validation_is_independent_of_engine() {
    // A trip that would fail planning (no route resolved) still validates.
    let trip = TripDetails::new("Chicago, IL", "Joliet, IL", "Denver, CO", 35.0);
    let outcome = validate_trip(&trip, Some(&default_regulation()));
    assert!(outcome.valid);
}

#[test]
fn test_compliance_of_generated_itinerary() {
    let planner = ItineraryPlanner::new(default_regulation()).unwrap();
    let trip = TripDetails::new("Chicago, IL", "Joliet, IL", "Denver, CO", 0.0);
    let route = RouteProfile::from_legs(
        vec![RouteSegment::new(120.0, 2.0)],
        vec![RouteSegment::new(630.0, 9.5)],
    )
    .unwrap();

    let itinerary = planner.plan(&trip, &route).unwrap();
    let summary = check_compliance(&itinerary.logs, 0.0, &default_regulation());

    assert!(summary.is_compliant);
    assert_eq!(summary.trip_driving_hours, 11.5);
    assert_eq!(summary.trip_on_duty_hours, 14.0);
    assert_eq!(summary.cycle_hours_remaining, 56.0);
    assert_eq!(summary.cycle_hours_used_percentage, 20.0);
}

#[test]
fn test_compliance_overflow_clamped_but_flagged() {
    let planner = ItineraryPlanner::new(default_regulation()).unwrap();
    let trip = TripDetails::new("Chicago, IL", "Joliet, IL", "Denver, CO", 69.0);
    let route = RouteProfile::from_legs(
        vec![RouteSegment::new(60.0, 1.0)],
        vec![RouteSegment::new(90.0, 1.5)],
    )
    .unwrap();

    // 2.5 driving hours plus the pre-trip inspection and two cargo-handling
    // stops: 5 on-duty hours on top of 69 already used.
    let itinerary = planner.plan(&trip, &route).unwrap();
    let summary = check_compliance(&itinerary.logs, 69.0, &default_regulation());

    assert_eq!(summary.trip_on_duty_hours, 5.0);
    assert!(!summary.is_compliant);
    assert_eq!(summary.cycle_hours_remaining, 0.0);
    assert_eq!(summary.cycle_hours_used_percentage, 100.0);
}

#[test]
fn test_compliance_summary_serializes_for_transport() {
    let summary = check_compliance(&[], 35.0, &default_regulation());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["isCompliant"], true);
    assert_eq!(json["cycleHoursUsed"], 35.0);
    assert_eq!(json["cycleHoursRemaining"], 35.0);
    assert_eq!(json["cycleHoursUsedPercentage"], 50.0);
}
