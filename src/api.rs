//! Public API surface for the trip planner.
//!
//! This file consolidates the data types callers exchange with the crate.
//! All types serialize to JSON via serde.

pub use crate::error::{PlanError, PlanResult};
pub use crate::models::itinerary::{
    ActivityType, DailyLog, DutyActivity, Itinerary, Stop, StopKind, TotalHours,
};
pub use crate::models::regulation::RegulationProfile;
pub use crate::models::route::{RouteProfile, RouteSegment};
pub use crate::models::time::TripTime;
pub use crate::models::trip::TripDetails;
pub use crate::services::compliance::{check_compliance, ComplianceSummary};
pub use crate::services::itinerary::ItineraryPlanner;
pub use crate::services::validator::{validate_trip, ValidationOutcome};
