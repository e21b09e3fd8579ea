//! Service layer: trip validation, itinerary planning, and compliance
//! checking.
//!
//! Callers are expected to run the validator first, resolve the route
//! externally, then hand the resolved profile to the planner and feed the
//! generated logs to the compliance checker.

pub mod compliance;
pub mod itinerary;
pub mod validator;

pub use compliance::{check_compliance, ComplianceSummary};
pub use itinerary::ItineraryPlanner;
pub use validator::{validate_trip, ValidationOutcome};
