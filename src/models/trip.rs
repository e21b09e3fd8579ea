//! Trip request details supplied by the caller.

use serde::{Deserialize, Serialize};

/// Caller-supplied trip parameters.
///
/// Locations are resolved names; the engine never geocodes them. The
/// validator checks these fields before planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    /// Where the driver currently is.
    pub current_location: String,
    /// Cargo pickup location.
    pub pickup_location: String,
    /// Final delivery location.
    pub dropoff_location: String,
    /// Hours already consumed in the current duty cycle.
    pub cycle_hours_used: f64,
    /// Shipping document reference carried into each daily log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_documents: Option<String>,
}

impl TripDetails {
    /// Create trip details without shipping documents.
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        cycle_hours_used: f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            cycle_hours_used,
            shipping_documents: None,
        }
    }

    /// Attach a shipping document reference.
    pub fn with_shipping_documents(mut self, documents: impl Into<String>) -> Self {
        self.shipping_documents = Some(documents.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_details_builder() {
        let trip = TripDetails::new("Chicago, IL", "Joliet, IL", "Denver, CO", 12.5)
            .with_shipping_documents("BOL-12345");
        assert_eq!(trip.current_location, "Chicago, IL");
        assert_eq!(trip.cycle_hours_used, 12.5);
        assert_eq!(trip.shipping_documents.as_deref(), Some("BOL-12345"));
    }

    #[test]
    fn test_trip_details_json_field_names() {
        let trip = TripDetails::new("A", "B", "C", 0.0);
        let json = serde_json::to_value(&trip).unwrap();
        assert!(json.get("currentLocation").is_some());
        assert!(json.get("pickupLocation").is_some());
        assert!(json.get("dropoffLocation").is_some());
        assert!(json.get("cycleHoursUsed").is_some());
        assert!(json.get("shippingDocuments").is_none());
    }
}
