//! Error types for trip planning.
//!
//! All failure modes of the crate funnel into [`PlanError`], which carries a
//! human-readable message plus a machine-usable kind. A failed calculation
//! never yields a partial itinerary.

use std::collections::BTreeMap;

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Error type for trip planning operations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// No active regulation profile, or a profile with invalid fields.
    /// Fatal to the calculation; surfaced to the caller, not retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid trip input, reported per field.
    #[error("Invalid trip input: {}", format_field_errors(.errors))]
    Input {
        /// Field name mapped to a human-readable message.
        errors: BTreeMap<String, String>,
    },

    /// The routing/geocoding collaborator failed or returned an unusable
    /// route. The underlying cause is preserved in the message.
    #[error("Route resolution failed: {0}")]
    UpstreamResolution(String),

    /// Unexpected failure during stop/log generation.
    #[error("Route calculation failed: {0}")]
    Calculation(String),
}

impl PlanError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an input error from a field -> message mapping.
    pub fn input(errors: BTreeMap<String, String>) -> Self {
        Self::Input { errors }
    }

    /// Create an upstream resolution error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamResolution(message.into())
    }

    /// Create a calculation error.
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation(message.into())
    }

    /// Machine-usable error kind string.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::Input { .. } => "input_error",
            Self::UpstreamResolution(_) => "upstream_resolution_error",
            Self::Calculation(_) => "runtime_error",
        }
    }
}

fn format_field_errors(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            PlanError::configuration("missing profile").kind(),
            "configuration_error"
        );
        assert_eq!(
            PlanError::upstream("no route").kind(),
            "upstream_resolution_error"
        );
        assert_eq!(PlanError::calculation("oops").kind(), "runtime_error");
        assert_eq!(PlanError::input(BTreeMap::new()).kind(), "input_error");
    }

    #[test]
    fn test_input_error_display_lists_fields() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "pickup_location".to_string(),
            "Pickup location is required.".to_string(),
        );
        let err = PlanError::input(errors);
        let text = err.to_string();
        assert!(text.contains("pickup_location"));
        assert!(text.contains("Pickup location is required."));
    }

    #[test]
    fn test_calculation_error_message_prefix() {
        let err = PlanError::calculation("segment 3 has zero duration");
        assert_eq!(
            err.to_string(),
            "Route calculation failed: segment 3 has zero duration"
        );
    }
}
