//! Hours-of-Service regulation parameters.

use serde::{Deserialize, Serialize};

/// A single Hours-of-Service rule set.
///
/// Exactly one profile is used per calculation; the engine never consults any
/// other source of thresholds. All hour fields are expressed in fractional
/// hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationProfile {
    /// Human-readable rule set name.
    #[serde(default)]
    pub name: String,
    /// Maximum driving hours per shift before a mandatory rest period.
    pub max_driving_hours: f64,
    /// Maximum elapsed duty hours per shift, including non-driving duty.
    pub max_duty_hours: f64,
    /// Length of the mandatory off-duty/sleeper period between shifts.
    pub required_rest_hours: f64,
    /// Rolling cap on total on-duty hours over the cycle window.
    pub cycle_hours: f64,
    /// Number of days in the rolling cycle window.
    pub cycle_days: u32,
    /// Continuous driving hours before a short break is mandatory.
    pub break_required_after: f64,
    /// Duration of the mandatory short break.
    pub break_duration: f64,
}

impl RegulationProfile {
    /// Standard FMCSA property-carrying 70-hour/8-day rule set.
    pub fn property_carrying_70_hour() -> Self {
        Self {
            name: "Property-Carrying 70-Hour/8-Day".to_string(),
            max_driving_hours: 11.0,
            max_duty_hours: 14.0,
            required_rest_hours: 10.0,
            cycle_hours: 70.0,
            cycle_days: 8,
            break_required_after: 8.0,
            break_duration: 0.5,
        }
    }

    /// Check that every threshold is usable.
    ///
    /// # Returns
    /// * `Ok(())` when all hour fields are positive and `cycle_days >= 1`
    /// * `Err(message)` naming the first offending field otherwise
    pub fn validate(&self) -> Result<(), String> {
        let hour_fields = [
            ("max_driving_hours", self.max_driving_hours),
            ("max_duty_hours", self.max_duty_hours),
            ("required_rest_hours", self.required_rest_hours),
            ("cycle_hours", self.cycle_hours),
            ("break_required_after", self.break_required_after),
            ("break_duration", self.break_duration),
        ];
        for (field, value) in hour_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number of hours", field));
            }
        }
        if self.cycle_days < 1 {
            return Err("cycle_days must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for RegulationProfile {
    fn default() -> Self {
        Self::property_carrying_70_hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = RegulationProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.max_driving_hours, 11.0);
        assert_eq!(profile.max_duty_hours, 14.0);
        assert_eq!(profile.cycle_hours, 70.0);
        assert_eq!(profile.cycle_days, 8);
        assert_eq!(profile.break_required_after, 8.0);
        assert_eq!(profile.break_duration, 0.5);
    }

    #[test]
    fn test_validate_rejects_zero_hours() {
        let mut profile = RegulationProfile::default();
        profile.break_duration = 0.0;
        let err = profile.validate().unwrap_err();
        assert!(err.contains("break_duration"));
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let mut profile = RegulationProfile::default();
        profile.required_rest_hours = -10.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut profile = RegulationProfile::default();
        profile.cycle_hours = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_cycle_days() {
        let mut profile = RegulationProfile::default();
        profile.cycle_days = 0;
        let err = profile.validate().unwrap_err();
        assert!(err.contains("cycle_days"));
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = RegulationProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: RegulationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
