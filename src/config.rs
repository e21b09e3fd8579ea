//! Regulation profile configuration.
//!
//! The active regulation profile is read from a TOML file (`hos.toml`). The
//! loader fails fast on a missing file, a missing `[regulation]` table, or an
//! invalid profile; callers that want the built-in FMCSA default must request
//! it explicitly via [`RegulationProfile::property_carrying_70_hour`].

use crate::error::{PlanError, PlanResult};
use crate::models::RegulationProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Planner configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// The single active regulation profile.
    pub regulation: RegulationProfile,
}

impl PlannerConfig {
    /// Load planner configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    /// Returns [`PlanError::Configuration`] if the file cannot be read or
    /// parsed, or if the profile fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PlanResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PlanError::configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse planner configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> PlanResult<Self> {
        let config: PlannerConfig = toml::from_str(content).map_err(|e| {
            PlanError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config
            .regulation
            .validate()
            .map_err(|e| PlanError::configuration(format!("Invalid regulation profile: {}", e)))?;
        log::debug!("loaded regulation profile '{}'", config.regulation.name);
        Ok(config)
    }

    /// Load planner configuration from the default location.
    ///
    /// Searches for `hos.toml` in the current directory, then the parent
    /// directory.
    ///
    /// # Errors
    /// Returns [`PlanError::Configuration`] if no config file is found or
    /// parsing fails.
    pub fn from_default_location() -> PlanResult<Self> {
        let search_paths = [PathBuf::from("hos.toml"), PathBuf::from("../hos.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(PlanError::configuration(
            "No hos.toml found in standard locations",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[regulation]
name = "Property-Carrying 70-Hour/8-Day"
max_driving_hours = 11.0
max_duty_hours = 14.0
required_rest_hours = 10.0
cycle_hours = 70.0
cycle_days = 8
break_required_after = 8.0
break_duration = 0.5
"#;

        let config = PlannerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.regulation, RegulationProfile::property_carrying_70_hour());
    }

    #[test]
    fn test_missing_regulation_table_fails() {
        let toml = r#"
[other]
value = 1
"#;
        let result = PlannerConfig::from_toml_str(toml);
        assert!(matches!(result, Err(PlanError::Configuration(_))));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let toml = r#"
[regulation]
name = "Incomplete"
max_driving_hours = 11.0
"#;
        assert!(PlannerConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_invalid_profile_values_fail() {
        let toml = r#"
[regulation]
name = "Broken"
max_driving_hours = 0.0
max_duty_hours = 14.0
required_rest_hours = 10.0
cycle_hours = 70.0
cycle_days = 8
break_required_after = 8.0
break_duration = 0.5
"#;
        let err = PlannerConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("max_driving_hours"));
    }

    #[test]
    fn test_missing_file_fails() {
        let result = PlannerConfig::from_file("/nonexistent/hos.toml");
        assert!(matches!(result, Err(PlanError::Configuration(_))));
    }
}
