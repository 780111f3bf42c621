//! Configuration loaded from TOML.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! [limits]
//! min_weight = 125
//! min_age = 18
//! max_age = 40
//!
//! [random]
//! url = "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new"
//! timeout_ms = 5000
//!
//! [roster]
//! capacity = 64
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{ValidationLimits, MIN_WEIGHT};

/// Default random.org endpoint: one decimal fraction, two digits, plain text
pub const DEFAULT_RANDOM_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default number of pre-allocated roster slots
pub const DEFAULT_ROSTER_CAPACITY: usize = 64;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub limits: ValidationLimits,
    pub random: RandomConfig,
    pub roster: RosterConfig,
}

/// Remote randomness service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RANDOM_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Roster storage settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub capacity: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_ROSTER_CAPACITY,
        }
    }
}

impl RingConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.min_weight < MIN_WEIGHT {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "min_weight {} is below the lightest weight class ({MIN_WEIGHT})",
                    self.limits.min_weight
                ),
            });
        }
        if self.limits.min_age > self.limits.max_age {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "min_age {} is greater than max_age {}",
                    self.limits.min_age, self.limits.max_age
                ),
            });
        }
        if self.random.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "random.timeout_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RingConfig::from_toml_str("").unwrap();
        assert_eq!(config, RingConfig::default());
        assert_eq!(config.limits.min_weight, 125);
        assert_eq!(config.random.timeout_ms, 5_000);
        assert_eq!(config.roster.capacity, 64);
    }

    #[test]
    fn test_partial_override() {
        let config = RingConfig::from_toml_str(
            r#"
            [limits]
            min_weight = 140

            [random]
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.limits.min_weight, 140);
        assert_eq!(config.limits.max_age, 40);
        assert_eq!(config.random.timeout_ms, 250);
        assert_eq!(config.random.url, DEFAULT_RANDOM_URL);
    }

    #[test]
    fn test_invalid_age_range() {
        let result = RingConfig::from_toml_str(
            r#"
            [limits]
            min_age = 30
            max_age = 20
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_min_weight_below_class_floor_rejected() {
        let result = RingConfig::from_toml_str("[limits]\nmin_weight = 100\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));

        assert!(RingConfig::from_toml_str("[limits]\nmin_weight = 125\n").is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = RingConfig::from_toml_str("[random]\ntimeout_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = RingConfig::from_toml_str("[limits\nmin_weight = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RingConfig::load("/nonexistent/boxing-ring.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
