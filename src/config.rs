//! Display and input configuration for the front end
//!
//! Read from environment variables, with command-line flags applied on top:
//!   FINCALC_PRECISION     decimal places in text output (default 6)
//!   FINCALC_JSON          set to 1/true for JSON output
//!   FINCALC_MAX_ATTEMPTS  re-prompts allowed for unparsable input (default 3)

use std::env;

/// Default number of decimal places, matching C's `%lf`
pub const DEFAULT_PRECISION: usize = 6;

/// Default attempts per prompt before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Decimal places for monetary values and rates
    pub precision: usize,
    /// Emit results as JSON instead of text
    pub json: bool,
    /// Attempts per prompt (at least 1)
    pub max_attempts: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            json: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl DisplayConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let precision: usize = lookup("FINCALC_PRECISION")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.precision);

        let json = lookup("FINCALC_JSON")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.json);

        let max_attempts: u32 = lookup("FINCALC_MAX_ATTEMPTS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_attempts);

        Self {
            precision,
            json,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Format a number with the configured precision
    pub fn fmt(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DisplayConfig::from_lookup(|_| None);
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.fmt(100.0), "100.000000");
    }

    #[test]
    fn test_overrides() {
        let config = DisplayConfig::from_lookup(lookup_from(&[
            ("FINCALC_PRECISION", "2"),
            ("FINCALC_JSON", "true"),
            ("FINCALC_MAX_ATTEMPTS", "5"),
        ]));
        assert_eq!(config.precision, 2);
        assert!(config.json);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.fmt(909.090909), "909.09");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = DisplayConfig::from_lookup(lookup_from(&[
            ("FINCALC_PRECISION", "lots"),
            ("FINCALC_JSON", "0"),
            ("FINCALC_MAX_ATTEMPTS", "0"),
        ]));
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(!config.json);
        // Zero attempts would never read anything
        assert_eq!(config.max_attempts, 1);
    }
}
