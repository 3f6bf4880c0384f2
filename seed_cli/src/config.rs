//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use bracket_seeds::{BracketFormat, SeedingConfig, TiePolicy};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete CLI configuration loaded from environment variables and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Seeding configuration passed to the library
    pub seeding: SeedingConfig,
    /// Fixed seed for the random source, for reproducible shuffles
    pub rng_seed: Option<u64>,
    /// Ranking table JSON file
    pub rankings_file: Option<PathBuf>,
}

/// Values given on the command line, taking priority over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub format: Option<BracketFormat>,
    pub tie_policy: Option<TiePolicy>,
    pub rng_seed: Option<u64>,
    pub rankings_file: Option<PathBuf>,
    pub amateur_cutoff: Option<usize>,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from CLI flags, used in place of the environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using a custom variable lookup
    pub fn from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SeedingConfig::default();

        let format = match overrides.format {
            Some(format) => format,
            None => parse_var(&lookup, "SEED_FORMAT")?.unwrap_or(defaults.format),
        };

        let tie_policy = match overrides.tie_policy {
            Some(policy) => policy,
            None => parse_var(&lookup, "SEED_TIE_POLICY")?.unwrap_or(defaults.tie_policy),
        };

        let amateur_cutoff = match overrides.amateur_cutoff {
            Some(cutoff) => cutoff,
            None => parse_var(&lookup, "SEED_AMATEUR_CUTOFF")?.unwrap_or(defaults.amateur_cutoff),
        };

        let rng_seed = match overrides.rng_seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, "SEED_RNG_SEED")?,
        };

        let rankings_file = overrides
            .rankings_file
            .or_else(|| lookup("SEED_RANKINGS_FILE").map(PathBuf::from));

        Ok(CliConfig {
            seeding: SeedingConfig {
                format,
                tie_policy,
                amateur_cutoff,
            },
            rng_seed,
            rankings_file,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeding.amateur_cutoff == 0 {
            return Err(ConfigError::Invalid {
                var: "SEED_AMATEUR_CUTOFF".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if let Some(path) = &self.rankings_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid {
                    var: "SEED_RANKINGS_FILE".to_string(),
                    reason: "Must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse a variable, failing if it is set but malformed
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(ConfigOverrides::default(), |_| None).unwrap();
        assert_eq!(config.seeding, SeedingConfig::default());
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.rankings_file, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_values() {
        let lookup = lookup_from(&[
            ("SEED_FORMAT", "single"),
            ("SEED_TIE_POLICY", "input_order"),
            ("SEED_RNG_SEED", "42"),
            ("SEED_RANKINGS_FILE", "norcal.json"),
            ("SEED_AMATEUR_CUTOFF", "3"),
        ]);
        let config = CliConfig::from_lookup(ConfigOverrides::default(), lookup).unwrap();

        assert_eq!(config.seeding.format, BracketFormat::Single);
        assert_eq!(config.seeding.tie_policy, TiePolicy::InputOrder);
        assert_eq!(config.seeding.amateur_cutoff, 3);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.rankings_file, Some(PathBuf::from("norcal.json")));
    }

    #[test]
    fn test_overrides_win() {
        let lookup = lookup_from(&[("SEED_FORMAT", "single"), ("SEED_RNG_SEED", "1")]);
        let overrides = ConfigOverrides {
            format: Some(BracketFormat::Double),
            rng_seed: Some(7),
            ..Default::default()
        };
        let config = CliConfig::from_lookup(overrides, lookup).unwrap();
        assert_eq!(config.seeding.format, BracketFormat::Double);
        assert_eq!(config.rng_seed, Some(7));
    }

    #[test]
    fn test_malformed_env_value() {
        let lookup = lookup_from(&[("SEED_FORMAT", "swiss")]);
        let err = CliConfig::from_lookup(ConfigOverrides::default(), lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "SEED_FORMAT"));
        assert!(err.to_string().contains("swiss"));
    }

    #[test]
    fn test_parse_var_typed() {
        let lookup = lookup_from(&[("SEED_RNG_SEED", " 99 "), ("SEED_AMATEUR_CUTOFF", "")]);
        assert_eq!(parse_var::<u64, _>(&lookup, "SEED_RNG_SEED").unwrap(), Some(99));
        assert_eq!(parse_var::<usize, _>(&lookup, "SEED_AMATEUR_CUTOFF").unwrap(), None);
        assert_eq!(parse_var::<usize, _>(&lookup, "SEED_FORMAT").unwrap(), None);

        let lookup = lookup_from(&[("SEED_RNG_SEED", "-1")]);
        let err = parse_var::<u64, _>(&lookup, "SEED_RNG_SEED").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "SEED_RNG_SEED"));
    }

    #[test]
    fn test_validation_cutoff_zero() {
        let overrides = ConfigOverrides {
            amateur_cutoff: Some(0),
            ..Default::default()
        };
        let config = CliConfig::from_lookup(overrides, |_| None).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequired {
            var: "SEED_RANKINGS_FILE".to_string(),
            hint: "Pass --rankings FILE".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SEED_RANKINGS_FILE"));
        assert!(msg.contains("--rankings"));
    }
}
