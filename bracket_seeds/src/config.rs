//! Seeding configuration models.

use crate::bracket::BracketFormat;
use crate::seeding::TiePolicy;
use serde::{Deserialize, Serialize};

/// Default number of losers' rounds that feed an amateur bracket
pub const DEFAULT_AMATEUR_CUTOFF: usize = 2;

/// Seeding configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Bracket format (default: double elimination)
    pub format: BracketFormat,

    /// Handling of tied known ranks (default: reject)
    pub tie_policy: TiePolicy,

    /// Losers' round after which players no longer qualify for amateurs
    pub amateur_cutoff: usize,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            format: BracketFormat::Double,
            tie_policy: TiePolicy::Reject,
            amateur_cutoff: DEFAULT_AMATEUR_CUTOFF,
        }
    }
}

impl SeedingConfig {
    /// Config for a given bracket format
    pub fn for_format(format: BracketFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the tie policy
    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    /// Set the amateur cutoff
    pub fn with_amateur_cutoff(mut self, amateur_cutoff: usize) -> Self {
        self.amateur_cutoff = amateur_cutoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedingConfig::default();
        assert_eq!(config.format, BracketFormat::Double);
        assert_eq!(config.tie_policy, TiePolicy::Reject);
        assert_eq!(config.amateur_cutoff, 2);
    }

    #[test]
    fn test_config_builders() {
        let config = SeedingConfig::for_format(BracketFormat::Single)
            .with_tie_policy(TiePolicy::InputOrder)
            .with_amateur_cutoff(3);
        assert_eq!(config.format, BracketFormat::Single);
        assert_eq!(config.tie_policy, TiePolicy::InputOrder);
        assert_eq!(config.amateur_cutoff, 3);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SeedingConfig = serde_json::from_str(r#"{"format": "single"}"#).unwrap();
        assert_eq!(config.format, BracketFormat::Single);
        assert_eq!(config.tie_policy, TiePolicy::Reject);
        assert_eq!(config.amateur_cutoff, DEFAULT_AMATEUR_CUTOFF);
    }
}
