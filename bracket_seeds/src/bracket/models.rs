//! Bracket data models.

use crate::errors::{SeedingError, SeedingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elimination format of a bracket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketFormat {
    /// One loss and you're out
    Single,
    /// Losers drop into a losers' bracket and are out after a second loss
    #[default]
    Double,
}

impl BracketFormat {
    /// Whether the format has a losers' bracket
    pub fn has_losers_bracket(self) -> bool {
        matches!(self, BracketFormat::Double)
    }
}

impl fmt::Display for BracketFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketFormat::Single => write!(f, "single elimination"),
            BracketFormat::Double => write!(f, "double elimination"),
        }
    }
}

impl FromStr for BracketFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "single" | "single elimination" | "se" => Ok(BracketFormat::Single),
            "double" | "double elimination" | "de" => Ok(BracketFormat::Double),
            _ => Err(format!("Unknown bracket format: {s}")),
        }
    }
}

/// Number of participants in a bracket, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantCount(usize);

impl ParticipantCount {
    /// Get the count
    pub fn get(self) -> usize {
        self.0
    }

    /// Whether the count is an exact power of two
    pub fn is_power_of_two(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Largest power of two not exceeding the count
    pub fn nearest_smaller_power_of_two(self) -> usize {
        1 << (usize::BITS - 1 - self.0.leading_zeros())
    }
}

impl TryFrom<usize> for ParticipantCount {
    type Error = SeedingError;

    fn try_from(value: usize) -> SeedingResult<Self> {
        if value == 0 {
            return Err(SeedingError::InvalidParticipantCount(0));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for ParticipantCount {
    type Error = SeedingError;

    fn try_from(value: i64) -> SeedingResult<Self> {
        if value <= 0 {
            return Err(SeedingError::InvalidParticipantCount(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| SeedingError::InvalidParticipantCount(value))
    }
}

impl<'de> Deserialize<'de> for ParticipantCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        ParticipantCount::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ParticipantCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
