//! Error types for bracket seeding.

use thiserror::Error;

/// Result type for seeding operations
pub type SeedingResult<T> = Result<T, SeedingError>;

/// Seeding errors
///
/// Every operation either returns a complete, valid result or fails with one
/// of these. Nothing here is transient, so none of them are worth retrying.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Participant count must be at least 1
    #[error("Invalid participant count: {0} (must be at least 1)")]
    InvalidParticipantCount(i64),

    /// An intermediate bracket would have no participants
    #[error("Empty sub-bracket while computing {stage}")]
    EmptyBracket { stage: &'static str },

    /// A computed bucket is empty or larger than the remaining field
    #[error("Invalid bucket of size {bucket} with {remaining} participants remaining")]
    BucketOverflow { bucket: usize, remaining: usize },

    /// Bucket bounds out of order
    #[error("Invalid bucket {top}..={bottom}")]
    InvalidBucket { top: usize, bottom: usize },

    /// Two participants share the same known rank
    #[error("Ambiguous rank {rank}: shared by entries {first} and {second}")]
    AmbiguousRank {
        rank: u32,
        first: usize,
        second: usize,
    },

    /// Known ranks start at 1
    #[error("Invalid rank: {0}")]
    InvalidRank(u32),

    /// Seed list does not line up with the values it orders
    #[error("Seed count mismatch: {values} values, {seeds} seeds")]
    SeedCountMismatch { values: usize, seeds: usize },

    /// Seed list is not a permutation of 1..=count
    #[error("Invalid seed {seed} for a field of {count}")]
    InvalidSeed { seed: usize, count: usize },

    /// Ranking table payload could not be parsed
    #[error("Ranking table error: {0}")]
    RankingTable(#[from] serde_json::Error),
}

impl SeedingError {
    /// Get a short message suitable for showing to a tournament organizer
    ///
    /// Internal invariant violations are collapsed into a single message since
    /// there is nothing the organizer can do about them.
    pub fn client_message(&self) -> String {
        match self {
            SeedingError::EmptyBracket { .. } | SeedingError::BucketOverflow { .. } => {
                "Internal seeding error".to_string()
            }
            SeedingError::RankingTable(_) => "Ranking data could not be read".to_string(),
            _ => self.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input rather than a bug
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            SeedingError::EmptyBracket { .. } | SeedingError::BucketOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeedingError::InvalidParticipantCount(0);
        assert!(err.to_string().contains('0'));

        let err = SeedingError::AmbiguousRank {
            rank: 3,
            first: 1,
            second: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("entries 1 and 4"));
    }

    #[test]
    fn test_client_message_hides_internal_errors() {
        let err = SeedingError::EmptyBracket {
            stage: "losers bracket",
        };
        assert_eq!(err.client_message(), "Internal seeding error");
        assert!(!err.is_input_error());

        let err = SeedingError::InvalidSeed { seed: 7, count: 5 };
        assert_eq!(err.client_message(), err.to_string());
        assert!(err.is_input_error());
    }
}
