//! # Bracket Seeds
//!
//! Seeding mathematics for single and double elimination brackets of any size.
//!
//! The library is pure computation: it never talks to a bracket host or a
//! ranking service. Callers fetch participants and rankings themselves and
//! apply the returned seed lists to their live brackets.
//!
//! ## Core Modules
//!
//! - [`bracket`]: How many participants play the first round, and how many
//!   tie for last place, for a bracket padded with byes
//! - [`seeding`]: Buckets of interchangeable seeds, placement-preserving
//!   shuffles, and dense seeding from a partial ranking
//!
//! ## Example
//!
//! ```
//! use bracket_seeds::{BracketFormat, buckets};
//!
//! let sequence = buckets(9, BracketFormat::Double).unwrap();
//! assert_eq!(sequence.sizes(), vec![1, 2, 2, 1, 1, 1, 1]);
//! ```

/// Bracket arithmetic: first round sizes and last-place ties.
pub mod bracket;
pub use bracket::{BracketFormat, ParticipantCount, first_round_size, num_placing_last};

/// Seeding configuration.
pub mod config;
pub use config::SeedingConfig;

/// Error types.
pub mod errors;
pub use errors::{SeedingError, SeedingResult};

/// Bucketing, shuffling and rank reconciliation.
pub mod seeding;
pub use seeding::{
    Rank, RankedField, RankingTable, Seed, SeedShuffler, TiePolicy, buckets, ranks_to_seeds,
    resolve_rank, shuffled_seeds,
};
