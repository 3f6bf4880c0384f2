//! Seed ordering: placement-preserving shuffles and rank reconciliation.
//!
//! This module provides:
//! - Seed buckets, groups of seeds sharing a projected worst-case placement
//! - Shuffling seeds within buckets using an injectable random source
//! - Dense seeding from an external, partial ranking
//! - Name resolution for players listed under several tags
//!
//! ## Example
//!
//! ```
//! use bracket_seeds::bracket::BracketFormat;
//! use bracket_seeds::seeding::{Rank, SeedShuffler, ranks_to_seeds};
//!
//! let mut shuffler = SeedShuffler::from_seed(42);
//! let seeds = shuffler.shuffled_seeds(9, BracketFormat::Double).unwrap();
//! assert_eq!(seeds.len(), 9);
//!
//! let seeds = ranks_to_seeds(&[Rank::Unknown, Rank::Known(5), Rank::Known(3)]).unwrap();
//! assert_eq!(seeds, vec![3, 2, 1]);
//! ```

pub mod buckets;
pub mod field;
pub mod order;
pub mod ranks;
pub mod shuffle;

pub use buckets::{Bucket, BucketSequence, BucketSizes, Seed, bucket_sizes, buckets};
pub use field::{Participant, RankedField, seed_tournament};
pub use order::sort_by_seeds;
pub use ranks::{
    Rank, RankingEntry, RankingTable, TiePolicy, aliases, ranks_to_seeds, ranks_to_seeds_with,
    resolve_rank,
};
pub use shuffle::{SeedShuffler, shuffled_seeds};
