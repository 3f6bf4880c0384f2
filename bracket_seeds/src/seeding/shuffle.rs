//! Placement-preserving seed shuffling.

use super::buckets::{BucketSequence, Seed};
use super::order::sort_by_seeds;
use crate::bracket::BracketFormat;
use crate::errors::SeedingResult;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle seeds `1..=N` without changing anyone's projected placement.
///
/// Each bucket is permuted independently, in last-place-first order, and the
/// shuffled buckets are then laid out top seed first. For a given seed X the
/// value at index X - 1 is the seed that participant should now hold.
pub fn shuffled_seeds<R>(
    num_participants: usize,
    format: BracketFormat,
    rng: &mut R,
) -> SeedingResult<Vec<Seed>>
where
    R: Rng + ?Sized,
{
    let buckets = BucketSequence::compute(num_participants, format)?;

    let mut shuffled_buckets: Vec<Vec<Seed>> = Vec::with_capacity(buckets.len());
    for bucket in &buckets {
        let mut seeds: Vec<Seed> = bucket.seeds().collect();
        seeds.shuffle(rng);
        shuffled_buckets.push(seeds);
    }

    Ok(shuffled_buckets.into_iter().rev().flatten().collect())
}

/// Seed shuffler owning its random source
pub struct SeedShuffler<R = ThreadRng> {
    /// Random number generator
    rng: R,
}

impl SeedShuffler<ThreadRng> {
    /// Create a shuffler backed by the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl SeedShuffler<StdRng> {
    /// Create a reproducible shuffler from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SeedShuffler<R> {
    /// Create a shuffler from an existing random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffled seeds for a bracket
    ///
    /// # Arguments
    ///
    /// * `num_participants` - Size of the field
    /// * `format` - Bracket format used to compute the buckets
    ///
    /// # Returns
    ///
    /// * `SeedingResult<Vec<Seed>>` - New seed for each current seed, top seed first
    pub fn shuffled_seeds(
        &mut self,
        num_participants: usize,
        format: BracketFormat,
    ) -> SeedingResult<Vec<Seed>> {
        shuffled_seeds(num_participants, format, &mut self.rng)
    }

    /// Shuffle a field that is currently ordered top seed first
    ///
    /// # Arguments
    ///
    /// * `participants` - Participants ordered from 1st seed to last seed
    /// * `format` - Bracket format used to compute the buckets
    ///
    /// # Returns
    ///
    /// * `SeedingResult<Vec<T>>` - Participants in their new seed order
    pub fn shuffle_participants<T>(
        &mut self,
        participants: Vec<T>,
        format: BracketFormat,
    ) -> SeedingResult<Vec<T>> {
        let seeds = self.shuffled_seeds(participants.len(), format)?;
        sort_by_seeds(participants, &seeds)
    }
}

impl Default for SeedShuffler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}
