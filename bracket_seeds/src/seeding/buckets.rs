//! Seed buckets.
//!
//! A bucket is a run of consecutive seeds that all share the same projected
//! worst-case placement. The participants placing last form the first bucket;
//! once they are removed the next bucket is the last-place group of the
//! smaller bracket, and so on up to the top seed.

use crate::bracket::{BracketFormat, ParticipantCount, num_placing_last};
use crate::errors::{SeedingError, SeedingResult};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Seed number, 1 being the top seed
pub type Seed = usize;

/// Lazy sequence of bucket sizes, last-place bucket first
#[derive(Debug, Clone)]
pub struct BucketSizes {
    remaining: usize,
    format: BracketFormat,
    failed: bool,
}

impl Iterator for BucketSizes {
    type Item = SeedingResult<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.failed {
            return None;
        }

        let size = match num_placing_last(self.remaining, self.format) {
            Ok(size) => size,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        // A zero-sized bucket would never terminate
        if size == 0 || size > self.remaining {
            self.failed = true;
            return Some(Err(SeedingError::BucketOverflow {
                bucket: size,
                remaining: self.remaining,
            }));
        }

        self.remaining -= size;
        Some(Ok(size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 || self.failed {
            (0, Some(0))
        } else {
            (1, Some(self.remaining))
        }
    }
}

impl FusedIterator for BucketSizes {}

/// Sizes of the buckets for a bracket, from last place to first place
///
/// # Errors
///
/// Returns [`SeedingError::InvalidParticipantCount`] when `num_participants` is 0.
/// Errors from the individual steps are yielded by the iterator itself.
pub fn bucket_sizes(num_participants: usize, format: BracketFormat) -> SeedingResult<BucketSizes> {
    let count = ParticipantCount::try_from(num_participants)?;
    Ok(BucketSizes {
        remaining: count.get(),
        format,
        failed: false,
    })
}

/// A contiguous range of interchangeable seeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bucket {
    /// Best (lowest numbered) seed in the bucket
    top: Seed,
    /// Worst (highest numbered) seed in the bucket
    bottom: Seed,
}

impl Bucket {
    /// Create a bucket holding seeds `top..=bottom`
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError::InvalidBucket`] if `top` is 0 or past `bottom`.
    pub fn new(top: Seed, bottom: Seed) -> SeedingResult<Self> {
        if top == 0 || top > bottom {
            return Err(SeedingError::InvalidBucket { top, bottom });
        }
        Ok(Self { top, bottom })
    }

    /// Best seed in the bucket
    pub fn top(&self) -> Seed {
        self.top
    }

    /// Worst seed in the bucket
    pub fn bottom(&self) -> Seed {
        self.bottom
    }

    /// Seeds in the bucket, best first
    pub fn seeds(&self) -> RangeInclusive<Seed> {
        self.top..=self.bottom
    }

    /// Number of seeds in the bucket
    pub fn len(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Buckets always hold at least one seed
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the seed falls inside the bucket
    pub fn contains(&self, seed: Seed) -> bool {
        self.seeds().contains(&seed)
    }
}

#[derive(Deserialize)]
struct RawBucket {
    top: Seed,
    bottom: Seed,
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawBucket::deserialize(deserializer)?;
        Bucket::new(raw.top, raw.bottom).map_err(serde::de::Error::custom)
    }
}

/// Partition of seeds `1..=N` into buckets, ordered from last place to first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSequence {
    num_participants: usize,
    format: BracketFormat,
    buckets: Vec<Bucket>,
}

impl BucketSequence {
    /// Compute the buckets for a bracket
    pub fn compute(num_participants: usize, format: BracketFormat) -> SeedingResult<Self> {
        let mut buckets = Vec::new();
        let mut bottom = num_participants;
        for size in bucket_sizes(num_participants, format)? {
            let size = size?;
            let top = bottom + 1 - size;
            buckets.push(Bucket { top, bottom });
            bottom = top - 1;
        }

        log::debug!(
            "{} participants ({}): {} buckets, sizes {:?}",
            num_participants,
            format,
            buckets.len(),
            buckets.iter().map(Bucket::len).collect::<Vec<_>>()
        );

        Ok(Self {
            num_participants,
            format,
            buckets,
        })
    }

    /// Number of participants covered
    pub fn num_participants(&self) -> usize {
        self.num_participants
    }

    /// Bracket format the buckets were computed for
    pub fn format(&self) -> BracketFormat {
        self.format
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// A sequence always covers at least one seed
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets from last place to first place
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Bucket sizes from last place to first place
    pub fn sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(Bucket::len).collect()
    }

    /// Bucket holding the top seed
    pub fn best(&self) -> Option<&Bucket> {
        self.buckets.last()
    }

    /// Bucket holding the bottom seed
    pub fn worst(&self) -> Option<&Bucket> {
        self.buckets.first()
    }

    /// Bucket containing a given seed
    pub fn bucket_of(&self, seed: Seed) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.contains(seed))
    }
}

impl<'a> IntoIterator for &'a BucketSequence {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Buckets of seeds for a bracket, from last place to first place
pub fn buckets(num_participants: usize, format: BracketFormat) -> SeedingResult<BucketSequence> {
    BucketSequence::compute(num_participants, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(n: usize, format: BracketFormat) -> Vec<usize> {
        bucket_sizes(n, format)
            .unwrap()
            .collect::<SeedingResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_bucket_sizes_nine_double() {
        // 1st to 4th unique, then the irregular tail
        assert_eq!(sizes(9, BracketFormat::Double), vec![1, 2, 2, 1, 1, 1, 1]);
    }

    #[test]
    fn test_bucket_sizes_nine_single() {
        assert_eq!(sizes(9, BracketFormat::Single), vec![1, 4, 2, 2]);
    }

    #[test]
    fn test_bucket_sizes_power_of_two() {
        assert_eq!(sizes(8, BracketFormat::Double), vec![2, 2, 1, 1, 1, 1]);
        assert_eq!(
            sizes(16, BracketFormat::Double),
            vec![4, 4, 2, 2, 1, 1, 1, 1]
        );
        assert_eq!(sizes(16, BracketFormat::Single), vec![8, 4, 2, 2]);
    }

    #[test]
    fn test_bucket_sizes_single_participant() {
        assert_eq!(sizes(1, BracketFormat::Double), vec![1]);
        assert_eq!(sizes(1, BracketFormat::Single), vec![1]);
    }

    #[test]
    fn test_bucket_sizes_rejects_zero() {
        assert!(matches!(
            bucket_sizes(0, BracketFormat::Double),
            Err(SeedingError::InvalidParticipantCount(0))
        ));
    }

    #[test]
    fn test_buckets_cover_field() {
        let sequence = buckets(9, BracketFormat::Double).unwrap();
        let ranges: Vec<_> = sequence.iter().map(Bucket::seeds).collect();
        assert_eq!(
            ranges,
            vec![9..=9, 7..=8, 5..=6, 4..=4, 3..=3, 2..=2, 1..=1]
        );
        assert_eq!(sequence.worst().unwrap().seeds(), 9..=9);
        assert_eq!(sequence.best().unwrap().seeds(), 1..=1);
        assert_eq!(sequence.len(), 7);
    }

    #[test]
    fn test_buckets_single_elimination() {
        let sequence = buckets(9, BracketFormat::Single).unwrap();
        let ranges: Vec<_> = sequence.iter().map(Bucket::seeds).collect();
        assert_eq!(ranges, vec![9..=9, 5..=8, 3..=4, 1..=2]);
    }

    #[test]
    fn test_bucket_of() {
        let sequence = buckets(16, BracketFormat::Double).unwrap();
        assert_eq!(sequence.bucket_of(14).unwrap().seeds(), 13..=16);
        assert_eq!(sequence.bucket_of(9).unwrap().seeds(), 9..=12);
        assert_eq!(sequence.bucket_of(1).unwrap().len(), 1);
        assert!(sequence.bucket_of(17).is_none());
        assert!(sequence.bucket_of(0).is_none());
    }

    #[test]
    fn test_bucket_new_validates_range() {
        let bucket = Bucket::new(5, 8).unwrap();
        assert_eq!((bucket.top(), bucket.bottom(), bucket.len()), (5, 8, 4));
        assert!(matches!(
            Bucket::new(5, 3),
            Err(SeedingError::InvalidBucket { top: 5, bottom: 3 })
        ));
        assert!(Bucket::new(0, 3).is_err());
    }

    #[test]
    fn test_bucket_deserialize_validates_range() {
        let bucket: Bucket = serde_json::from_str(r#"{"top":3,"bottom":5}"#).unwrap();
        assert_eq!(bucket.seeds(), 3..=5);

        let err = serde_json::from_str::<Bucket>(r#"{"top":5,"bottom":3}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid bucket"));
    }

    #[test]
    fn test_buckets_are_stable() {
        let first = buckets(37, BracketFormat::Double).unwrap();
        let second = buckets(37, BracketFormat::Double).unwrap();
        assert_eq!(first, second);
    }
}
