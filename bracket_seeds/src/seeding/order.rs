//! Applying seed lists to participants.

use super::buckets::Seed;
use crate::errors::{SeedingError, SeedingResult};

/// Reorder values by their corresponding seeds.
///
/// The value at index i ends up at position `seeds[i]` (1-based), so
/// `["x", "y", "z"]` with seeds `[2, 1, 3]` becomes `["y", "x", "z"]`.
///
/// # Errors
///
/// Fails if the lengths differ or `seeds` is not a permutation of `1..=N`.
pub fn sort_by_seeds<T>(values: Vec<T>, seeds: &[Seed]) -> SeedingResult<Vec<T>> {
    if values.len() != seeds.len() {
        return Err(SeedingError::SeedCountMismatch {
            values: values.len(),
            seeds: seeds.len(),
        });
    }

    let count = values.len();
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(count).collect();
    for (value, &seed) in values.into_iter().zip(seeds) {
        if seed == 0 || seed > count {
            return Err(SeedingError::InvalidSeed { seed, count });
        }
        let slot = &mut slots[seed - 1];
        if slot.is_some() {
            return Err(SeedingError::InvalidSeed { seed, count });
        }
        *slot = Some(value);
    }

    // Every slot is filled: N distinct seeds in 1..=N
    Ok(slots.into_iter().flatten().collect())
}
