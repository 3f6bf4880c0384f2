//! Elimination counting for single and double elimination brackets.
//!
//! Brackets whose size is not a power of two are padded with byes: the
//! participants beyond the nearest smaller power of two play an opening round
//! against the lowest of the bye-eligible seeds while everyone else waits.

use super::models::{BracketFormat, ParticipantCount};
use crate::errors::{SeedingError, SeedingResult};
use std::ops::RangeInclusive;

/// Brackets this small have fixed placements rather than derived ones.
const SMALL_BRACKET_LIMIT: usize = 4;

/// Number of participants who actually play in the first round of a bracket.
///
/// Power-of-two brackets (and brackets of one or two) play everyone. Otherwise
/// each leftover participant beyond the nearest smaller power of two faces one
/// top seed, so twice the leftover count play and the rest get a bye.
///
/// # Errors
///
/// Returns [`SeedingError::InvalidParticipantCount`] when `num_participants` is 0.
pub fn first_round_size(num_participants: usize) -> SeedingResult<usize> {
    let count = ParticipantCount::try_from(num_participants)?;
    Ok(first_round_size_of(count))
}

fn first_round_size_of(count: ParticipantCount) -> usize {
    let n = count.get();
    if n <= 2 || count.is_power_of_two() {
        return n;
    }

    let leftover = n - count.nearest_smaller_power_of_two();
    2 * leftover
}

/// Number of participants who tie for last place in a bracket.
///
/// In single elimination that is everyone who loses in the first round. In
/// double elimination the first-round losers and the second-round losers
/// meet in the opening losers' round, and the losers of that round place last.
///
/// Brackets of up to four participants are fixed: 1st to 4th are unique in
/// double elimination, while single elimination leaves two tied.
///
/// # Errors
///
/// Returns [`SeedingError::InvalidParticipantCount`] when `num_participants` is 0,
/// and [`SeedingError::EmptyBracket`] if an intermediate bracket comes out empty.
pub fn num_placing_last(num_participants: usize, format: BracketFormat) -> SeedingResult<usize> {
    let count = ParticipantCount::try_from(num_participants)?;
    let n = count.get();

    if n == 1 {
        return Ok(1);
    }
    if n <= SMALL_BRACKET_LIMIT {
        return Ok(match format {
            BracketFormat::Double => 1,
            BracketFormat::Single => 2,
        });
    }

    let first_round_losers = first_round_size_of(count) / 2;
    if first_round_losers == 0 {
        return Err(SeedingError::EmptyBracket {
            stage: "first round losers",
        });
    }

    if format == BracketFormat::Single {
        log::trace!("{n} in single elimination: {first_round_losers} place last");
        return Ok(first_round_losers);
    }

    let second_round_losers = (n - first_round_losers) / 2;
    let losers_field = ParticipantCount::try_from(first_round_losers + second_round_losers)
        .map_err(|_| SeedingError::EmptyBracket {
            stage: "losers bracket",
        })?;
    let placing_last = first_round_size_of(losers_field) / 2;
    if placing_last == 0 {
        return Err(SeedingError::EmptyBracket {
            stage: "first losers round",
        });
    }

    log::trace!(
        "{n} in double elimination: {first_round_losers} + {second_round_losers} \
         drop to losers, {placing_last} place last"
    );
    Ok(placing_last)
}

/// Number of participants knocked out in the first `cutoff` losers' rounds.
///
/// These are the participants eligible for an amateur bracket run after the
/// main event. Stops early once nobody is left.
///
/// # Errors
///
/// Returns [`SeedingError::InvalidParticipantCount`] when `num_participants` is 0.
pub fn amateur_count(
    num_participants: usize,
    cutoff: usize,
    format: BracketFormat,
) -> SeedingResult<usize> {
    ParticipantCount::try_from(num_participants)?;

    let mut remaining = num_participants;
    let mut amateurs = 0;
    for _ in 0..cutoff {
        if remaining == 0 {
            break;
        }
        let eliminated = num_placing_last(remaining, format)?;
        amateurs += eliminated;
        remaining -= eliminated;
    }

    Ok(amateurs)
}

/// Seeds projected to land in the amateur bracket, worst seed last.
///
/// Returns `None` when nobody is eliminated before the cutoff.
pub fn projected_amateurs(
    num_participants: usize,
    cutoff: usize,
    format: BracketFormat,
) -> SeedingResult<Option<RangeInclusive<usize>>> {
    let amateurs = amateur_count(num_participants, cutoff, format)?;
    if amateurs == 0 {
        return Ok(None);
    }
    Ok(Some(num_participants - amateurs + 1..=num_participants))
}
