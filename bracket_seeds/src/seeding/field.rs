//! Ranked fields of participants.

use super::buckets::Seed;
use super::order::sort_by_seeds;
use super::ranks::{Rank, RankingTable, TiePolicy, ranks_to_seeds_with};
use super::shuffle::shuffled_seeds;
use crate::config::SeedingConfig;
use crate::errors::SeedingResult;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Participant as seen by the seeding code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, possibly carrying several tags
    pub name: String,
    /// Rank from the ranking source
    pub rank: Rank,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            rank,
        }
    }
}

/// Participants in order of appearance, each with an external rank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedField {
    participants: Vec<Participant>,
}

impl RankedField {
    /// Create a field from participants in order of appearance
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Rank each name against a ranking table
    pub fn from_names<S: AsRef<str>>(names: &[S], table: &RankingTable) -> Self {
        let participants = names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                Participant::new(name, table.rank_of(name))
            })
            .collect();
        Self { participants }
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in order of appearance
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Ranks in order of appearance
    pub fn ranks(&self) -> Vec<Rank> {
        self.participants.iter().map(|p| p.rank).collect()
    }

    /// Dense seeds in order of appearance
    pub fn seeds(&self, policy: TiePolicy) -> SeedingResult<Vec<Seed>> {
        ranks_to_seeds_with(&self.ranks(), policy)
    }

    /// Unranked participants with the seed they were given
    pub fn unranked(&self, policy: TiePolicy) -> SeedingResult<Vec<(&str, Seed)>> {
        let seeds = self.seeds(policy)?;
        Ok(self
            .participants
            .iter()
            .zip(seeds)
            .filter(|(participant, _)| !participant.rank.is_known())
            .map(|(participant, seed)| (participant.name.as_str(), seed))
            .collect())
    }

    /// Participant names sorted by their new seed, top seed first
    pub fn seed_order(&self, policy: TiePolicy) -> SeedingResult<Vec<String>> {
        let seeds = self.seeds(policy)?;
        let names = self.participants.iter().map(|p| p.name.clone()).collect();
        sort_by_seeds(names, &seeds)
    }
}

/// Seed a tournament from a ranking table.
///
/// Names are ordered by rank, unranked names last in order of appearance.
/// When a random source is supplied the result is then shuffled without
/// changing anyone's projected placement.
///
/// # Arguments
///
/// * `names` - Participant names in registration order
/// * `table` - Ranking table to seed from
/// * `config` - Bracket format and tie policy
/// * `rng` - Random source for the optional shuffle
///
/// # Returns
///
/// * `SeedingResult<Vec<String>>` - Names in seed order, top seed first
pub fn seed_tournament<S, R>(
    names: &[S],
    table: &RankingTable,
    config: &SeedingConfig,
    rng: Option<&mut R>,
) -> SeedingResult<Vec<String>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let field = RankedField::from_names(names, table);
    for (name, seed) in field.unranked(config.tie_policy)? {
        log::warn!("Could not find ranking for {name}, seeding {seed}");
    }

    let ordered = field.seed_order(config.tie_policy)?;
    match rng {
        Some(rng) if !ordered.is_empty() => {
            let seeds = shuffled_seeds(ordered.len(), config.format, rng)?;
            sort_by_seeds(ordered, &seeds)
        }
        _ => Ok(ordered),
    }
}
