//! Converting external rankings into dense seeds.

use super::buckets::Seed;
use crate::errors::{SeedingError, SeedingResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Rank from an external ranking source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Rank {
    /// Ranked, 1 being the best
    Known(u32),
    /// Not present in the ranking source
    Unknown,
}

impl Rank {
    /// Whether the participant appears in the ranking source
    pub fn is_known(self) -> bool {
        matches!(self, Rank::Known(_))
    }

    /// Numeric rank if known
    pub fn value(self) -> Option<u32> {
        match self {
            Rank::Known(rank) => Some(rank),
            Rank::Unknown => None,
        }
    }
}

impl From<Option<u32>> for Rank {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Rank::Unknown, Rank::Known)
    }
}

impl From<Rank> for Option<u32> {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Known(rank) => write!(f, "{rank}"),
            Rank::Unknown => write!(f, "unranked"),
        }
    }
}

/// What to do when two participants share a known rank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Fail with [`SeedingError::AmbiguousRank`]
    #[default]
    Reject,
    /// Earlier entries get the better seed
    InputOrder,
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::Reject => write!(f, "reject"),
            TiePolicy::InputOrder => write!(f, "input_order"),
        }
    }
}

impl FromStr for TiePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reject" => Ok(TiePolicy::Reject),
            "input_order" | "order" => Ok(TiePolicy::InputOrder),
            _ => Err(format!("Unknown tie policy: {s}")),
        }
    }
}

/// Squash ranks into seeds `1..=N`, rejecting tied ranks.
///
/// e.g. `[4, 6, Unknown, 2, Unknown]` => `[2, 3, 4, 1, 5]`
///
/// See [`ranks_to_seeds_with`].
pub fn ranks_to_seeds(ranks: &[Rank]) -> SeedingResult<Vec<Seed>> {
    ranks_to_seeds_with(ranks, TiePolicy::Reject)
}

/// Squash ranks into seeds `1..=N`.
///
/// Known ranks keep their relative order and take the first seeds. Unknown
/// ranks are seeded last in order of appearance. Seeds are returned in the
/// same order as `ranks`.
///
/// # Errors
///
/// Returns [`SeedingError::InvalidRank`] for a known rank of 0, and
/// [`SeedingError::AmbiguousRank`] for tied ranks under [`TiePolicy::Reject`].
pub fn ranks_to_seeds_with(ranks: &[Rank], policy: TiePolicy) -> SeedingResult<Vec<Seed>> {
    let mut known: Vec<(u32, usize)> = ranks
        .iter()
        .enumerate()
        .filter_map(|(index, rank)| rank.value().map(|value| (value, index)))
        .collect();

    if known.iter().any(|&(rank, _)| rank == 0) {
        return Err(SeedingError::InvalidRank(0));
    }

    // (rank, index) pairs: ties fall back to order of appearance
    known.sort_unstable();

    for pair in known.windows(2) {
        let (rank, first) = pair[0];
        let (next_rank, second) = pair[1];
        if rank != next_rank {
            continue;
        }
        match policy {
            TiePolicy::Reject => {
                return Err(SeedingError::AmbiguousRank {
                    rank,
                    first,
                    second,
                });
            }
            TiePolicy::InputOrder => {
                log::warn!("Rank {rank} shared by entries {first} and {second}, keeping input order");
            }
        }
    }

    let mut seeds = vec![0; ranks.len()];
    for (position, &(_, index)) in known.iter().enumerate() {
        seeds[index] = position + 1;
    }

    let mut next_last_place_seed = known.len() + 1;
    for (index, rank) in ranks.iter().enumerate() {
        if !rank.is_known() {
            seeds[index] = next_last_place_seed;
            next_last_place_seed += 1;
        }
    }

    let unranked = ranks.len() - known.len();
    if unranked > 0 {
        log::debug!("{unranked} of {} entries unranked, seeded last", ranks.len());
    }

    Ok(seeds)
}

/// Single row of a ranking table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player tag as listed by the ranking source
    pub name: String,
    /// Rank, 1 being the best
    pub rank: u32,
}

#[derive(Deserialize)]
struct RankingPayload {
    ranking: Vec<RankingEntry>,
}

/// Ranking table from an external source, in source order
#[derive(Debug, Clone, Default)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
    /// Lowercased name -> first position in `entries`
    index: HashMap<String, usize>,
}

impl RankingTable {
    /// Build a table from entries
    pub fn new(entries: Vec<RankingEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index
                .entry(entry.name.trim().to_lowercase())
                .or_insert(position);
        }
        Self { entries, index }
    }

    /// Parse a `{"ranking": [{"name": .., "rank": ..}, ..]}` payload
    ///
    /// Extra fields on the payload and on each entry are ignored.
    pub fn from_json(json: &str) -> SeedingResult<Self> {
        let payload: RankingPayload = serde_json::from_str(json)?;
        Ok(Self::new(payload.ranking))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// First entry, in table order, matching any alias of `name`
    pub fn lookup(&self, name: &str) -> Option<&RankingEntry> {
        aliases(name)
            .iter()
            .filter_map(|alias| self.index.get(alias))
            .min()
            .map(|&position| &self.entries[position])
    }

    /// Rank for a participant name, or [`Rank::Unknown`]
    pub fn rank_of(&self, name: &str) -> Rank {
        self.lookup(name)
            .map_or(Rank::Unknown, |entry| Rank::Known(entry.rank))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for RankingTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, rank)| RankingEntry {
                    name: name.into(),
                    rank,
                })
                .collect(),
        )
    }
}

/// Resolve a participant name against a ranking table.
///
/// Matching ignores case. Names carrying several tags, written as
/// `"Tag / OtherTag"` or `"Tag (OtherTag)"`, match if any tag does.
pub fn resolve_rank(name: &str, table: &RankingTable) -> Rank {
    table.rank_of(name)
}

/// Lowercased names a participant may be listed under, full name first
pub fn aliases(name: &str) -> Vec<String> {
    let name = name.trim().to_lowercase();
    let mut aliases = vec![name.clone()];

    let mut push = |alias: &str| {
        let alias = alias.trim();
        if !alias.is_empty() && !aliases.iter().any(|a| a == alias) {
            aliases.push(alias.to_string());
        }
    };

    if name.contains(" / ") {
        name.split(" / ").for_each(&mut push);
    } else if let Some((tag, rest)) = name.rsplit_once('(') {
        if let Some(other) = rest.trim_end().strip_suffix(')') {
            push(tag);
            push(other);
        }
    }

    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    use Rank::{Known, Unknown};

    #[test]
    fn test_ranks_to_seeds() {
        let seeds = ranks_to_seeds(&[Unknown, Known(5), Known(3), Unknown, Known(1)]).unwrap();
        assert_eq!(seeds, vec![4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_ranks_to_seeds_squashes_gaps() {
        let seeds = ranks_to_seeds(&[Known(4), Known(6), Unknown, Known(2), Unknown]).unwrap();
        assert_eq!(seeds, vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn test_ranks_to_seeds_all_unknown() {
        let seeds = ranks_to_seeds(&[Unknown, Unknown, Unknown]).unwrap();
        assert_eq!(seeds, vec![1, 2, 3]);
    }

    #[test]
    fn test_ranks_to_seeds_empty() {
        assert!(ranks_to_seeds(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_ranks_to_seeds_rejects_ties() {
        let err = ranks_to_seeds(&[Known(2), Unknown, Known(7), Known(2)]).unwrap_err();
        assert!(matches!(
            err,
            SeedingError::AmbiguousRank {
                rank: 2,
                first: 0,
                second: 3
            }
        ));
    }

    #[test]
    fn test_ranks_to_seeds_input_order_ties() {
        let seeds =
            ranks_to_seeds_with(&[Known(2), Unknown, Known(7), Known(2)], TiePolicy::InputOrder)
                .unwrap();
        assert_eq!(seeds, vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_ranks_to_seeds_rejects_rank_zero() {
        assert!(matches!(
            ranks_to_seeds(&[Known(0), Known(1)]),
            Err(SeedingError::InvalidRank(0))
        ));
    }

    #[test]
    fn test_rank_serde_as_option() {
        assert_eq!(serde_json::to_string(&Known(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Unknown).unwrap(), "null");
        let rank: Rank = serde_json::from_str("null").unwrap();
        assert_eq!(rank, Unknown);
    }

    #[test]
    fn test_tie_policy_from_str() {
        assert_eq!("reject".parse::<TiePolicy>().unwrap(), TiePolicy::Reject);
        assert_eq!(
            "Input-Order".parse::<TiePolicy>().unwrap(),
            TiePolicy::InputOrder
        );
        assert!("coin flip".parse::<TiePolicy>().is_err());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(aliases("Bryan"), vec!["bryan"]);
        assert_eq!(
            aliases("Bryan (Other_Tag)"),
            vec!["bryan (other_tag)", "bryan", "other_tag"]
        );
        assert_eq!(aliases("gaR / Gar2"), vec!["gar / gar2", "gar", "gar2"]);
        // A slash inside a single tag is part of the tag
        assert_eq!(aliases("AC/DC"), vec!["ac/dc"]);
        // Unbalanced parenthesis: full name only
        assert_eq!(aliases("foo (bar"), vec!["foo (bar"]);
    }

    #[test]
    fn test_resolve_rank() {
        let table: RankingTable = [("bryan", 4), ("gar", 1)].into_iter().collect();

        assert_eq!(resolve_rank("bryan (other_tag)", &table), Known(4));
        assert_eq!(resolve_rank("BRYAN", &table), Known(4));
        assert_eq!(resolve_rank("someone / GaR", &table), Known(1));
        assert_eq!(resolve_rank("nobody", &table), Unknown);
    }

    #[test]
    fn test_resolve_rank_slash_inside_tag() {
        let table: RankingTable = [("dc", 3), ("ac", 5)].into_iter().collect();
        assert_eq!(resolve_rank("AC/DC", &table), Unknown);
        assert_eq!(resolve_rank("AC / DC", &table), Known(3));
    }

    #[test]
    fn test_lookup_prefers_table_order() {
        let table: RankingTable = [("alpha", 1), ("beta", 2)].into_iter().collect();
        // Both tags are ranked: the one listed first in the table wins
        assert_eq!(resolve_rank("beta / alpha", &table), Known(1));
    }

    #[test]
    fn test_ranking_table_from_json() {
        let json = r#"{
            "ranking": [
                {"name": "NMW", "rank": 1, "rating": 31.2, "player_id": "a1"},
                {"name": "Umarth", "rank": 2, "rating": 29.9, "player_id": "b2"}
            ],
            "region": "norcal"
        }"#;
        let table = RankingTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rank_of("umarth"), Known(2));
        assert_eq!(table.entries()[0].name, "NMW");
    }

    #[test]
    fn test_ranking_table_from_bad_json() {
        assert!(matches!(
            RankingTable::from_json("{\"players\": []}"),
            Err(SeedingError::RankingTable(_))
        ));
    }
}
