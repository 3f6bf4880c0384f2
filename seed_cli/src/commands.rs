use crate::config::{CliConfig, ConfigError};
use crate::logging;
use anyhow::{Context, Result};
use bracket_seeds::{
    RankingTable, SeedShuffler,
    bracket::{BracketFormat, amateur_count, projected_amateurs},
    seeding::{Bucket, buckets, seed_tournament, sort_by_seeds},
};
use rand::{SeedableRng, rngs::StdRng};
use std::fs;

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Subcommand missing.
    #[error("Missing command. Use 'shuffle', 'buckets', 'rank' or 'amateurs'")]
    MissingCommand,
    /// Command needs a participant count or list.
    #[error("'{0}' needs a participant count or a comma-separated list of names")]
    MissingField(String),
    /// Participant count could not be read.
    #[error("Invalid participant count '{0}'. Must be a positive number")]
    InvalidCount(String),
    /// Unrecognized command.
    #[error("Unrecognized command '{0}'. Use --help to see available commands")]
    UnrecognizedCommand(String),
}

/// Participants given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Just a participant count
    Count(usize),
    /// Names, 1st seed first
    Names(Vec<String>),
}

impl Field {
    /// Parse `"9"` or `"Neal, Bryan, Paragon"`.
    ///
    /// Leading and trailing spaces around names are stripped.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed
            .strip_prefix('-')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(ParseError::InvalidCount(trimmed.to_string()));
        }
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse() {
                Ok(0) | Err(_) => Err(ParseError::InvalidCount(trimmed.to_string())),
                Ok(n) => Ok(Field::Count(n)),
            };
        }

        let names: Vec<String> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        if names.is_empty() {
            return Err(ParseError::InvalidCount(trimmed.to_string()));
        }
        Ok(Field::Names(names))
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        match self {
            Field::Count(n) => *n,
            Field::Names(names) => names.len(),
        }
    }

    /// A parsed field always has participants
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shuffle seeds within buckets
    Shuffle(Field),
    /// Show the buckets for a field size
    Buckets(usize),
    /// Seed names from a ranking table, optionally shuffling afterwards
    Rank { names: Vec<String>, shuffle: bool },
    /// Size the amateur bracket for a field
    Amateurs(usize),
}

impl Command {
    /// Parse a command from its name and positional argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_cli::commands::{Command, Field};
    ///
    /// assert_eq!(Command::parse(Some("buckets"), Some("9"), false), Ok(Command::Buckets(9)));
    /// assert!(matches!(
    ///     Command::parse(Some("shuffle"), Some("Neal, Bryan"), false),
    ///     Ok(Command::Shuffle(Field::Names(_)))
    /// ));
    /// ```
    pub fn parse(
        name: Option<&str>,
        target: Option<&str>,
        shuffle: bool,
    ) -> Result<Command, ParseError> {
        let name = name.ok_or(ParseError::MissingCommand)?;
        let field = || {
            target
                .ok_or_else(|| ParseError::MissingField(name.to_string()))
                .and_then(Field::parse)
        };
        // Bracket sizing only takes a plain count
        let count = || -> Result<usize, ParseError> {
            match field()? {
                Field::Count(n) => Ok(n),
                Field::Names(_) => Err(ParseError::InvalidCount(
                    target.unwrap_or_default().trim().to_string(),
                )),
            }
        };

        match name {
            "shuffle" => Ok(Command::Shuffle(field()?)),
            "buckets" => Ok(Command::Buckets(count()?)),
            "amateurs" => Ok(Command::Amateurs(count()?)),
            "rank" => match field()? {
                Field::Names(names) => Ok(Command::Rank { names, shuffle }),
                Field::Count(n) => Err(ParseError::InvalidCount(n.to_string())),
            },
            other => Err(ParseError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// Random source for a run, fixed if a seed was configured
pub fn rng_for(config: &CliConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Run a command and render its output.
pub fn execute(command: &Command, config: &CliConfig) -> Result<String> {
    let format = config.seeding.format;
    match command {
        Command::Shuffle(field) => shuffle(field, format, rng_for(config)),
        Command::Buckets(n) => describe_buckets(*n, format),
        Command::Rank { names, shuffle } => rank(names, *shuffle, config),
        Command::Amateurs(n) => describe_amateurs(*n, config.seeding.amateur_cutoff, format),
    }
}

fn shuffle(field: &Field, format: BracketFormat, rng: StdRng) -> Result<String> {
    let mut shuffler = SeedShuffler::with_rng(rng);
    match field {
        Field::Count(n) => {
            let seeds = shuffler.shuffled_seeds(*n, format)?;
            Ok(format!("{seeds:?}"))
        }
        Field::Names(names) => {
            let seeds = shuffler.shuffled_seeds(names.len(), format)?;
            logging::log_seed_changes(names, &seeds);
            let shuffled = sort_by_seeds(names.clone(), &seeds)?;
            Ok(shuffled.join(", "))
        }
    }
}

fn seed_range(bucket: &Bucket) -> String {
    if bucket.len() == 1 {
        bucket.top().to_string()
    } else {
        format!("{}-{}", bucket.top(), bucket.bottom())
    }
}

fn describe_buckets(n: usize, format: BracketFormat) -> Result<String> {
    let sequence = buckets(n, format)?;
    let lines: Vec<String> = sequence
        .iter()
        .rev()
        .map(|bucket| format!("{} ({})", seed_range(bucket), bucket.len()))
        .collect();
    Ok(format!(
        "{} participants, {}:\n{}",
        n,
        format,
        lines.join("\n")
    ))
}

fn describe_amateurs(n: usize, cutoff: usize, format: BracketFormat) -> Result<String> {
    let amateurs = amateur_count(n, cutoff, format)?;
    let stage = if format.has_losers_bracket() {
        format!("before losers' round {}", cutoff + 1)
    } else if cutoff == 1 {
        "in the first round".to_string()
    } else {
        format!("in the first {cutoff} rounds")
    };
    let summary = format!("{amateurs} of {n} participants eliminated {stage}");
    Ok(match projected_amateurs(n, cutoff, format)? {
        Some(seeds) => format!("{summary}: seeds {}-{}", seeds.start(), seeds.end()),
        None => summary,
    })
}

fn rank(names: &[String], shuffle: bool, config: &CliConfig) -> Result<String> {
    let path = config
        .rankings_file
        .as_ref()
        .ok_or_else(|| ConfigError::MissingRequired {
            var: "SEED_RANKINGS_FILE".to_string(),
            hint: "Pass --rankings FILE with a ranking table JSON".to_string(),
        })?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rankings from {}", path.display()))?;
    let table = RankingTable::from_json(&json)?;
    log::info!("Loaded {} rankings from {}", table.len(), path.display());

    let mut rng = rng_for(config);
    let seeded = seed_tournament(
        names,
        &table,
        &config.seeding,
        shuffle.then_some(&mut rng),
    )?;

    Ok(seeded
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n"))
}
