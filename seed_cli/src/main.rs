//! Bracket seeding tool.
//!
//! Shuffles seeds within their elimination buckets, prints bucket layouts
//! and seeds registered names from an external ranking table.

use std::path::PathBuf;

use anyhow::{Error, bail};
use log::info;
use pico_args::Arguments;
use seed_cli::{
    commands::{self, Command},
    config::{CliConfig, ConfigOverrides},
    logging,
};

const HELP: &str = "\
Seed elimination brackets without breaking placements

USAGE:
  seed_cli <COMMAND> <FIELD> [OPTIONS]

COMMANDS:
  shuffle   N | NAMES      Shuffle seeds within buckets
  buckets   N              Show the seed buckets for N participants
  rank      NAMES          Seed comma-separated names from a ranking table
  amateurs  N              Count participants eliminated early

OPTIONS:
  --format      FORMAT     single or double elimination  [default: env SEED_FORMAT or double]
  --tie-policy  POLICY     reject or input_order         [default: env SEED_TIE_POLICY or reject]
  --rng-seed    N          Fixed random seed              [default: env SEED_RNG_SEED]
  --rankings    FILE       Ranking table JSON             [default: env SEED_RANKINGS_FILE]
  --cutoff      N          Rounds counted for amateurs    [default: env SEED_AMATEUR_CUTOFF or 2]

FLAGS:
  --shuffle                Shuffle within buckets after ranking
  -v, --verbose            Debug logging
  -h, --help               Print help information

ENVIRONMENT:
  SEED_FORMAT              Bracket format
  SEED_TIE_POLICY          How equal ranks are ordered
  SEED_RNG_SEED            Random seed for reproducible shuffles
  SEED_RANKINGS_FILE       Ranking table JSON file
  SEED_AMATEUR_CUTOFF      Rounds counted for amateurs
  RUST_LOG                 Log filter (overrides --verbose)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();
    let name = pargs.subcommand()?;

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let verbose = pargs.contains(["-v", "--verbose"]);
    let shuffle = pargs.contains("--shuffle");
    let overrides = ConfigOverrides {
        format: pargs.opt_value_from_str("--format")?,
        tie_policy: pargs.opt_value_from_str("--tie-policy")?,
        rng_seed: pargs.opt_value_from_str("--rng-seed")?,
        rankings_file: pargs.opt_value_from_str::<_, PathBuf>("--rankings")?,
        amateur_cutoff: pargs.opt_value_from_str("--cutoff")?,
    };
    let target: Option<String> = pargs.opt_free_from_str()?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }

    logging::init(verbose);

    let config = CliConfig::from_env(overrides)?;
    config.validate()?;

    let command = Command::parse(name.as_deref(), target.as_deref(), shuffle)?;
    info!("Running {command:?} with {} seeding", config.seeding.format);

    println!("{}", commands::execute(&command, &config)?);
    Ok(())
}
