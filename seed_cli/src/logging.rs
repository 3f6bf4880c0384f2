//! Logging setup.

use env_logger::Env;

/// Initialize logging to stderr
///
/// Levels come from `RUST_LOG` when set, otherwise `info` (or `debug` with
/// `verbose`). Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .try_init();
}

/// Log every participant whose seed changed
pub fn log_seed_changes(names: &[String], seeds: &[usize]) {
    for (index, (name, &seed)) in names.iter().zip(seeds).enumerate() {
        if index + 1 != seed {
            log::debug!("{name}: seed {} -> {seed}", index + 1);
        }
    }
}
