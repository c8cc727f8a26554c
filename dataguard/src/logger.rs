// dataguard/src/logger.rs
//! Logger setup for the `dataguard` CLI.
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` is honoured unless an explicit
//! level override is passed in.

use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls are no-ops.
///
/// With `Some(level)` every module logs at `level`. With `None` the filter comes from
/// `RUST_LOG`, defaulting to `warn`.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false).try_init().ok();
}

/// Picks the level override implied by the global CLI flags.
///
/// `--quiet` wins over `--debug`, and `--disable-debug` caps `RUST_LOG` at `info`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug && !disable_debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    }
}
