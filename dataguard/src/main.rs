// dataguard/src/main.rs
//! DataGuard entry point.
//!
//! Exit codes: `0` on success or a valid value, `1` when a value is invalid or a
//! self-test case fails, `2` when the command could not run.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dataguard::cli::{Cli, Commands};
use dataguard::commands::{self, rules, sanitize, self_test, validate};
use dataguard::logger;

fn run(command: &Commands) -> Result<ExitCode> {
    let code = match command {
        Commands::Validate(cmd) => {
            let result = validate::run_validate(cmd)?;
            if result.is_valid() { ExitCode::SUCCESS } else { ExitCode::from(1) }
        }
        Commands::Sanitize(cmd) => {
            sanitize::run_sanitize(cmd)?;
            ExitCode::SUCCESS
        }
        Commands::Rules { json } => {
            rules::run_rules(*json)?;
            ExitCode::SUCCESS
        }
        Commands::SelfTest => {
            if self_test::run_self_test()? { ExitCode::SUCCESS } else { ExitCode::from(1) }
        }
    };
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));

    match run(&cli.command) {
        Ok(code) => code,
        Err(e) => {
            commands::error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}
