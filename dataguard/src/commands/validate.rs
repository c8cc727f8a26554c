// dataguard/src/commands/validate.rs
//! The `validate` command: builds a rule chain and evaluates one value against it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use dataguard_core::{compile_rules, headless_validate, RuleProfile, RuleSpec, ValidationResult};

use crate::cli::ValidateCommand;
use crate::commands::read_input;
use crate::ui::output_format;

/// Collects the chain: profile rules first, then each `--rule` spec in order.
pub fn collect_specs(cmd: &ValidateCommand) -> Result<Vec<RuleSpec>> {
    let mut specs = match &cmd.profile {
        Some(path) => RuleProfile::load_from_file(path)?.rules,
        None => Vec::new(),
    };
    for raw in &cmd.rules {
        let spec = raw
            .parse::<RuleSpec>()
            .with_context(|| format!("Invalid --rule '{}'", raw))?;
        specs.push(spec);
    }
    debug!("Collected {} rule spec(s).", specs.len());
    Ok(specs)
}

/// Evaluates the input and prints the result.
///
/// Returns the validation result; an `Err` means the chain or the input could not be
/// used at all.
pub fn run_validate(cmd: &ValidateCommand) -> Result<ValidationResult> {
    info!("Starting validate operation.");
    let specs = collect_specs(cmd)?;
    let rules = compile_rules(&specs)?;
    let input = read_input(cmd.value.as_deref(), cmd.input_file.as_deref())?;
    let result = headless_validate(&input, &rules)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        let json = serde_json::to_string(&result).context("Failed to serialize validation result")?;
        writeln!(writer, "{}", json)?;
    } else {
        output_format::print_validation_result(&mut writer, &result, supports_color)?;
    }
    info!("Validate operation completed.");
    Ok(result)
}
