// dataguard/src/commands/rules.rs
//! The `rules` command: lists the catalog.

use std::io::{self, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use dataguard_core::rules::catalog;

use crate::ui::output_format;

pub fn run_rules(json: bool) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if json {
        let text = serde_json::to_string_pretty(catalog()).context("Failed to serialize rule catalog")?;
        writeln!(writer, "{}", text)?;
    } else {
        output_format::print_catalog(&mut writer, catalog(), supports_color)?;
    }
    Ok(())
}
