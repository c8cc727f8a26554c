// dataguard/src/ui/output_format.rs
//! Formatting of messages, validation results and the rule catalog for the console.
//!
//! Every function takes the writer and a `supports_color` flag, so the same code
//! serves terminals, pipes and tests. Colors are applied with `owo-colors` only when
//! the flag is set.

use std::io::{self, Write};

use dataguard_core::ValidationResult;
use dataguard_core::rules::CatalogEntry;
use owo_colors::OwoColorize;

fn paint(text: &str, supports_color: bool, style: fn(&str) -> String) -> String {
    if supports_color { style(text) } else { text.to_string() }
}

fn green(text: &str) -> String {
    text.green().to_string()
}

fn red(text: &str) -> String {
    text.red().to_string()
}

fn cyan(text: &str) -> String {
    text.cyan().to_string()
}

fn bold(text: &str) -> String {
    text.bold().to_string()
}

/// Prints an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(msg, supports_color, cyan))
}

/// Prints an error message prefixed with `Error:`.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{} {}", paint("Error:", supports_color, red), msg)
}

/// Prints a section header.
pub fn print_header<W: Write>(writer: &mut W, title: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(title, supports_color, bold))
}

/// Prints one passing (`✓`) or failing (`✗`) line, indented under its section.
pub fn print_outcome_line<W: Write>(writer: &mut W, label: &str, passed: bool, supports_color: bool) -> io::Result<()> {
    if passed {
        writeln!(writer, "  ✓ {}", paint(label, supports_color, green))
    } else {
        writeln!(writer, "  ✗ {}", paint(label, supports_color, red))
    }
}

/// Prints a validation verdict followed by one line per failure message.
pub fn print_validation_result<W: Write>(
    writer: &mut W,
    result: &ValidationResult,
    supports_color: bool,
) -> io::Result<()> {
    if result.is_valid() {
        writeln!(writer, "{}", paint("Valid", supports_color, green))?;
    } else {
        writeln!(
            writer,
            "{} ({} error{})",
            paint("Invalid", supports_color, red),
            result.errors().len(),
            if result.errors().len() == 1 { "" } else { "s" }
        )?;
        for error in result.errors() {
            writeln!(writer, "  - {}", error)?;
        }
    }
    Ok(())
}

/// Prints the rule catalog as an aligned table.
pub fn print_catalog<W: Write>(writer: &mut W, entries: &[CatalogEntry], supports_color: bool) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|e| e.name.len() + e.arguments.map_or(0, str::len))
        .max()
        .unwrap_or(0);
    print_header(writer, "Available rules:", supports_color)?;
    for entry in entries {
        let spec = format!("{}{}", entry.name, entry.arguments.unwrap_or(""));
        writeln!(
            writer,
            "  {:<width$}  {:<6}  {}",
            spec,
            entry.kind.to_string(),
            entry.summary,
            width = width
        )?;
    }
    Ok(())
}
