// dataguard/src/commands/mod.rs
//! Implementations of the `dataguard` subcommands.
//!
//! License: MIT OR Apache-2.0

pub mod rules;
pub mod sanitize;
pub mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads the command input from the positional value, a file, or stdin, in that order.
///
/// One trailing line ending is dropped from file and stdin input, so
/// `echo value | dataguard ...` sees `value`.
pub fn read_input(value: Option<&str>, input_file: Option<&Path>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    let mut text = match input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    strip_line_ending(&mut text);
    Ok(text)
}

fn strip_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
