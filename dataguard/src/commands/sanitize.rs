// dataguard/src/commands/sanitize.rs
//! The `sanitize` command.
//!
//! Whole-input mode escapes the input as one string, so embedded newlines become `\n`
//! escapes. Line-buffered mode sanitizes each line on its own and flushes after every
//! line, which keeps `tail -f | dataguard sanitize --line-buffered` responsive.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use dataguard_core::{headless_sanitize_lines, sanitize_string};

use crate::cli::SanitizeCommand;
use crate::commands::{info_msg, read_input};

/// Runs the command, writing to `--output` or stdout.
pub fn run_sanitize(cmd: &SanitizeCommand) -> Result<()> {
    info!("Starting sanitize operation.");
    let mut writer: Box<dyn Write> = match &cmd.output {
        Some(path) => {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
            Box::new(create_output(path)?)
        }
        None => Box::new(io::stdout().lock()),
    };

    if cmd.line_buffered && cmd.value.is_none() && cmd.input_file.is_none() {
        let stdin = io::stdin();
        sanitize_stream(stdin.lock(), &mut writer)?;
    } else {
        let input = read_input(cmd.value.as_deref(), cmd.input_file.as_deref())?;
        let sanitized = if cmd.line_buffered {
            headless_sanitize_lines(&input)
        } else {
            sanitize_string(&input)
        };
        debug!(
            "Content sanitized. Original length: {}, Sanitized length: {}",
            input.len(),
            sanitized.len()
        );
        writeln!(writer, "{}", sanitized)?;
    }
    writer.flush().context("Failed to flush sanitized output")?;
    info!("Sanitize operation completed.");
    Ok(())
}

fn create_output(path: &Path) -> Result<fs::File> {
    fs::File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

/// Sanitizes `reader` line by line, flushing `writer` after each line.
pub fn sanitize_stream<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        writeln!(writer, "{}", sanitize_string(&line))?;
        writer.flush()?;
        count += 1;
    }
    debug!("Sanitized {} line(s) in line-buffered mode.", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sanitize_stream_keeps_line_breaks() {
        let mut out = Vec::new();
        let count = sanitize_stream(Cursor::new("it's\n<b>x</b>\r\n a/b \n"), &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "it\\'s\nbx&#x2F;b\na&#x2F;b\n");
    }

    #[test]
    fn test_sanitize_stream_empty_input() {
        let mut out = Vec::new();
        assert_eq!(sanitize_stream(Cursor::new(""), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
