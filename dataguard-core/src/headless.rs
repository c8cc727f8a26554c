// File: dataguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core in headless mode (non-UI).
//!
//! Raw text input arrives as a string; number chains need it parsed first. These
//! helpers do that parsing and keep user input out of debug logs unless
//! `DATAGUARD_ALLOW_DEBUG_PII=true` is set.

use log::debug;
use once_cell::sync::Lazy;

use crate::compiler::{compile_rules, CompiledRules};
use crate::config::RuleSpec;
use crate::errors::DataguardError;
use crate::evaluator::evaluate;
use crate::rule::ValidationResult;
use crate::sanitizer::sanitize_string;

/// Whether raw user input may appear in debug logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("DATAGUARD_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Replaces user input with a length placeholder.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn loggable(input: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        input.to_string()
    } else {
        redact_sensitive(input)
    }
}

/// Parses raw input for a number chain.
///
/// Surrounding whitespace is ignored. `NaN`, `inf` and `-inf` are accepted so that
/// rules such as `currency` can reject them explicitly.
pub fn parse_number(input: &str) -> Result<f64, DataguardError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| DataguardError::InvalidNumber(input.to_string()))
}

/// Evaluates raw input against a compiled chain.
///
/// Text chains see the input unchanged. Number chains see it parsed with
/// [`parse_number`]; unparsable input is an error, not a validation failure.
pub fn headless_validate(input: &str, rules: &CompiledRules) -> Result<ValidationResult, DataguardError> {
    debug!(
        "Validating input {} against {} {} rules.",
        loggable(input),
        rules.len(),
        rules.kind()
    );
    let result = match rules {
        CompiledRules::Text(chain) => evaluate(input, chain),
        CompiledRules::Number(chain) => evaluate(&parse_number(input)?, chain),
    };
    debug!("Validation finished with {} error(s).", result.errors().len());
    Ok(result)
}

/// Compiles `specs` and evaluates `input` against them in one call.
pub fn headless_validate_specs(input: &str, specs: &[RuleSpec]) -> Result<ValidationResult, DataguardError> {
    let rules = compile_rules(specs)?;
    headless_validate(input, &rules)
}

/// Sanitizes each line of `input` separately and joins the results with `\n`.
///
/// Whole-input sanitization escapes newlines, so a multi-line input collapses into a
/// single line. This keeps one output line per input line instead.
pub fn headless_sanitize_lines(input: &str) -> String {
    input
        .lines()
        .map(sanitize_string)
        .collect::<Vec<_>>()
        .join("\n")
}
