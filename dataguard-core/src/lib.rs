// dataguard-core/src/lib.rs
//! # DataGuard Core Library
//!
//! `dataguard-core` provides the platform-independent logic for validating and
//! sanitizing user input. It defines a catalog of reusable validation rules, a
//! generic evaluator that applies an ordered rule chain to one value, and a
//! sanitizer that escapes strings for safe embedding.
//!
//! The library is pure and stateless: no I/O happens outside of explicit profile
//! loading, and every rule, the evaluator and the sanitizer can be called from any
//! thread without coordination.
//!
//! ## Modules
//!
//! * `rule`: Defines `ValidationRule`, `RuleMessage` and `ValidationResult`.
//! * `rules`: The rule catalog (`rules::string`, `rules::number`).
//! * `evaluator`: Applies a rule chain to a value and collects failures.
//! * `sanitizer`: The ordered escaping pipeline behind `sanitize_string`.
//! * `config`: Textual and YAML rule specs (`RuleSpec`, `RuleProfile`).
//! * `compiler`: Turns rule specs into single-kind rule chains.
//! * `headless`: Convenience wrappers for non-interactive use.
//! * `errors`: The `DataguardError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use dataguard_core::{evaluate, sanitize_string, rules::{number, string}};
//!
//! let result = evaluate("test@example.com", &[string::email(), string::max_length(64)]);
//! assert!(result.is_valid());
//!
//! let result = evaluate(&10.999, &[number::positive(), number::currency()]);
//! assert_eq!(result.errors(), ["Invalid currency format (maximum 2 decimal places)"]);
//!
//! assert_eq!(sanitize_string("O'Brien & <Sons>"), "O\\'Brien &amp; Sons");
//! ```
//!
//! ## Error Handling
//!
//! A rule rejecting a value is not an error: it shows up in
//! [`ValidationResult::errors`]. `DataguardError` only covers building rule chains
//! from text or YAML (unknown rules, bad arguments, invalid patterns, mixed kinds)
//! and parsing numeric input.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod headless;
pub mod rule;
pub mod rules;
pub mod sanitizer;

/// Re-exports the rule descriptor and result types.
pub use rule::{RuleMessage, ValidationResult, ValidationRule};

/// Re-exports the evaluator and the sanitizer entry points.
pub use evaluator::evaluate;
pub use sanitizer::sanitize_string;

/// Re-exports the rule spec types used to assemble chains at runtime.
pub use config::{RuleKind, RuleProfile, RuleSpec, MAX_PATTERN_LENGTH};
pub use compiler::{compile_rules, CompiledRules};

/// Re-exports the custom error type for clear error reporting.
pub use errors::DataguardError;

/// Re-exports helpers for one-shot, non-interactive use.
pub use headless::{headless_sanitize_lines, headless_validate, headless_validate_specs};
