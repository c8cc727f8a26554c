//! errors.rs - Custom error types for the dataguard-core library.
//!
//! Validation failures are never errors: they are reported as messages in a
//! [`ValidationResult`](crate::rule::ValidationResult). The variants below cover
//! the dynamic boundary only, where rule chains are assembled from text or YAML.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::config::RuleKind;

/// All error types produced by the `dataguard-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataguardError {
    #[error("Failed to compile pattern for rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Unknown rule '{0}'. Run `dataguard rules` to list the catalog.")]
    UnknownRule(String),

    #[error("Invalid argument for rule '{0}': {1}")]
    InvalidRuleArgument(String, String),

    #[error("Rule '{rule}' validates {found} values, but the chain already validates {expected} values")]
    KindMismatch {
        rule: String,
        expected: RuleKind,
        found: RuleKind,
    },

    #[error("No rules were selected")]
    EmptyRuleChain,

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}
