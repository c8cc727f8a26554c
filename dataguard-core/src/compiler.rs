//! compiler.rs - Turns rule specs into catalog rules.
//!
//! A chain validates a single kind of value, so [`compile_rules`] produces either a
//! string chain or a number chain and rejects specs that mix the two. User-supplied
//! regex patterns are length-checked and compiled with a size limit before they are
//! wrapped in a catalog `regex` rule.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{RuleKind, RuleSpec, MAX_PATTERN_LENGTH};
use crate::errors::DataguardError;
use crate::rule::ValidationRule;
use crate::rules::{number, string};

/// Upper bound on the compiled size of a user-supplied regex.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled rule chain, ready for evaluation.
#[derive(Debug, Clone)]
pub enum CompiledRules {
    Text(Vec<ValidationRule<str>>),
    Number(Vec<ValidationRule<f64>>),
}

impl CompiledRules {
    pub fn kind(&self) -> RuleKind {
        match self {
            CompiledRules::Text(_) => RuleKind::String,
            CompiledRules::Number(_) => RuleKind::Number,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CompiledRules::Text(rules) => rules.len(),
            CompiledRules::Number(rules) => rules.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compiles a user-supplied pattern for the rule named `rule_name`.
pub fn compile_pattern(rule_name: &str, pattern: &str) -> Result<Regex, DataguardError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(DataguardError::PatternLengthExceeded(
            rule_name.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| DataguardError::RuleCompilationError(rule_name.to_string(), e))
}

fn compile_text_rule(spec: &RuleSpec) -> Result<ValidationRule<str>, DataguardError> {
    let rule = match spec {
        RuleSpec::Email => string::email(),
        RuleSpec::Phone => string::phone(),
        RuleSpec::NoHtml => string::no_html(),
        RuleSpec::NoSql => string::no_sql(),
        RuleSpec::MinLength { min } => string::min_length(*min),
        RuleSpec::MaxLength { max } => string::max_length(*max),
        RuleSpec::Regex { pattern, message } => {
            let regex = compile_pattern(spec.name(), pattern)?;
            let message = message
                .clone()
                .unwrap_or_else(|| format!("Value does not match pattern '{}'", pattern));
            string::regex(regex, message)
        }
        other => {
            return Err(DataguardError::KindMismatch {
                rule: other.name().to_string(),
                expected: RuleKind::String,
                found: other.kind(),
            })
        }
    };
    Ok(rule)
}

fn compile_number_rule(spec: &RuleSpec) -> Result<ValidationRule<f64>, DataguardError> {
    let rule = match spec {
        RuleSpec::Positive => number::positive(),
        RuleSpec::Integer => number::integer(),
        RuleSpec::Range { min, max } => {
            if min.is_nan() || max.is_nan() {
                return Err(DataguardError::InvalidRuleArgument(
                    spec.name().to_string(),
                    "bounds must be numbers".to_string(),
                ));
            }
            if min > max {
                return Err(DataguardError::InvalidRuleArgument(
                    spec.name().to_string(),
                    format!("min ({}) is greater than max ({})", min, max),
                ));
            }
            number::range(*min, *max)
        }
        RuleSpec::Currency => number::currency(),
        other => {
            return Err(DataguardError::KindMismatch {
                rule: other.name().to_string(),
                expected: RuleKind::Number,
                found: other.kind(),
            })
        }
    };
    Ok(rule)
}

/// Compiles an ordered list of specs into a single-kind rule chain.
///
/// The kind of the chain is taken from the first spec. Rule order is preserved.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<CompiledRules, DataguardError> {
    let first = specs.first().ok_or(DataguardError::EmptyRuleChain)?;
    debug!("Starting compilation of {} {} rules.", specs.len(), first.kind());

    let compiled = match first.kind() {
        RuleKind::String => CompiledRules::Text(
            specs.iter().map(compile_text_rule).collect::<Result<Vec<_>, _>>()?,
        ),
        RuleKind::Number => CompiledRules::Number(
            specs.iter().map(compile_number_rule).collect::<Result<Vec<_>, _>>()?,
        ),
    };

    warn_on_conflicting_lengths(specs);
    debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
    Ok(compiled)
}

// A chain whose length bounds cannot both hold is legal but rejects every value.
fn warn_on_conflicting_lengths(specs: &[RuleSpec]) {
    let min = specs
        .iter()
        .filter_map(|spec| match spec {
            RuleSpec::MinLength { min } => Some(*min),
            _ => None,
        })
        .max();
    let max = specs
        .iter()
        .filter_map(|spec| match spec {
            RuleSpec::MaxLength { max } => Some(*max),
            _ => None,
        })
        .min();
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            warn!("Rule chain requires at least {} and at most {} characters; no value can pass.", min, max);
        }
    }
}
