//! Configuration management for `dataguard-core`.
//!
//! Rule chains assembled at runtime are described by [`RuleSpec`]s: either parsed
//! from short textual specs (`email`, `min_length=3`, `range=1:10`) or read from a
//! YAML [`RuleProfile`]. Specs are plain data; [`crate::compiler`] turns them into
//! catalog rules.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::compiler::compile_rules;
use crate::errors::DataguardError;
use crate::rules::lookup;

/// Maximum allowed length for a user-supplied regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The type of value a rule validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    String,
    Number,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::String => f.write_str("string"),
            RuleKind::Number => f.write_str("number"),
        }
    }
}

/// A serializable reference to a catalog rule and its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Email,
    Phone,
    NoHtml,
    NoSql,
    MinLength {
        min: usize,
    },
    MaxLength {
        max: usize,
    },
    Regex {
        pattern: String,
        /// Failure message; defaults to one naming the pattern.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Positive,
    Integer,
    Range {
        min: f64,
        max: f64,
    },
    Currency,
}

impl RuleSpec {
    /// The catalog name of the referenced rule.
    pub fn name(&self) -> &'static str {
        match self {
            RuleSpec::Email => "email",
            RuleSpec::Phone => "phone",
            RuleSpec::NoHtml => "no_html",
            RuleSpec::NoSql => "no_sql",
            RuleSpec::MinLength { .. } => "min_length",
            RuleSpec::MaxLength { .. } => "max_length",
            RuleSpec::Regex { .. } => "regex",
            RuleSpec::Positive => "positive",
            RuleSpec::Integer => "integer",
            RuleSpec::Range { .. } => "range",
            RuleSpec::Currency => "currency",
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            RuleSpec::Email
            | RuleSpec::Phone
            | RuleSpec::NoHtml
            | RuleSpec::NoSql
            | RuleSpec::MinLength { .. }
            | RuleSpec::MaxLength { .. }
            | RuleSpec::Regex { .. } => RuleKind::String,
            RuleSpec::Positive | RuleSpec::Integer | RuleSpec::Range { .. } | RuleSpec::Currency => {
                RuleKind::Number
            }
        }
    }
}

fn parse_argument<T: FromStr>(rule: &str, raw: Option<&str>, syntax: &str) -> Result<T, DataguardError> {
    let raw = raw.ok_or_else(|| {
        DataguardError::InvalidRuleArgument(rule.to_string(), format!("expected {}{}", rule, syntax))
    })?;
    raw.trim().parse::<T>().map_err(|_| {
        DataguardError::InvalidRuleArgument(rule.to_string(), format!("'{}' is not valid, expected {}{}", raw, rule, syntax))
    })
}

fn reject_argument(rule: &str, raw: Option<&str>) -> Result<(), DataguardError> {
    match raw {
        Some(arg) => Err(DataguardError::InvalidRuleArgument(
            rule.to_string(),
            format!("takes no argument, got '{}'", arg),
        )),
        None => Ok(()),
    }
}

impl FromStr for RuleSpec {
    type Err = DataguardError;

    /// Parses `NAME` or `NAME=ARGUMENT`. Names accept `-` in place of `_`.
    ///
    /// Arguments: `min_length=<MIN>`, `max_length=<MAX>`, `regex=<PATTERN>`,
    /// `range=<MIN>:<MAX>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_name, raw_arg) = match s.split_once('=') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let name = raw_name.trim().to_ascii_lowercase().replace('-', "_");
        let entry = lookup(&name).ok_or_else(|| DataguardError::UnknownRule(raw_name.trim().to_string()))?;
        let syntax = entry.arguments.unwrap_or("");
        let expected = || DataguardError::InvalidRuleArgument(name.clone(), format!("expected {}{}", name, syntax));

        let spec = match name.as_str() {
            "min_length" => RuleSpec::MinLength { min: parse_argument(&name, raw_arg, syntax)? },
            "max_length" => RuleSpec::MaxLength { max: parse_argument(&name, raw_arg, syntax)? },
            "regex" => {
                let pattern = raw_arg.filter(|p| !p.is_empty()).ok_or_else(expected)?;
                RuleSpec::Regex { pattern: pattern.to_string(), message: None }
            }
            "range" => {
                let (min, max) = raw_arg.and_then(|arg| arg.split_once(':')).ok_or_else(expected)?;
                RuleSpec::Range {
                    min: parse_argument(&name, Some(min), syntax)?,
                    max: parse_argument(&name, Some(max), syntax)?,
                }
            }
            other => {
                let spec = match other {
                    "email" => RuleSpec::Email,
                    "phone" => RuleSpec::Phone,
                    "no_html" => RuleSpec::NoHtml,
                    "no_sql" => RuleSpec::NoSql,
                    "positive" => RuleSpec::Positive,
                    "integer" => RuleSpec::Integer,
                    "currency" => RuleSpec::Currency,
                    _ => return Err(DataguardError::UnknownRule(raw_name.trim().to_string())),
                };
                reject_argument(other, raw_arg)?;
                spec
            }
        };
        Ok(spec)
    }
}

/// A named, ordered rule chain read from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rules: Vec<RuleSpec>,
}

impl RuleProfile {
    /// Loads and validates a profile from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rule profile from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load profile file {}", path.display()))?;
        info!("Loaded profile '{}' with {} rules.", profile.name, profile.rules.len());
        Ok(profile)
    }

    /// Parses and validates a profile from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let profile: RuleProfile = serde_yml::from_str(text).context("Failed to parse rule profile")?;
        profile.validate()?;
        debug!("Parsed profile '{}'.", profile.name);
        Ok(profile)
    }

    /// Checks the profile name, rule count, regex patterns and value kinds.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("Profile validation failed: 'name' field cannot be empty."));
        }
        if self.rules.is_empty() {
            return Err(anyhow!("Profile '{}' validation failed: 'rules' cannot be empty.", self.name));
        }
        compile_rules(&self.rules)
            .with_context(|| format!("Profile '{}' validation failed", self.name))?;
        Ok(())
    }

    /// The value kind shared by every rule in the profile.
    pub fn kind(&self) -> Option<RuleKind> {
        self.rules.first().map(RuleSpec::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_names() -> Result<(), DataguardError> {
        assert_eq!("email".parse::<RuleSpec>()?, RuleSpec::Email);
        assert_eq!("no-html".parse::<RuleSpec>()?, RuleSpec::NoHtml);
        assert_eq!(" NO_SQL ".parse::<RuleSpec>()?, RuleSpec::NoSql);
        assert_eq!("currency".parse::<RuleSpec>()?, RuleSpec::Currency);
        Ok(())
    }

    #[test]
    fn test_parse_arguments() -> Result<(), DataguardError> {
        assert_eq!("min_length=3".parse::<RuleSpec>()?, RuleSpec::MinLength { min: 3 });
        assert_eq!("max-length=12".parse::<RuleSpec>()?, RuleSpec::MaxLength { max: 12 });
        assert_eq!("range=-1.5:10".parse::<RuleSpec>()?, RuleSpec::Range { min: -1.5, max: 10.0 });
        assert_eq!(
            "regex=^a=b$".parse::<RuleSpec>()?,
            RuleSpec::Regex { pattern: "^a=b$".to_string(), message: None }
        );
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("credit_card".parse::<RuleSpec>(), Err(DataguardError::UnknownRule(_))));
        assert!(matches!("min_length".parse::<RuleSpec>(), Err(DataguardError::InvalidRuleArgument(..))));
        assert!(matches!("min_length=abc".parse::<RuleSpec>(), Err(DataguardError::InvalidRuleArgument(..))));
        assert!(matches!("range=5".parse::<RuleSpec>(), Err(DataguardError::InvalidRuleArgument(..))));
        assert!(matches!("regex=".parse::<RuleSpec>(), Err(DataguardError::InvalidRuleArgument(..))));
        assert!(matches!("email=yes".parse::<RuleSpec>(), Err(DataguardError::InvalidRuleArgument(..))));
    }

    #[test]
    fn test_argument_errors_show_catalog_syntax() {
        let err = "range=5".parse::<RuleSpec>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument for rule 'range': expected range=<MIN>:<MAX>");
        let err = "max-length=big".parse::<RuleSpec>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument for rule 'max_length': 'big' is not valid, expected max_length=<MAX>"
        );
        let err = "Zip-Code".parse::<RuleSpec>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown rule 'Zip-Code'. Run `dataguard rules` to list the catalog.");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RuleSpec::Phone.kind(), RuleKind::String);
        assert_eq!(RuleSpec::Range { min: 0.0, max: 1.0 }.kind(), RuleKind::Number);
        assert_eq!(RuleKind::Number.to_string(), "number");
    }

    #[test]
    fn test_profile_from_yaml() -> Result<()> {
        let yaml = r#"
name: signup_username
description: "Usernames on the signup form"
rules:
  - rule: min_length
    min: 3
  - rule: max_length
    max: 32
  - rule: regex
    pattern: "^[a-z0-9_]+$"
    message: "Lowercase letters, digits and underscores only"
  - rule: no_sql
"#;
        let profile = RuleProfile::from_yaml_str(yaml)?;
        assert_eq!(profile.name, "signup_username");
        assert_eq!(profile.rules.len(), 4);
        assert_eq!(profile.kind(), Some(RuleKind::String));
        assert_eq!(profile.rules[3], RuleSpec::NoSql);
        Ok(())
    }

    #[test]
    fn test_profile_rejects_empty_rules_and_mixed_kinds() {
        assert!(RuleProfile::from_yaml_str("name: empty\nrules: []\n").is_err());
        let mixed = "name: mixed\nrules:\n  - rule: email\n  - rule: currency\n";
        let err = RuleProfile::from_yaml_str(mixed).unwrap_err();
        assert!(format!("{:#}", err).contains("currency"));
    }
}
