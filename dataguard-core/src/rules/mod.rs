// dataguard-core/src/rules/mod.rs
//! The rule catalog.
//!
//! Every entry is a free function returning a fresh, immutable
//! [`ValidationRule`](crate::rule::ValidationRule). Parameterized rules capture their
//! arguments by value, so rules built from the same factory never share state.
//!
//! * [`string`]: rules over `str` (format, content and length checks).
//! * [`number`]: rules over `f64` (sign, integrality, range and currency checks).
//!
//! [`catalog`] describes the available entries for listings and help output.

pub mod number;
pub mod string;

use serde::Serialize;

use crate::config::RuleKind;

/// Describes one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Name used in rule specs and profiles.
    pub name: &'static str,
    pub kind: RuleKind,
    /// Argument syntax for rule specs, if the rule takes arguments.
    pub arguments: Option<&'static str>,
    pub summary: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "email",
        kind: RuleKind::String,
        arguments: None,
        summary: "Syntactically valid email address",
    },
    CatalogEntry {
        name: "phone",
        kind: RuleKind::String,
        arguments: None,
        summary: "Optional '+' then at least 8 digits, spaces, hyphens or parentheses",
    },
    CatalogEntry {
        name: "no_html",
        kind: RuleKind::String,
        arguments: None,
        summary: "Rejects anything shaped like an HTML tag",
    },
    CatalogEntry {
        name: "no_sql",
        kind: RuleKind::String,
        arguments: None,
        summary: "Rejects SQL keywords, quotes, semicolons, backslashes and comment markers",
    },
    CatalogEntry {
        name: "min_length",
        kind: RuleKind::String,
        arguments: Some("=<MIN>"),
        summary: "At least MIN characters",
    },
    CatalogEntry {
        name: "max_length",
        kind: RuleKind::String,
        arguments: Some("=<MAX>"),
        summary: "At most MAX characters",
    },
    CatalogEntry {
        name: "regex",
        kind: RuleKind::String,
        arguments: Some("=<PATTERN>"),
        summary: "Matches a caller-supplied regular expression",
    },
    CatalogEntry {
        name: "positive",
        kind: RuleKind::Number,
        arguments: None,
        summary: "Greater than or equal to zero",
    },
    CatalogEntry {
        name: "integer",
        kind: RuleKind::Number,
        arguments: None,
        summary: "Integer within +/-(2^53 - 1)",
    },
    CatalogEntry {
        name: "range",
        kind: RuleKind::Number,
        arguments: Some("=<MIN>:<MAX>"),
        summary: "Between MIN and MAX, inclusive",
    },
    CatalogEntry {
        name: "currency",
        kind: RuleKind::Number,
        arguments: None,
        summary: "Finite amount with at most 2 decimal places",
    },
];

/// All catalog entries, string rules first.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Looks up a catalog entry by name.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("currency").map(|e| e.kind), Some(RuleKind::Number));
        assert_eq!(lookup("email").map(|e| e.kind), Some(RuleKind::String));
        assert!(lookup("credit_card").is_none());
    }
}
