// File: dataguard-core/src/rules/string.rs
//! String rules of the catalog.
//!
//! Patterns are compiled once into process-wide statics and shared by every rule
//! value handed out by the factories below. The `regex` crate matches in linear
//! time, so none of these patterns can backtrack catastrophically on hostile input.
//!
//! Lengths are counted in Unicode scalar values (`char`s), not bytes.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::rule::ValidationRule;

/// Maximum total length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the local part (before the `@`) of an email address.
pub const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

// Atom characters allowed in the local part, followed by an alphanumeric-bounded
// domain made of 1 to 63 character labels.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\-!#$%&'*+/0-9=?A-Z\^_`a-z{|}~]+(?:\.[\-!#$%&'*+/0-9=?A-Z\^_`a-z{|}~]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{8,}$").expect("phone pattern is valid")
});

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("html tag pattern is valid"));

/// Heuristic SQL injection patterns. A value matching any of them is rejected.
///
/// Keywords are matched as whole words with ASCII case folding and ASCII word
/// boundaries, so a keyword next to a non-ASCII letter still counts as a word. Quote characters,
/// semicolons, backticks and backslashes are rejected anywhere in the value.
pub static SQL_INJECTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?i-u:\b(?:select|insert|update|delete|drop|union|exec|declare|cast)\b)|[;'"`\\]"#,
        r"--",
        r"/\*",
        r"\*/",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("sql heuristic pattern is valid"))
    .collect()
});

fn is_valid_email(value: &str) -> bool {
    // Every accepted character is ASCII, so byte offsets equal character counts
    // for any value that can pass the pattern.
    if value.is_empty() || value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    if at == 0 || at > MAX_EMAIL_LOCAL_LENGTH {
        return false;
    }
    EMAIL_REGEX.is_match(value)
}

fn contains_sql_pattern(value: &str) -> bool {
    SQL_INJECTION_PATTERNS.iter().any(|pattern| pattern.is_match(value))
}

/// Accepts syntactically valid email addresses.
///
/// Enforces an overall length of at most 254 characters and a local part of at most
/// 64 characters made of dot-separated atoms. Domain labels are 1 to 63 characters,
/// start and end with an alphanumeric character and may contain inner hyphens.
pub fn email() -> ValidationRule<str> {
    ValidationRule::new(is_valid_email, "Invalid email format").named("email")
}

/// Accepts an optional leading `+` followed by at least 8 digits, spaces, hyphens or
/// parentheses.
pub fn phone() -> ValidationRule<str> {
    ValidationRule::new(|value: &str| PHONE_REGEX.is_match(value), "Invalid phone number format")
        .named("phone")
}

/// Rejects values containing anything shaped like an HTML tag (`<...>`).
pub fn no_html() -> ValidationRule<str> {
    ValidationRule::new(
        |value: &str| !HTML_TAG_REGEX.is_match(value),
        "HTML tags are not allowed",
    )
    .named("no_html")
}

/// Rejects values matching any of the [`SQL_INJECTION_PATTERNS`].
///
/// This is a blunt heuristic: any apostrophe fails the rule, so names like
/// `O'Brien` are rejected. It does not replace parameterized queries.
pub fn no_sql() -> ValidationRule<str> {
    ValidationRule::new(
        |value: &str| !contains_sql_pattern(value),
        "String contains potentially unsafe SQL patterns",
    )
    .named("no_sql")
}

/// Accepts values with at least `min` characters.
pub fn min_length(min: usize) -> ValidationRule<str> {
    ValidationRule::new(
        move |value: &str| value.chars().count() >= min,
        format!("Minimum length is {} characters", min),
    )
    .named("min_length")
}

/// Accepts values with at most `max` characters.
pub fn max_length(max: usize) -> ValidationRule<str> {
    ValidationRule::new(
        move |value: &str| value.chars().count() <= max,
        format!("Maximum length is {} characters", max),
    )
    .named("max_length")
}

/// Accepts values matched by a caller-supplied pattern, reporting the caller's message.
///
/// The pattern is unanchored: add `^` and `$` to require a full match.
pub fn regex(pattern: Regex, message: impl Into<Cow<'static, str>>) -> ValidationRule<str> {
    ValidationRule::new(move |value: &str| pattern.is_match(value), message).named("regex")
}
