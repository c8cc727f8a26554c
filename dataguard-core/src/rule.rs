// dataguard-core/src/rule.rs
//! Defines the rule descriptor and the result type shared by the catalog and the evaluator.
//!
//! A [`ValidationRule`] pairs a pure predicate with the message reported when the
//! predicate rejects a value. Rules are immutable after construction and cheap to
//! clone: the predicate and any dynamic message are shared behind an `Arc`, so the
//! same rule can be reused across threads and rule chains.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// A shared, thread-safe predicate over `T`.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A shared, thread-safe message builder over `T`.
pub type MessageFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// The failure text of a rule.
///
/// `Dynamic` replaces the static text entirely, so every rule has exactly one
/// source for its message.
pub enum RuleMessage<T: ?Sized> {
    /// Fixed human-readable text.
    Static(Cow<'static, str>),
    /// Text computed from the rejected value.
    Dynamic(MessageFn<T>),
}

impl<T: ?Sized> RuleMessage<T> {
    /// Renders the message for the value that failed the rule.
    pub fn render(&self, value: &T) -> String {
        match self {
            RuleMessage::Static(text) => text.to_string(),
            RuleMessage::Dynamic(build) => build(value),
        }
    }
}

impl<T: ?Sized> Clone for RuleMessage<T> {
    fn clone(&self) -> Self {
        match self {
            RuleMessage::Static(text) => RuleMessage::Static(text.clone()),
            RuleMessage::Dynamic(build) => RuleMessage::Dynamic(Arc::clone(build)),
        }
    }
}

impl<T: ?Sized> fmt::Debug for RuleMessage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMessage::Static(text) => f.debug_tuple("Static").field(text).finish(),
            RuleMessage::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

/// An immutable validation rule over values of type `T`.
///
/// `T` may be unsized, so string rules are `ValidationRule<str>` and apply to any
/// `&str` without allocation.
pub struct ValidationRule<T: ?Sized> {
    name: Option<Cow<'static, str>>,
    predicate: Predicate<T>,
    message: RuleMessage<T>,
}

impl<T: ?Sized> ValidationRule<T> {
    /// Builds a rule from a predicate and a static failure message.
    pub fn new<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            predicate: Arc::new(predicate),
            message: RuleMessage::Static(message.into()),
        }
    }

    /// Builds a rule whose failure message is computed from the rejected value.
    pub fn with_dynamic_message<F, M>(predicate: F, message: M) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
        M: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            name: None,
            predicate: Arc::new(predicate),
            message: RuleMessage::Dynamic(Arc::new(message)),
        }
    }

    /// Returns a copy of this rule carrying a diagnostic name.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The diagnostic name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The message descriptor of this rule.
    pub fn message(&self) -> &RuleMessage<T> {
        &self.message
    }

    /// Runs the predicate.
    pub fn validate(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// The message reported when `value` fails this rule.
    pub fn failure_message(&self, value: &T) -> String {
        self.message.render(value)
    }
}

impl<T: ?Sized> Clone for ValidationRule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// The outcome of evaluating one value against one rule chain.
///
/// `is_valid` is derived from `errors` at construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from the ordered failure messages.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure messages in the order of the rules that produced them.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
