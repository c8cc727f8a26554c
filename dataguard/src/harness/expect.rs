// dataguard/src/harness/expect.rs
//! Assertions for harness cases.
//!
//! Matchers return `Result<(), ExpectationError>` instead of panicking, so a case can
//! use `?` and the runner records the message as a failure.

use std::fmt::{self, Debug};

/// A failed expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationError {
    pub message: String,
}

impl fmt::Display for ExpectationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExpectationError {}

/// Wraps a value for assertion.
pub fn expect<T>(actual: T) -> Expectation<T> {
    Expectation { actual, context: None }
}

/// An actual value awaiting a matcher.
#[derive(Debug)]
pub struct Expectation<T> {
    actual: T,
    context: Option<String>,
}

impl<T: Debug> Expectation<T> {
    /// Names the input that produced the actual value, for failure messages.
    pub fn for_input(mut self, input: impl Debug) -> Self {
        self.context = Some(format!("{:?}", input));
        self
    }

    fn fail(&self, relation: &str, expected: &dyn Debug) -> ExpectationError {
        let message = match &self.context {
            Some(input) => format!("Expected {:?} {} {:?} for input {}", self.actual, relation, expected, input),
            None => format!("Expected {:?} {} {:?}", self.actual, relation, expected),
        };
        ExpectationError { message }
    }

    /// Passes when `actual == expected`.
    pub fn to_be<E>(self, expected: E) -> Result<(), ExpectationError>
    where
        T: PartialEq<E>,
        E: Debug,
    {
        if self.actual == expected {
            Ok(())
        } else {
            Err(self.fail("to be", &expected))
        }
    }

    /// Passes when `actual != expected`.
    pub fn not_to_be<E>(self, expected: E) -> Result<(), ExpectationError>
    where
        T: PartialEq<E>,
        E: Debug,
    {
        if self.actual != expected {
            Ok(())
        } else {
            Err(self.fail("not to be", &expected))
        }
    }
}

impl<T: AsRef<str> + Debug> Expectation<T> {
    /// Passes when the actual string contains `needle`.
    pub fn to_contain(self, needle: &str) -> Result<(), ExpectationError> {
        if self.actual.as_ref().contains(needle) {
            Ok(())
        } else {
            Err(self.fail("to contain", &needle))
        }
    }

    /// Passes when the actual string does not contain `needle`.
    pub fn not_to_contain(self, needle: &str) -> Result<(), ExpectationError> {
        if self.actual.as_ref().contains(needle) {
            Err(self.fail("not to contain", &needle))
        } else {
            Ok(())
        }
    }
}
