// dataguard-core/src/evaluator.rs
//! Applies an ordered rule chain to a single value.
//!
//! License: MIT OR APACHE 2.0

use log::trace;

use crate::rule::{ValidationResult, ValidationRule};

/// Evaluates `value` against every rule in `rules`, in order.
///
/// Evaluation never short-circuits: each failing rule contributes exactly one message,
/// and messages keep the order of the rules that produced them. Callers that want to
/// stop at the first failure should pass a shorter chain.
///
/// A predicate that panics is a defect in the rule and is not caught here.
pub fn evaluate<T: ?Sized>(value: &T, rules: &[ValidationRule<T>]) -> ValidationResult {
    let errors: Vec<String> = rules
        .iter()
        .filter(|rule| !rule.validate(value))
        .map(|rule| {
            trace!("Rule '{}' rejected the value.", rule.name().unwrap_or("<unnamed>"));
            rule.failure_message(value)
        })
        .collect();

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{number, string};

    #[test]
    fn test_empty_chain_is_valid() {
        let rules: Vec<ValidationRule<str>> = Vec::new();
        assert_eq!(evaluate("anything", &rules), ValidationResult::valid());
    }

    #[test]
    fn test_collects_every_failure_in_rule_order() {
        let rules = vec![string::min_length(10), string::no_sql(), string::email()];
        let result = evaluate("a'b", &rules);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            [
                "Minimum length is 10 characters".to_string(),
                "String contains potentially unsafe SQL patterns".to_string(),
                "Invalid email format".to_string(),
            ]
        );
    }

    #[test]
    fn test_dynamic_message_overrides_static_text() {
        let rules = vec![ValidationRule::with_dynamic_message(
            |v: &f64| *v < 100.0,
            |v: &f64| format!("{} is too large", v),
        )];
        let result = evaluate(&250.0, &rules);
        assert_eq!(result.errors(), ["250 is too large".to_string()]);
    }

    #[test]
    fn test_number_chain() {
        let rules = vec![number::positive(), number::integer(), number::range(1.0, 5.0)];
        assert!(evaluate(&3.0, &rules).is_valid());
        let result = evaluate(&-2.5, &rules);
        assert_eq!(result.errors().len(), 3);
    }
}
