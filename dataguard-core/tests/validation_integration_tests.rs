// dataguard-core/tests/validation_integration_tests.rs
//! End-to-end checks of the catalog, the evaluator and the sanitizer through the
//! public API, covering the reference cases of the regression suite.

use dataguard_core::rules::{number, string};
use dataguard_core::{evaluate, sanitize_string, ValidationResult, ValidationRule};
use test_log::test;

#[test]
fn test_valid_email_addresses() {
    for email in [
        "test@example.com",
        "user.name@domain.co.uk",
        "user+label@domain.com",
        "123@domain.com",
        "email@sub.domain.com",
    ] {
        let result = evaluate(email, &[string::email()]);
        assert!(result.is_valid(), "expected '{}' to be valid", email);
    }
    assert_eq!(
        evaluate("test@example.com", &[string::email()]),
        ValidationResult::valid()
    );
}

#[test]
fn test_invalid_email_addresses() {
    for email in [
        "test@",
        "@domain.com",
        "test@.com",
        "test@domain..com",
        "test space@domain.com",
        "",
    ] {
        let result = evaluate(email, &[string::email()]);
        assert!(!result.is_valid(), "expected '{}' to be invalid", email);
    }
    assert_eq!(
        evaluate("test@", &[string::email()]),
        ValidationResult::from_errors(vec!["Invalid email format".to_string()])
    );
}

#[test]
fn test_detects_sql_injection_attempts() {
    for input in [
        "DROP TABLE users",
        "SELECT * FROM users",
        "1'; DELETE FROM users; --",
        "1 UNION SELECT * FROM passwords",
        "/* comment */",
        "admin'--",
    ] {
        let result = evaluate(input, &[string::no_sql()]);
        assert!(!result.is_valid(), "expected '{}' to be rejected", input);
    }
    assert_eq!(
        evaluate("DROP TABLE users", &[string::no_sql()]).errors(),
        ["String contains potentially unsafe SQL patterns"]
    );
}

#[test]
fn test_currency_values() {
    for value in [0.0, 100.0, 10.99, 0.01, 999_999.99, -10.50] {
        assert!(evaluate(&value, &[number::currency()]).is_valid(), "{} should pass", value);
    }
    for value in [10.999, 0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(!evaluate(&value, &[number::currency()]).is_valid(), "{} should fail", value);
    }
    assert_eq!(
        evaluate(&10.999, &[number::currency()]).errors(),
        ["Invalid currency format (maximum 2 decimal places)"]
    );
}

#[test]
fn test_error_order_follows_rule_order() {
    let forward = vec![string::no_html(), string::min_length(20)];
    let backward = vec![string::min_length(20), string::no_html()];
    let value = "<b>hi</b>";

    assert_eq!(
        evaluate(value, &forward).errors(),
        ["HTML tags are not allowed", "Minimum length is 20 characters"]
    );
    assert_eq!(
        evaluate(value, &backward).errors(),
        ["Minimum length is 20 characters", "HTML tags are not allowed"]
    );
}

#[test]
fn test_rules_are_shareable_across_threads() {
    let rules: Vec<ValidationRule<str>> = vec![string::email(), string::no_sql()];
    let handles: Vec<_> = ["a@b.com", "x'y"]
        .into_iter()
        .map(|input| {
            let rules = rules.clone();
            std::thread::spawn(move || evaluate(input, &rules).is_valid())
        })
        .collect();
    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, [true, false]);
}

#[test]
fn test_sanitizes_special_characters() {
    let input = "Hello\n\r\t\"'\\%World";
    assert_eq!(sanitize_string(input), "Hello\\n\\r\\t\\\"\\'\\\\\\%World");
}

#[test]
fn test_removes_html_tags() {
    let sanitized = sanitize_string("<script>alert(\"xss\")</script><p>Hello</p>");
    assert!(!sanitized.contains("<script>"));
    assert!(!sanitized.contains("</script>"));
}
