// dataguard/src/harness/suite.rs
//! The regression suite run by `dataguard self-test`.
//!
//! Covers the rule catalog and the sanitizer with known good and bad inputs.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use dataguard_core::rules::{number, string};
use dataguard_core::{evaluate, sanitize_string, ValidationRule};

use super::{expect, TestRunner};

/// Asserts that every input passes (`expected == true`) or fails the chain.
fn check_strings(inputs: &[&str], rules: &[ValidationRule<str>], expected: bool) -> Result<()> {
    for input in inputs {
        expect(evaluate(*input, rules).is_valid()).for_input(input).to_be(expected)?;
    }
    Ok(())
}

fn check_numbers(inputs: &[f64], rules: &[ValidationRule<f64>], expected: bool) -> Result<()> {
    for input in inputs {
        expect(evaluate(input, rules).is_valid()).for_input(input).to_be(expected)?;
    }
    Ok(())
}

/// Registers every built-in case on `runner`.
pub fn register_core_suite(runner: &mut TestRunner) {
    register_string_validation(runner);
    register_number_validation(runner);
    register_sanitization(runner);
}

fn register_string_validation(runner: &mut TestRunner) {
    runner.describe("DataGuard String Validation", |r| {
        r.describe("email validation", |r| {
            r.test("valid email addresses", || {
                check_strings(
                    &[
                        "test@example.com",
                        "user.name@domain.co.uk",
                        "user+label@domain.com",
                        "123@domain.com",
                        "email@sub.domain.com",
                    ],
                    &[string::email()],
                    true,
                )
            });
            r.test("invalid email addresses", || {
                check_strings(
                    &[
                        "test@",
                        "@domain.com",
                        "test@.com",
                        "test@domain..com",
                        "test space@domain.com",
                        "",
                    ],
                    &[string::email()],
                    false,
                )
            });
        });

        r.describe("phone validation", |r| {
            r.test("accepts formatted numbers", || {
                check_strings(&["+1 (555) 123-4567", "0123456789"], &[string::phone()], true)
            });
            r.test("rejects short or lettered input", || {
                check_strings(&["1234567", "555-CALL-NOW"], &[string::phone()], false)
            });
        });

        r.describe("HTML and SQL rejection", |r| {
            r.test("detects HTML tags", || {
                check_strings(&["<b>bold</b>", "<script>alert(1)</script>"], &[string::no_html()], false)
            });
            r.test("detects SQL injection attempts", || {
                check_strings(
                    &[
                        "DROP TABLE users",
                        "SELECT * FROM users",
                        "1'; DELETE FROM users; --",
                        "1 UNION SELECT * FROM passwords",
                        "/* comment */",
                        "admin'--",
                    ],
                    &[string::no_sql()],
                    false,
                )
            });
            r.test("accepts plain text", || {
                check_strings(&["hello world", "a < b"], &[string::no_sql()], true)
            });
        });

        r.describe("length validation", |r| {
            r.test("enforces bounds in characters", || {
                let rules = [string::min_length(3), string::max_length(5)];
                check_strings(&["abc", "héllo"], &rules, true)?;
                check_strings(&["ab", "abcdef"], &rules, false)
            });
            r.test("reports failures in rule order", || {
                let result = evaluate("x", &[string::min_length(3), string::email()]);
                expect(result.errors().len()).to_be(2)?;
                expect(result.errors()[0].as_str()).to_be("Minimum length is 3 characters")?;
                expect(result.errors()[1].as_str()).to_be("Invalid email format")?;
                Ok(())
            });
        });
    });
}

fn register_number_validation(runner: &mut TestRunner) {
    runner.describe("DataGuard Number Validation", |r| {
        r.describe("currency validation", |r| {
            r.test("valid currency values", || {
                check_numbers(&[0.0, 100.0, 10.99, 0.01, 999_999.99, -10.50], &[number::currency()], true)
            });
            r.test("invalid currency values", || {
                check_numbers(
                    &[10.999, 0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY],
                    &[number::currency()],
                    false,
                )
            });
        });

        r.describe("numeric rules", |r| {
            r.test("positive accepts zero and rejects negatives", || {
                check_numbers(&[0.0, 5.0], &[number::positive()], true)?;
                check_numbers(&[-0.01], &[number::positive()], false)
            });
            r.test("integer rejects fractions and unsafe magnitudes", || {
                check_numbers(&[42.0, -7.0], &[number::integer()], true)?;
                check_numbers(&[1.5, 9_007_199_254_740_992.0], &[number::integer()], false)
            });
            r.test("range is inclusive", || {
                check_numbers(&[1.0, 10.0], &[number::range(1.0, 10.0)], true)?;
                let result = evaluate(&11.0, &[number::range(1.0, 10.0)]);
                expect(result.errors()).to_be(["Number must be between 1 and 10".to_string()])?;
                Ok(())
            });
        });
    });
}

fn register_sanitization(runner: &mut TestRunner) {
    runner.describe("DataGuard String Sanitization", |r| {
        r.test("sanitizes special characters", || {
            let input = "Hello\n\r\t\"'\\%World";
            expect(sanitize_string(input))
                .for_input(input)
                .to_be("Hello\\n\\r\\t\\\"\\'\\\\\\%World")?;
            Ok(())
        });
        r.test("removes HTML tags", || {
            let input = r#"<script>alert("xss")</script><p>Hello</p>"#;
            let sanitized = sanitize_string(input);
            expect(sanitized.as_str()).for_input(input).not_to_contain("<script>")?;
            expect(sanitized.as_str()).for_input(input).not_to_contain("</script>")?;
            Ok(())
        });
        r.test("encodes ampersands and slashes", || {
            expect(sanitize_string("a/b & c")).to_be("a&#x2F;b &amp; c")?;
            Ok(())
        });
    });
}
