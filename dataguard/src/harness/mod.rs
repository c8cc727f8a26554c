// dataguard/src/harness/mod.rs
//! A minimal sequential test runner used by `dataguard self-test`.
//!
//! Cases are registered up front, optionally grouped with [`TestRunner::describe`],
//! and executed in registration order. Every `before_each` hook runs before each
//! case and every `after_each` hook after it, also when the case failed. A case
//! fails when a hook or the case itself returns an error. The runner is consumed by
//! [`TestRunner::run`], so registrations never leak into a later run.
//!
//! License: MIT OR Apache-2.0

pub mod expect;
pub mod suite;

pub use expect::{expect, ExpectationError};

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crate::ui::output_format;

type CaseFn = Box<dyn Fn() -> Result<()>>;
type HookFn = Box<dyn FnMut() -> Result<()>>;

struct TestCase {
    name: String,
    run: CaseFn,
}

/// A failed case and the message that explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl RunReport {
    /// `true` when no case failed.
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Collects test cases and hooks, then runs them in order.
#[derive(Default)]
pub struct TestRunner {
    cases: Vec<TestCase>,
    before_each: Vec<HookFn>,
    after_each: Vec<HookFn>,
    groups: Vec<String>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the cases added by `body` under the group `name`.
    ///
    /// Groups nest; a case's full name joins its groups and its own name with ` > `.
    pub fn describe<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.groups.push(name.to_string());
        body(self);
        self.groups.pop();
        self
    }

    /// Registers a test case.
    pub fn test<F>(&mut self, name: &str, case: F) -> &mut Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        let full_name = self
            .groups
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(" > ");
        self.cases.push(TestCase {
            name: full_name,
            run: Box::new(case),
        });
        self
    }

    /// Registers a hook run before every case.
    pub fn before_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut() -> Result<()> + 'static,
    {
        self.before_each.push(Box::new(hook));
        self
    }

    /// Registers a hook run after every case.
    pub fn after_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut() -> Result<()> + 'static,
    {
        self.after_each.push(Box::new(hook));
        self
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    fn run_case(
        case: &TestCase,
        before_each: &mut [HookFn],
        after_each: &mut [HookFn],
    ) -> Result<()> {
        let mut outcome = before_each.iter_mut().try_for_each(|hook| hook());
        if outcome.is_ok() {
            outcome = (case.run)();
        }
        for hook in after_each.iter_mut() {
            let teardown = hook();
            if outcome.is_ok() {
                outcome = teardown;
            }
        }
        outcome
    }

    /// Runs every case, printing one line per case and a summary to `writer`.
    pub fn run<W: Write>(mut self, writer: &mut W, supports_color: bool) -> io::Result<RunReport> {
        debug!("Running {} test case(s).", self.cases.len());
        let mut report = RunReport::default();

        for case in &self.cases {
            match Self::run_case(case, &mut self.before_each, &mut self.after_each) {
                Ok(()) => {
                    output_format::print_outcome_line(writer, &case.name, true, supports_color)?;
                    report.passed += 1;
                }
                Err(e) => {
                    output_format::print_outcome_line(writer, &case.name, false, supports_color)?;
                    report.failed += 1;
                    report.failures.push(CaseFailure {
                        name: case.name.clone(),
                        message: format!("{:#}", e),
                    });
                }
            }
        }

        print_report(writer, &report, supports_color)?;
        Ok(report)
    }
}

fn print_report<W: Write>(writer: &mut W, report: &RunReport, supports_color: bool) -> io::Result<()> {
    writeln!(writer)?;
    output_format::print_header(writer, "Results:", supports_color)?;
    writeln!(writer, "Passed: {}", report.passed)?;
    writeln!(writer, "Failed: {}", report.failed)?;

    if !report.failures.is_empty() {
        writeln!(writer)?;
        output_format::print_header(writer, "Failures:", supports_color)?;
        for failure in &report.failures {
            writeln!(writer)?;
            output_format::print_error_message(writer, &failure.name, supports_color)?;
            writeln!(writer, "  {}", failure.message)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_runs_cases_in_order_and_counts_results() {
        let mut runner = TestRunner::new();
        runner.describe("math", |r| {
            r.test("adds", || expect(1 + 1).to_be(2).map_err(Into::into));
            r.test("breaks", || bail!("boom"));
        });
        runner.test("top level", || Ok(()));

        let mut out = Vec::new();
        let report = runner.run(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.succeeded());
        assert_eq!(report.failures[0].name, "math > breaks");
        assert_eq!(report.failures[0].message, "boom");

        let adds = text.find("✓ math > adds").unwrap();
        let breaks = text.find("✗ math > breaks").unwrap();
        let top = text.find("✓ top level").unwrap();
        assert!(adds < breaks && breaks < top);
        assert!(text.contains("Passed: 2"));
        assert!(text.contains("Failed: 1"));
    }

    #[test]
    fn test_hooks_wrap_every_case() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut runner = TestRunner::new();
        {
            let log = Rc::clone(&log);
            runner.before_each(move || {
                log.borrow_mut().push("before");
                Ok(())
            });
        }
        {
            let log = Rc::clone(&log);
            runner.after_each(move || {
                log.borrow_mut().push("after");
                Ok(())
            });
        }
        {
            let log = Rc::clone(&log);
            runner.test("one", move || {
                log.borrow_mut().push("one");
                Ok(())
            });
        }
        {
            let log = Rc::clone(&log);
            runner.test("two", move || {
                log.borrow_mut().push("two");
                bail!("fails")
            });
        }

        let report = runner.run(&mut io::sink(), false).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(
            *log.borrow(),
            ["before", "one", "after", "before", "two", "after"]
        );
    }

    #[test]
    fn test_failing_setup_skips_case() {
        let ran = Rc::new(RefCell::new(false));
        let mut runner = TestRunner::new();
        runner.before_each(|| bail!("no fixture"));
        {
            let ran = Rc::clone(&ran);
            runner.test("guarded", move || {
                *ran.borrow_mut() = true;
                Ok(())
            });
        }
        let report = runner.run(&mut io::sink(), false).unwrap();
        assert!(!*ran.borrow());
        assert_eq!(report.failures[0].message, "no fixture");
    }

    #[test]
    fn test_empty_runner_succeeds() {
        let runner = TestRunner::new();
        assert!(runner.is_empty());
        let report = runner.run(&mut io::sink(), false).unwrap();
        assert!(report.succeeded());
        assert_eq!(report.passed, 0);
    }
}
