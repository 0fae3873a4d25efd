//! Named-check registry and sequential runner
//!
//! Checks are plain functions returning [`CheckResult`]. They are registered
//! explicitly, in order, on a [`Suite`] and run one after another. The
//! [`ensure!`](crate::ensure) macro stops a check at the first failed
//! condition and records where it failed.
//!
//! ```rust
//! use fixmap::conformance::{CheckResult, Suite};
//! use fixmap::ensure;
//!
//! fn arithmetic() -> CheckResult {
//!     ensure!(1 + 1 == 2);
//!     Ok(())
//! }
//!
//! let mut suite = Suite::new();
//! suite.register("math::arithmetic", arithmetic);
//! assert!(suite.run().all_passed());
//! ```

mod checks;

pub use checks::builtin_suite;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

/// Location of the first failed condition in a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Source file name, without directories
    pub file: String,
    /// Source line
    pub line: u32,
    /// The condition text, or the panic message
    pub expression: String,
}

impl CheckFailure {
    /// Build a failure record; `file` is reduced to its file name
    pub fn new(file: &str, line: u32, expression: &str) -> Self {
        let file = Path::new(file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string());
        Self {
            file,
            line,
            expression: expression.to_string(),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.expression)
    }
}

/// Result of a single check
pub type CheckResult = std::result::Result<(), CheckFailure>;

/// Signature of a registered check
pub type CheckFn = fn() -> CheckResult;

/// Fail the enclosing check if the condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr) => {
        if !$cond {
            return Err($crate::conformance::CheckFailure::new(
                file!(),
                line!(),
                stringify!($cond),
            ));
        }
    };
}

/// Outcome of one check run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Registered name
    pub name: String,
    /// `None` on success
    pub failure: Option<CheckFailure>,
    /// Wall-clock duration, milliseconds
    pub elapsed_ms: f64,
}

impl CheckOutcome {
    /// Returns `true` if the check passed
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Outcomes of a whole suite run, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteReport {
    /// One outcome per registered check
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Number of passed checks
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failed checks
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Returns `true` if every check passed
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.failure {
                None => writeln!(f, "[PASS]  {} ({:.3}ms)", outcome.name, outcome.elapsed_ms)?,
                Some(failure) => writeln!(f, "[FAIL]* {} at {}", outcome.name, failure)?,
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Ordered collection of named checks
#[derive(Debug, Default)]
pub struct Suite {
    checks: Vec<(String, CheckFn)>,
}

impl Suite {
    /// Create an empty suite
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; checks run in registration order
    pub fn register<S: Into<String>>(&mut self, name: S, check: CheckFn) -> &mut Self {
        self.checks.push((name.into(), check));
        self
    }

    /// Number of registered checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Registered names, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|(name, _)| name.as_str())
    }

    /// Run every check sequentially
    ///
    /// A panicking check is recorded as a failure and does not stop the run.
    pub fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::default();
        for (name, check) in &self.checks {
            let start = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(check)).unwrap_or_else(|payload| {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic".to_string());
                Err(CheckFailure::new("<panic>", 0, &message))
            });
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(()) => log::info!("[PASS]  {} ({:.3}ms)", name, elapsed_ms),
                Err(failure) => log::warn!("[FAIL]* {} at {}", name, failure),
            }
            report.outcomes.push(CheckOutcome {
                name: name.clone(),
                failure: result.err(),
                elapsed_ms,
            });
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> CheckResult {
        ensure!(2 * 2 == 4);
        Ok(())
    }

    fn failing() -> CheckResult {
        ensure!(true);
        ensure!(1 > 2);
        ensure!(false);
        Ok(())
    }

    fn panicking() -> CheckResult {
        panic!("boom");
    }

    #[test]
    fn test_runs_in_registration_order() {
        let mut suite = Suite::new();
        suite.register("b::first", passing).register("a::second", failing);
        assert_eq!(suite.len(), 2);
        assert_eq!(suite.names().collect::<Vec<_>>(), vec!["b::first", "a::second"]);

        let report = suite.run();
        assert_eq!(report.outcomes[0].name, "b::first");
        assert!(report.outcomes[0].passed());
        assert!(!report.outcomes[1].passed());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_failure_records_first_failed_line() {
        let err = failing().unwrap_err();
        assert_eq!(err.file, "mod.rs");
        assert_eq!(err.expression, "1 > 2");

        let expected = line!() + 3;
        let check = || -> CheckResult {
            ensure!(true);
            ensure!(Some(3).is_none());
            Ok(())
        };
        let err = check().unwrap_err();
        assert_eq!(err.line, expected);
        assert_eq!(err.expression, "Some(3).is_none()");
    }

    #[test]
    fn test_panic_is_captured() {
        let mut suite = Suite::new();
        suite.register("panics", panicking).register("after", passing);
        let report = suite.run();
        let failure = report.outcomes[0].failure.as_ref().unwrap();
        assert_eq!(failure.expression, "boom");
        assert!(report.outcomes[1].passed());
    }

    #[test]
    fn test_display() {
        let mut suite = Suite::new();
        suite.register("ok", passing).register("bad", failing);
        let text = suite.run().to_string();
        assert!(text.contains("[PASS]  ok"));
        assert!(text.contains("[FAIL]* bad at mod.rs:"));
        assert!(text.ends_with("1 passed, 1 failed"));
    }

    #[test]
    fn test_empty_suite() {
        let suite = Suite::new();
        assert!(suite.is_empty());
        assert!(suite.run().all_passed());
    }
}
