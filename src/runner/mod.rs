//! The test runner: executes named, zero-argument, fallible test cases in
//! caller-supplied order, catching failures so a broken case never stops
//! the run.
//!
//! Finalization is tied to the harness's `Drop`: the summary (and the
//! optional process termination) happens exactly once on every exit path
//! out of the owning scope, early returns included.

pub mod reporter;

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use regex::Regex;

use crate::runner::reporter::{Reporter, TextReporter};

/// A named test case: consumed exactly once by the harness.
pub struct TestCase {
    pub name: String,
    pub action: Box<dyn FnOnce() -> anyhow::Result<()>>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        action: impl FnOnce() -> anyhow::Result<()> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }
}

/// Filter tests by name (exact match or /regex/).
#[derive(Debug, Clone)]
pub enum TestFilter {
    Exact(String),
    Regex(Regex),
}

impl TryFrom<&str> for TestFilter {
    type Error = String;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        if pattern.starts_with('/') && pattern.ends_with('/') && pattern.len() > 2 {
            let regex_pattern = &pattern[1..pattern.len() - 1];
            Regex::new(regex_pattern)
                .map(TestFilter::Regex)
                .map_err(|e| format!("Invalid regex pattern: {}", e))
        } else {
            Ok(TestFilter::Exact(pattern.to_string()))
        }
    }
}

impl TestFilter {
    pub fn matches(&self, test_name: &str) -> bool {
        match self {
            TestFilter::Exact(pattern) => test_name == pattern,
            TestFilter::Regex(regex) => regex.is_match(test_name),
        }
    }
}

/// Runs test cases strictly sequentially and owns the fail count for the
/// duration of one run.
pub struct TestHarness<R: Reporter> {
    reporter: R,
    fails: usize,
    terminate_on_failure: bool,
    filter: Option<TestFilter>,
}

impl TestHarness<TextReporter<io::Stderr>> {
    /// Harness reporting to stderr. With `terminate_on_failure` the process
    /// exits with a failure status once the harness goes out of scope, if
    /// any case failed.
    pub fn new(terminate_on_failure: bool) -> Self {
        Self::with_reporter(TextReporter::stderr(), terminate_on_failure)
    }
}

impl<R: Reporter> TestHarness<R> {
    pub fn with_reporter(reporter: R, terminate_on_failure: bool) -> Self {
        Self {
            reporter,
            fails: 0,
            terminate_on_failure,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: TestFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Runs one test case. Any `Err` or panic raised by the action is
    /// recorded against this case and never propagates.
    pub fn run_test<F>(&mut self, name: &str, action: F)
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        if let Some(filter) = &self.filter {
            if !filter.matches(name) {
                tracing::debug!(test = name, "skipped by filter");
                return;
            }
        }

        tracing::debug!(test = name, "running test case");
        match panic::catch_unwind(AssertUnwindSafe(action)) {
            Ok(Ok(())) => self.reporter.on_pass(name),
            Ok(Err(error)) => {
                self.fails += 1;
                self.reporter.on_failure(name, &error.to_string());
            }
            Err(payload) => {
                self.fails += 1;
                self.reporter.on_failure(name, panic_description(payload.as_ref()));
            }
        }
    }

    /// Runs an ordered batch of cases, consuming each exactly once.
    pub fn run_cases(&mut self, cases: Vec<TestCase>) {
        for case in cases {
            let TestCase { name, action } = case;
            self.run_test(&name, action);
        }
    }

    /// Failures recorded so far in this run.
    pub fn fail_count(&self) -> usize {
        self.fails
    }
}

impl<R: Reporter> Drop for TestHarness<R> {
    fn drop(&mut self) {
        self.reporter.on_run_complete(self.fails);
        if self.fails > 0 && self.terminate_on_failure {
            self.reporter.on_terminate();
            process::exit(1);
        }
    }
}

// Panics raised via panic!("...") carry a string payload; anything else is
// reported under the fixed placeholder.
fn panic_description(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "unknown error"
    }
}

/// Runs a named function on a harness, using the function's identifier as
/// the display name.
#[macro_export]
macro_rules! run_test {
    ($harness:expr, $test:expr) => {
        $harness.run_test(stringify!($test), $test)
    };
}
