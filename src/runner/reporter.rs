//! Reporting surface for a test run.
//!
//! [`TextReporter`] owns the line contract other tooling may scrape:
//!
//! - `<name> OK`
//! - `<name> fail: <message>`
//! - `<count> unit tests failed.` (only when failures occurred)
//! - ` Terminate.` (only when the harness is about to exit the process)
//!
//! [`JsonReporter`] instead collects per-test records and emits a single
//! JSON document when the run completes.

use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tests: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub tests: Vec<TestRecord>,
    pub summary: RunSummary,
}

/// Sink for per-test and end-of-run events. The harness calls
/// `on_run_complete` exactly once, on every exit path.
pub trait Reporter {
    fn on_pass(&mut self, name: &str);
    fn on_failure(&mut self, name: &str, message: &str);
    fn on_run_complete(&mut self, fail_count: usize);
    fn on_terminate(&mut self);
}

impl Reporter for Box<dyn Reporter> {
    fn on_pass(&mut self, name: &str) {
        (**self).on_pass(name);
    }

    fn on_failure(&mut self, name: &str, message: &str) {
        (**self).on_failure(name, message);
    }

    fn on_run_complete(&mut self, fail_count: usize) {
        (**self).on_run_complete(fail_count);
    }

    fn on_terminate(&mut self) {
        (**self).on_terminate();
    }
}

/// Line-oriented reporter, conventionally over stderr.
pub struct TextReporter<W: Write> {
    out: W,
}

impl TextReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn on_pass(&mut self, name: &str) {
        let _ = writeln!(self.out, "{name} OK");
    }

    fn on_failure(&mut self, name: &str, message: &str) {
        let _ = writeln!(self.out, "{name} fail: {message}");
    }

    fn on_run_complete(&mut self, fail_count: usize) {
        if fail_count > 0 {
            let _ = writeln!(self.out, "{fail_count} unit tests failed.");
        }
        let _ = self.out.flush();
    }

    fn on_terminate(&mut self) {
        let _ = writeln!(self.out, " Terminate.");
        let _ = self.out.flush();
    }
}

/// Collects records during the run and writes one JSON document when the
/// run completes.
pub struct JsonReporter<W: Write> {
    out: W,
    records: Vec<TestRecord>,
}

impl JsonReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            records: Vec::new(),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_pass(&mut self, name: &str) {
        self.records.push(TestRecord {
            name: name.to_string(),
            status: Status::Passed,
            message: None,
        });
    }

    fn on_failure(&mut self, name: &str, message: &str) {
        self.records.push(TestRecord {
            name: name.to_string(),
            status: Status::Failed,
            message: Some(message.to_string()),
        });
    }

    fn on_run_complete(&mut self, fail_count: usize) {
        let report = RunReport {
            summary: RunSummary {
                tests: self.records.len(),
                passed: self.records.len() - fail_count,
                failed: fail_count,
            },
            tests: std::mem::take(&mut self.records),
        };
        let body = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            // Use serde_json to properly escape the error message
            let escaped = serde_json::to_string(&e.to_string())
                .unwrap_or_else(|_| "\"serialization error\"".to_string());
            format!("{{\"error\": {}}}", escaped)
        });
        let _ = writeln!(self.out, "{body}");
        let _ = self.out.flush();
    }

    fn on_terminate(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lines_match_the_contract() {
        let mut buffer = Vec::new();
        let mut reporter = TextReporter::new(&mut buffer);
        reporter.on_pass("alpha");
        reporter.on_failure("beta", "Assertion failed: [1] != []");
        reporter.on_run_complete(1);
        reporter.on_terminate();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "alpha OK\nbeta fail: Assertion failed: [1] != []\n1 unit tests failed.\n Terminate.\n"
        );
    }

    #[test]
    fn text_summary_absent_without_failures() {
        let mut buffer = Vec::new();
        let mut reporter = TextReporter::new(&mut buffer);
        reporter.on_pass("alpha");
        reporter.on_run_complete(0);
        assert_eq!(String::from_utf8(buffer).unwrap(), "alpha OK\n");
    }

    #[test]
    fn json_document_carries_records_and_counts() {
        let mut buffer = Vec::new();
        let mut reporter = JsonReporter::new(&mut buffer);
        reporter.on_pass("alpha");
        reporter.on_failure("beta", "boom");
        reporter.on_run_complete(1);

        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).expect("reporter should emit valid JSON");
        assert_eq!(parsed["summary"]["tests"], 2);
        assert_eq!(parsed["summary"]["passed"], 1);
        assert_eq!(parsed["summary"]["failed"], 1);
        assert_eq!(parsed["tests"][0]["status"], "passed");
        assert_eq!(parsed["tests"][1]["status"], "failed");
        assert_eq!(parsed["tests"][1]["message"], "boom");
    }

    #[test]
    fn json_passing_record_omits_message() {
        let mut buffer = Vec::new();
        let mut reporter = JsonReporter::new(&mut buffer);
        reporter.on_pass("alpha");
        reporter.on_run_complete(0);

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed["tests"][0].get("message").is_none());
    }
}
