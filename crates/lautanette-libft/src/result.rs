//! Suite result - outcome record for one suite or for a whole run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Outcome of one suite run, or the aggregate of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteResult {
    suite_name: String,
    /// Functions that failed; empty means the suite passed
    pub failed_functions: Vec<String>,
    /// Reports and logs produced by or for the suite
    pub log_files: Vec<PathBuf>,
    /// Free-form diagnostics
    pub notes: Vec<String>,
    pub metadata: BTreeMap<String, Option<String>>,
}

/// Serializable projection of a `SuiteResult`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub suite: String,
    pub failed_functions: Vec<String>,
    pub log_files: Vec<String>,
    pub notes: Vec<String>,
    pub metadata: BTreeMap<String, Option<String>>,
}

impl SuiteResult {
    /// Create an empty (passing) result
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            ..Default::default()
        }
    }

    /// Set failed functions
    pub fn with_failed_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failed_functions = functions.into_iter().map(Into::into).collect();
        self
    }

    /// Set log files
    pub fn with_log_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.log_files = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set notes
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Insert one metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    /// Append each non-empty message, in order
    pub fn extend_notes<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for message in messages {
            let message = message.as_ref();
            if !message.is_empty() {
                self.notes.push(message.to_string());
            }
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_functions.is_empty()
    }

    /// Project into the shape written to the JSON report
    pub fn as_summary(&self) -> SuiteSummary {
        SuiteSummary {
            suite: self.suite_name.clone(),
            failed_functions: self.failed_functions.clone(),
            log_files: self
                .log_files
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
            notes: self.notes.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// `"<name>: OK"` or `"<name>: KO (a, b)"`
    pub fn status_line(&self) -> String {
        if self.has_failures() {
            format!(
                "{}: KO ({})",
                self.suite_name,
                self.failed_functions.join(", ")
            )
        } else {
            format!("{}: OK", self.suite_name)
        }
    }
}
