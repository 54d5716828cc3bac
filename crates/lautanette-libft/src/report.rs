//! Unified report - JSON and plain-text summaries of a run

use crate::error::{UnifiedError, UnifiedResult};
use crate::result::{SuiteResult, SuiteSummary};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const JSON_REPORT: &str = "unified_summary.json";
pub const TEXT_REPORT: &str = "unified_summary.txt";

/// Writes both report files into one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.join(JSON_REPORT)
    }

    pub fn text_path(&self) -> PathBuf {
        self.dir.join(TEXT_REPORT)
    }

    /// Overwrite both reports; returns the text report's path
    pub fn write(&self, suites: &[SuiteResult]) -> UnifiedResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| UnifiedError::io(&self.dir, e))?;

        let summaries: Vec<SuiteSummary> = suites.iter().map(SuiteResult::as_summary).collect();
        let json = serde_json::to_string_pretty(&summaries)?;
        let json_path = self.json_path();
        fs::write(&json_path, json).map_err(|e| UnifiedError::io(&json_path, e))?;

        let text_path = self.text_path();
        fs::write(&text_path, render_text(suites)).map_err(|e| UnifiedError::io(&text_path, e))?;

        Ok(text_path)
    }
}

/// Line-oriented rendering, one block per suite
pub fn render_text(suites: &[SuiteResult]) -> String {
    let mut lines = Vec::new();
    for suite in suites {
        lines.push(format!("Suite: {}", suite.suite_name()));
        if suite.has_failures() {
            lines.push(format!("  Failed: {}", suite.failed_functions.join(", ")));
        } else {
            lines.push("  Failed: none".to_string());
        }
        for note in &suite.notes {
            lines.push(format!("  Note: {}", note));
        }
        for log in &suite.log_files {
            lines.push(format!("  Log: {}", log.display()));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Pass/fail banner printed once per run
pub fn banner(failed: &[String], report_path: &Path) -> String {
    if failed.is_empty() {
        format!(
            "\n{}: all suites passed. Details in {}.",
            "Unified summary".green().bold(),
            report_path.display().to_string().white().bold()
        )
    } else {
        format!(
            "\n{}: fail on {}\nSee {} for details.",
            "Unified summary".red().bold(),
            failed.join(", "),
            report_path.display().to_string().white().bold()
        )
    }
}
