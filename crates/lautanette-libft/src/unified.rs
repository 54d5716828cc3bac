//! Unified orchestrator
//!
//! Runs every selected libft suite in order and folds their results into a
//! single `unified` result plus JSON and text reports.

use crate::error::{UnifiedError, UnifiedResult};
use crate::observer::{ConsoleObserver, RunObserver};
use crate::registry::SuiteRegistry;
use crate::report::{self, ReportWriter};
use crate::result::SuiteResult;
use crate::staging::StagingArea;
use crate::suite::{SuiteArgs, SuiteDescriptor, SuiteOutcome};
use lautanette_config::{ExecutionContext, COMPAT_SUITES_ENV};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const UNIFIED_NAME: &str = "unified";

const STRICT_NOTE: &str = "Strict mode limited execution to sanitizer-heavy tests.";

/// Orchestrates one run over all selected suites
#[derive(Debug, Clone)]
pub struct Unified {
    tests_root: PathBuf,
    temp_root: PathBuf,
    temp_dir: PathBuf,
    to_execute: Vec<String>,
    missing: Vec<String>,
    staging: StagingArea,
    reports: ReportWriter,
    context: ExecutionContext,
    registry: SuiteRegistry,
    compat_notes: Vec<String>,
}

impl Unified {
    pub fn new<I, J, S, T>(
        tests_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
        to_execute: I,
        missing: J,
        context: ExecutionContext,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let tests_root = tests_dir.into();
        let temp_root = temp_dir.into();
        let run_dir = temp_root.join(UNIFIED_NAME);
        Self {
            staging: StagingArea::new(&tests_root, &temp_root),
            reports: ReportWriter::new(&run_dir),
            tests_root,
            temp_root,
            temp_dir: run_dir,
            to_execute: to_execute.into_iter().map(Into::into).collect(),
            missing: missing.into_iter().map(Into::into).collect(),
            context,
            registry: SuiteRegistry::builtin(),
            compat_notes: Vec::new(),
        }
    }

    /// Replace the built-in suite registry
    pub fn with_registry(mut self, registry: SuiteRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    pub fn library(&self) -> &Path {
        &self.staging.library
    }

    pub fn header(&self) -> &Path {
        &self.staging.header
    }

    /// JSON summary location
    pub fn report_path(&self) -> PathBuf {
        self.reports.json_path()
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Baseline suites, plus the compatibility set when requested
    pub fn resolve_suites(&mut self) -> Vec<SuiteDescriptor> {
        self.compat_notes.clear();
        let mut suites: Vec<SuiteDescriptor> = self.registry.baseline().copied().collect();

        if self.context.compat_suites {
            self.compat_notes.push(format!(
                "Compatibility suites enabled via {}.",
                COMPAT_SUITES_ENV
            ));
            suites.extend(self.registry.load_compat(&self.tests_root));
        }

        suites
    }

    /// Resolved suites with the strict-mode restriction applied
    pub fn select_suites(&mut self) -> Vec<SuiteDescriptor> {
        let suites = self.resolve_suites();
        if self.context.is_strict() {
            suites.into_iter().filter(SuiteDescriptor::is_baseline).collect()
        } else {
            suites
        }
    }

    /// Stage a fresh working copy for every suite
    pub fn prepare_frameworks(&self, suites: &[SuiteDescriptor]) -> UnifiedResult<()> {
        fs::create_dir_all(&self.temp_dir)
            .map_err(|e| UnifiedError::io(&self.temp_dir, e))?;
        for descriptor in suites {
            self.staging.stage(descriptor)?;
        }
        Ok(())
    }

    /// Run with console output
    pub fn execute(&mut self) -> UnifiedResult<SuiteResult> {
        self.execute_with(&mut ConsoleObserver)
    }

    /// Run, reporting progress to `observer`
    ///
    /// Only staging and report-writing errors are returned; a suite that
    /// errors or panics is recorded with a crash note and the run continues.
    pub fn execute_with(&mut self, observer: &mut dyn RunObserver) -> UnifiedResult<SuiteResult> {
        let selected = self.select_suites();
        self.prepare_frameworks(&selected)?;

        let args = SuiteArgs {
            tests_root: self.tests_root.clone(),
            temp_root: self.temp_root.clone(),
            to_execute: self.to_execute.clone(),
            missing: self.missing.clone(),
        };
        let mut suites: Vec<_> = selected
            .iter()
            .map(|descriptor| descriptor.instantiate(args.clone()))
            .collect();

        let mut results = Vec::with_capacity(suites.len());
        for suite in suites.iter_mut() {
            info!(suite = suite.name(), "Executing suite");
            observer.suite_started(suite.name());

            let outcome = SuiteOutcome::capture(suite.as_mut());
            if let SuiteOutcome::Crashed { suite, message, .. } = &outcome {
                error!(suite = %suite, "Suite {} crashed: {}", suite, message);
                observer.suite_crashed(suite, message);
            }
            let result = outcome.into_result();
            observer.suite_finished(&result);
            results.push(result);
        }

        let text_report = self.reports.write(&results)?;
        let report_path = self.report_path();

        let failed: Vec<String> = results
            .iter()
            .flat_map(|r| r.failed_functions.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        observer.run_finished(&report::banner(&failed, &report_path));

        let mut notes: Vec<String> = results.iter().map(SuiteResult::status_line).collect();
        if self.context.is_strict() {
            notes.push(STRICT_NOTE.to_string());
        }
        notes.extend(self.compat_notes.iter().cloned());

        let mut log_files = vec![report_path, text_report];
        for path in results.iter().flat_map(|r| r.log_files.iter()) {
            if !log_files.contains(path) {
                log_files.push(path.clone());
            }
        }

        Ok(SuiteResult::new(UNIFIED_NAME)
            .with_failed_functions(failed)
            .with_log_files(log_files)
            .with_notes(notes)
            .with_metadata("suites", Some(results.len().to_string())))
    }
}
