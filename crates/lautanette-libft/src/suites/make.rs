//! Makefile-driven suite
//!
//! Runs one make target per function inside the suite's staged directory.
//! A non-zero exit marks the function as failed.

use crate::error::{SuiteError, SuiteRunResult};
use crate::result::SuiteResult;
use crate::suite::{Suite, SuiteArgs};
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Suite backed by the staged tester's Makefile
#[derive(Debug, Clone)]
pub struct MakeSuite {
    name: String,
    /// Staged working directory (`temp_root/<folder>`)
    dir: PathBuf,
    to_execute: Vec<String>,
    missing: Vec<String>,
    program: OsString,
    leading_args: Vec<OsString>,
}

impl MakeSuite {
    pub fn new(name: impl Into<String>, folder: &str, args: SuiteArgs) -> Self {
        Self {
            name: name.into(),
            dir: args.temp_root.join(folder),
            to_execute: args.to_execute,
            missing: args.missing,
            program: OsString::from("make"),
            leading_args: Vec::new(),
        }
    }

    /// Use another make-compatible program
    pub fn with_program(mut self, program: impl Into<OsString>, leading_args: Vec<OsString>) -> Self {
        self.program = program.into();
        self.leading_args = leading_args;
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn command_line(&self, target: &str) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(self.leading_args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.push("-s".to_string());
        parts.push("-C".to_string());
        parts.push(self.dir.display().to_string());
        parts.push(target.to_string());
        parts.join(" ")
    }

    /// Run one target, appending its output to the log
    fn run_target(&self, target: &str, log: &mut File) -> SuiteRunResult<bool> {
        debug!(suite = %self.name, make_target = target, "Running make target");

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .arg("-s")
            .arg("-C")
            .arg(&self.dir)
            .arg(target)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SuiteError::spawn(self.command_line(target), e))?;

        let log_path = self.log_path();
        let write = |log: &mut File, bytes: &[u8]| {
            log.write_all(bytes)
                .map_err(|e| SuiteError::io(&log_path, e))
        };
        write(log, format!("=== {} ===\n", target).as_bytes())?;
        write(log, &output.stdout)?;
        write(log, &output.stderr)?;
        let status = output
            .status
            .code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| "signal".to_string());
        write(log, format!("exit status: {}\n\n", status).as_bytes())?;

        Ok(output.status.success())
    }
}

impl Suite for MakeSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self) -> SuiteRunResult<SuiteResult> {
        if !self.dir.join("Makefile").is_file() {
            return Err(SuiteError::MissingMakefile {
                dir: self.dir.clone(),
            });
        }

        let log_path = self.log_path();
        let mut log = File::create(&log_path).map_err(|e| SuiteError::io(&log_path, e))?;

        let mut failed = Vec::new();
        let mut notes = Vec::new();
        for function in &self.to_execute {
            if self.missing.contains(function) {
                notes.push(format!("{}: not found in libft, skipped", function));
                continue;
            }
            if !self.run_target(function, &mut log)? {
                failed.push(function.clone());
            }
        }

        info!(suite = %self.name, failed = failed.len(), "Suite finished");

        let mut result = SuiteResult::new(self.name.clone())
            .with_failed_functions(failed)
            .with_log_files([log_path]);
        result.extend_notes(notes);
        Ok(result)
    }
}
