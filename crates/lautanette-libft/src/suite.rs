//! Suite contract and crash isolation

use crate::error::SuiteRunResult;
use crate::result::SuiteResult;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// A runnable libft test suite
pub trait Suite {
    /// Display id, used as the result's suite name
    fn name(&self) -> &str;

    /// Run the suite to completion
    fn execute(&mut self) -> SuiteRunResult<SuiteResult>;
}

/// Constructor arguments shared by every suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteArgs {
    pub tests_root: PathBuf,
    pub temp_root: PathBuf,
    /// Functions to test
    pub to_execute: Vec<String>,
    /// Functions absent from the library under test
    pub missing: Vec<String>,
}

/// Whether a suite always runs or is opt-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteTier {
    /// Always selected, and the only suite allowed in strict mode
    Baseline,
    /// Selected only when compatibility suites are enabled
    Compat,
}

impl SuiteTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Compat => "compat",
        }
    }
}

pub type SuiteFactory = fn(SuiteArgs) -> Box<dyn Suite>;
pub type SuiteProbe = fn(&Path, &SuiteDescriptor) -> Result<(), String>;

/// Static description of a suite implementation
#[derive(Clone, Copy)]
pub struct SuiteDescriptor {
    pub name: &'static str,
    /// Directory under both the tests root and the temp root
    pub folder: &'static str,
    pub tier: SuiteTier,
    pub build: SuiteFactory,
    /// Availability check, run against the tests root
    pub probe: SuiteProbe,
}

impl SuiteDescriptor {
    pub fn new(
        name: &'static str,
        folder: &'static str,
        tier: SuiteTier,
        build: SuiteFactory,
    ) -> Self {
        Self {
            name,
            folder,
            tier,
            build,
            probe: probe_source_tree,
        }
    }

    pub fn with_probe(mut self, probe: SuiteProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn is_baseline(&self) -> bool {
        self.tier == SuiteTier::Baseline
    }

    /// Check the implementation is usable under `tests_root`
    pub fn check_available(&self, tests_root: &Path) -> Result<(), String> {
        (self.probe)(tests_root, self)
    }

    pub fn instantiate(&self, args: SuiteArgs) -> Box<dyn Suite> {
        (self.build)(args)
    }
}

impl fmt::Debug for SuiteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteDescriptor")
            .field("name", &self.name)
            .field("folder", &self.folder)
            .field("tier", &self.tier)
            .finish()
    }
}

impl PartialEq for SuiteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.folder == other.folder && self.tier == other.tier
    }
}

/// Default probe: the suite's source tree must exist
pub fn probe_source_tree(tests_root: &Path, descriptor: &SuiteDescriptor) -> Result<(), String> {
    let source = tests_root.join(descriptor.folder);
    if source.is_dir() {
        Ok(())
    } else {
        Err(format!(
            "source tree for {} not found at {}",
            descriptor.name,
            source.display()
        ))
    }
}

/// What came back from one suite invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteOutcome {
    Completed(SuiteResult),
    Crashed {
        suite: String,
        kind: String,
        message: String,
    },
}

impl SuiteOutcome {
    /// Run a suite, turning returned errors and panics into `Crashed`
    pub fn capture(suite: &mut dyn Suite) -> Self {
        let name = suite.name().to_string();
        match panic::catch_unwind(AssertUnwindSafe(|| suite.execute())) {
            Ok(Ok(result)) => Self::Completed(result),
            Ok(Err(error)) => Self::Crashed {
                suite: name,
                kind: error.kind().to_string(),
                message: error.to_string(),
            },
            Err(payload) => Self::Crashed {
                suite: name,
                kind: "Panic".to_string(),
                message: panic_message(payload.as_ref()),
            },
        }
    }

    pub fn is_crash(&self) -> bool {
        matches!(self, Self::Crashed { .. })
    }

    /// Crashes become a result with no failures and one note
    pub fn into_result(self) -> SuiteResult {
        match self {
            Self::Completed(result) => result,
            Self::Crashed {
                suite,
                kind,
                message,
            } => {
                let mut result = SuiteResult::new(suite);
                result.extend_notes([format!("Suite crashed with {kind}: {message}")]);
                result
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuiteError;

    struct Passing;

    impl Suite for Passing {
        fn name(&self) -> &str {
            "passing"
        }

        fn execute(&mut self) -> SuiteRunResult<SuiteResult> {
            Ok(SuiteResult::new("passing").with_failed_functions(["ft_strlen"]))
        }
    }

    struct Erroring;

    impl Suite for Erroring {
        fn name(&self) -> &str {
            "erroring"
        }

        fn execute(&mut self) -> SuiteRunResult<SuiteResult> {
            Err(SuiteError::Failed("compilation failed".to_string()))
        }
    }

    struct Panicking;

    impl Suite for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        fn execute(&mut self) -> SuiteRunResult<SuiteResult> {
            panic!("segfault in ft_memmove");
        }
    }

    #[test]
    fn test_capture_completed() {
        let outcome = SuiteOutcome::capture(&mut Passing);
        assert!(!outcome.is_crash());
        assert_eq!(outcome.into_result().failed_functions, vec!["ft_strlen"]);
    }

    #[test]
    fn test_capture_error_becomes_note() {
        let outcome = SuiteOutcome::capture(&mut Erroring);
        assert!(outcome.is_crash());

        let result = outcome.into_result();
        assert_eq!(result.suite_name(), "erroring");
        assert!(!result.has_failures());
        assert_eq!(
            result.notes,
            vec!["Suite crashed with SuiteFailure: compilation failed"]
        );
    }

    #[test]
    fn test_capture_panic_becomes_note() {
        let result = SuiteOutcome::capture(&mut Panicking).into_result();
        assert!(!result.has_failures());
        assert_eq!(
            result.notes,
            vec!["Suite crashed with Panic: segfault in ft_memmove"]
        );
    }

    #[test]
    fn test_probe_source_tree() {
        fn build(_: SuiteArgs) -> Box<dyn Suite> {
            Box::new(Passing)
        }
        let temp = tempfile::tempdir().unwrap();
        let descriptor = SuiteDescriptor::new("passing", "passing", SuiteTier::Compat, build);

        assert!(descriptor.check_available(temp.path()).is_err());
        std::fs::create_dir(temp.path().join("passing")).unwrap();
        assert!(descriptor.check_available(temp.path()).is_ok());
    }
}
