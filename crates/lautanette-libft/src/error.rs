/// Orchestration and suite error types
use std::path::PathBuf;
use thiserror::Error;

pub type UnifiedResult<T> = Result<T, UnifiedError>;

/// Errors that abort an orchestration run
///
/// Suite failures never surface here; they are folded into a `SuiteResult`.
#[derive(Debug, Error)]
pub enum UnifiedError {
    #[error("I/O error at {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to stage suite '{suite}' at {path}: {error}")]
    Staging {
        suite: String,
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl UnifiedError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    /// Create a staging error
    pub fn staging(suite: impl Into<String>, path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Staging {
            suite: suite.into(),
            path: path.into(),
            error,
        }
    }
}

pub type SuiteRunResult<T> = Result<T, SuiteError>;

/// Errors a suite may return from `execute()`
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to run `{command}`: {error}")]
    Spawn {
        command: String,
        error: std::io::Error,
    },

    #[error("I/O error at {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("no Makefile in staged directory {dir}")]
    MissingMakefile { dir: PathBuf },

    #[error("{0}")]
    Failed(String),
}

impl SuiteError {
    /// Short kind name used in crash notes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "SpawnError",
            Self::Io { .. } => "IoError",
            Self::MissingMakefile { .. } => "MissingMakefile",
            Self::Failed(_) => "SuiteFailure",
        }
    }

    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    pub fn spawn(command: impl Into<String>, error: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            error,
        }
    }
}
