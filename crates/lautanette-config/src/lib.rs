//! Lautanette run configuration
//!
//! Resolves the inputs that decide which libft suites participate in a run:
//! - Run mode flags (strict, compatibility suites)
//! - The optional `lautanette.toml` settings file
//!
//! # Precedence
//!
//! Later sources override earlier ones:
//! 1. `lautanette.toml` (nearest one walking up from the working directory)
//! 2. Environment variables (`LAUTANETTE_*`)
//! 3. CLI flags (applied by the caller)
//!
//! # Example
//!
//! ```no_run
//! use lautanette_config::{ExecutionContext, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::discover(Path::new(".")).unwrap();
//! let context = ExecutionContext::resolve(&settings).with_strict(true);
//! assert!(context.is_strict());
//! ```

pub mod context;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use context::{parse_flag, ExecutionContext, COMPAT_SUITES_ENV, STRICT_ENV};
pub use settings::{PathSettings, Settings, SuiteSettings, SETTINGS_FILE};
