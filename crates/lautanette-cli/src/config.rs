//! CLI configuration via environment variables
//!
//! Output preferences only; run modes live in `lautanette_config`.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default to JSON output (LAUTANETTE_JSON=1)
    pub default_json: bool,
    /// Disable colored output (LAUTANETTE_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            default_json: env::var("LAUTANETTE_JSON")
                .map(|v| lautanette_config::parse_flag(&v))
                .unwrap_or(false),
            no_color: env::var("LAUTANETTE_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
