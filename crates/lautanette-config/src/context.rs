//! Execution context
//!
//! Run mode flags are resolved once, before suite selection, and passed down
//! explicitly so selection never reads the environment mid-run.

use crate::settings::Settings;
use std::env;

/// Enables the compatibility suites when set to a truthy value
pub const COMPAT_SUITES_ENV: &str = "LAUTANETTE_ENABLE_COMPAT_SUITES";

/// Restricts a run to the baseline suite when set to a truthy value
pub const STRICT_ENV: &str = "LAUTANETTE_STRICT";

/// Parse a boolean flag value.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive.
/// Only `1`, `true` and `yes` count as enabled.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Mode flags for one orchestration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Only the baseline suite may run
    pub strict: bool,
    /// Opt-in compatibility suites are requested
    pub compat_suites: bool,
}

impl ExecutionContext {
    /// Create a context with both flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// Read both flags from the environment
    ///
    /// Unset variables count as disabled.
    pub fn from_env() -> Self {
        Self {
            strict: env_flag(STRICT_ENV).unwrap_or(false),
            compat_suites: env_flag(COMPAT_SUITES_ENV).unwrap_or(false),
        }
    }

    /// Start from the settings file, then let set environment variables win
    pub fn resolve(settings: &Settings) -> Self {
        Self {
            strict: env_flag(STRICT_ENV).unwrap_or(settings.suites.strict),
            compat_suites: env_flag(COMPAT_SUITES_ENV).unwrap_or(settings.suites.compat),
        }
    }

    /// Override strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the compatibility suite request
    pub fn with_compat_suites(mut self, compat_suites: bool) -> Self {
        self.compat_suites = compat_suites;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// `None` when the variable is unset, otherwise its parsed value
fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|value| parse_flag(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case("1", true)]
    #[case("true", true)]
    #[case("yes", true)]
    #[case("YES", true)]
    #[case("  True\n", true)]
    #[case("", false)]
    #[case("0", false)]
    #[case("on", false)]
    #[case("y", false)]
    #[case("false", false)]
    fn test_parse_flag(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(value), expected);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var(STRICT_ENV);
        env::remove_var(COMPAT_SUITES_ENV);

        let context = ExecutionContext::from_env();
        assert!(!context.is_strict());
        assert!(!context.compat_suites);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_flags() {
        env::set_var(STRICT_ENV, "1");
        env::set_var(COMPAT_SUITES_ENV, " Yes ");

        let context = ExecutionContext::from_env();
        assert!(context.is_strict());
        assert!(context.compat_suites);

        env::remove_var(STRICT_ENV);
        env::remove_var(COMPAT_SUITES_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_env_overrides_settings() {
        let mut settings = Settings::default();
        settings.suites.compat = true;
        settings.suites.strict = true;

        env::set_var(COMPAT_SUITES_ENV, "nope");
        env::remove_var(STRICT_ENV);

        let context = ExecutionContext::resolve(&settings);
        assert!(!context.compat_suites);
        assert!(context.strict);

        env::remove_var(COMPAT_SUITES_ENV);
    }

    #[test]
    fn test_builder_overrides() {
        let context = ExecutionContext::new()
            .with_strict(true)
            .with_compat_suites(true);
        assert!(context.is_strict());
        assert!(context.compat_suites);
    }
}
