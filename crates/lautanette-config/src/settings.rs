//! Settings file (lautanette.toml)
//!
//! Optional per-checkout configuration for paths and default run modes.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file looked up from the working directory upwards
pub const SETTINGS_FILE: &str = "lautanette.toml";

const DEFAULT_TESTS_DIR: &str = "tests";
const DEFAULT_TEMP_DIR: &str = "temp";

/// Contents of lautanette.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub suites: SuiteSettings,

    /// Directory the settings were loaded from
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// Filesystem locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    /// Root holding one source tree per suite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests_dir: Option<PathBuf>,

    /// Working root holding libft.a, libft.h and staged suites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

/// Default run modes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SuiteSettings {
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub compat: bool,
}

impl Settings {
    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut settings: Settings =
            toml::from_str(&content).map_err(|error| ConfigError::TomlParseError {
                file: path.to_path_buf(),
                error,
            })?;
        settings.root = path.parent().map(Path::to_path_buf);
        Ok(settings)
    }

    /// Find the nearest lautanette.toml from `start_dir` upwards
    ///
    /// Falls back to defaults when no file exists.
    pub fn discover(start_dir: &Path) -> ConfigResult<Self> {
        let mut current = Some(start_dir);

        while let Some(dir) = current {
            let candidate = dir.join(SETTINGS_FILE);
            if candidate.is_file() {
                return Self::load_from_file(&candidate);
            }
            current = dir.parent();
        }

        Ok(Self::default())
    }

    /// Tests root, resolved against the settings directory
    pub fn tests_dir(&self) -> PathBuf {
        self.resolve(self.paths.tests_dir.as_deref(), DEFAULT_TESTS_DIR)
    }

    /// Temp root, resolved against the settings directory
    pub fn temp_dir(&self) -> PathBuf {
        self.resolve(self.paths.temp_dir.as_deref(), DEFAULT_TEMP_DIR)
    }

    fn resolve(&self, configured: Option<&Path>, fallback: &str) -> PathBuf {
        let path = configured.unwrap_or_else(|| Path::new(fallback));
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::default();
        assert_eq!(settings.tests_dir(), PathBuf::from("tests"));
        assert_eq!(settings.temp_dir(), PathBuf::from("temp"));
        assert!(!settings.suites.strict);
        assert!(!settings.suites.compat);
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            r#"
[paths]
tests_dir = "suites"
temp_dir = "/var/tmp/lautanette"

[suites]
compat = true
"#,
        )
        .unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.tests_dir(), temp.path().join("suites"));
        assert_eq!(settings.temp_dir(), PathBuf::from("/var/tmp/lautanette"));
        assert!(settings.suites.compat);
        assert!(!settings.suites.strict);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        fs::write(&path, "[suites]\nparallel = true\n").unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_file(Path::new("/nonexistent/lautanette.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
