//! Suite staging
//!
//! Each selected suite gets a fresh copy of its source tree under the temp
//! root, plus the shared `libft.a` / `libft.h` artifacts when they exist.

use crate::error::{UnifiedError, UnifiedResult};
use crate::suite::SuiteDescriptor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const LIBRARY_FILE: &str = "libft.a";
pub const HEADER_FILE: &str = "libft.h";

/// Source and destination roots for staging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingArea {
    pub tests_root: PathBuf,
    pub temp_root: PathBuf,
    pub library: PathBuf,
    pub header: PathBuf,
}

impl StagingArea {
    pub fn new(tests_root: impl Into<PathBuf>, temp_root: impl Into<PathBuf>) -> Self {
        let temp_root = temp_root.into();
        Self {
            tests_root: tests_root.into(),
            library: temp_root.join(LIBRARY_FILE),
            header: temp_root.join(HEADER_FILE),
            temp_root,
        }
    }

    /// Where a suite runs from
    pub fn staged_dir(&self, descriptor: &SuiteDescriptor) -> PathBuf {
        self.temp_root.join(descriptor.folder)
    }

    /// Replace any previous staged copy with a fresh one
    ///
    /// Missing shared artifacts are logged and skipped.
    pub fn stage(&self, descriptor: &SuiteDescriptor) -> UnifiedResult<PathBuf> {
        let destination = self.staged_dir(descriptor);
        if destination.exists() {
            fs::remove_dir_all(&destination)
                .map_err(|e| UnifiedError::staging(descriptor.name, &destination, e))?;
        }

        let source = self.tests_root.join(descriptor.folder);
        copy_tree(&source, &destination)
            .map_err(|e| UnifiedError::staging(descriptor.name, &source, e))?;
        debug!(suite = descriptor.name, from = %source.display(), to = %destination.display(), "Staged suite");

        self.copy_artifact(&self.library, "Library", descriptor, &destination)?;
        self.copy_artifact(&self.header, "Header", descriptor, &destination)?;

        Ok(destination)
    }

    fn copy_artifact(
        &self,
        artifact: &Path,
        label: &str,
        descriptor: &SuiteDescriptor,
        destination: &Path,
    ) -> UnifiedResult<()> {
        if !artifact.is_file() {
            warn!(
                suite = descriptor.name,
                "{} {} not found when preparing {}",
                label,
                artifact.display(),
                descriptor.name
            );
            return Ok(());
        }

        let Some(file_name) = artifact.file_name() else {
            return Ok(());
        };
        let target = destination.join(file_name);
        fs::copy(artifact, &target)
            .map(|_| ())
            .map_err(|e| UnifiedError::staging(descriptor.name, &target, e))
    }
}

/// Recursively copy `source` into a new directory `destination`
pub fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    if !source.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", source.display()),
        ));
    }

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{Suite, SuiteArgs, SuiteTier};
    use crate::suites::MakeSuite;
    use tempfile::TempDir;

    fn build(args: SuiteArgs) -> Box<dyn Suite> {
        Box::new(MakeSuite::new("fsoares", "fsoares", args))
    }

    fn descriptor() -> SuiteDescriptor {
        SuiteDescriptor::new("fsoares", "fsoares", SuiteTier::Baseline, build)
    }

    fn setup() -> (TempDir, StagingArea) {
        let temp = TempDir::new().unwrap();
        let tests = temp.path().join("tests");
        let src = tests.join("fsoares");
        fs::create_dir_all(src.join("tests")).unwrap();
        fs::write(src.join("Makefile"), "all:\n").unwrap();
        fs::write(src.join("tests").join("ft_strlen.c"), "int main(void){}\n").unwrap();
        let area = StagingArea::new(tests, temp.path().join("temp"));
        fs::create_dir_all(&area.temp_root).unwrap();
        (temp, area)
    }

    #[test]
    fn test_copy_tree_nested() {
        let (_temp, area) = setup();
        let dest = area.temp_root.join("copy");
        copy_tree(&area.tests_root.join("fsoares"), &dest).unwrap();

        assert!(dest.join("Makefile").is_file());
        assert_eq!(
            fs::read_to_string(dest.join("tests").join("ft_strlen.c")).unwrap(),
            "int main(void){}\n"
        );
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = copy_tree(&temp.path().join("nope"), &temp.path().join("dest")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_stage_copies_artifacts() {
        let (_temp, area) = setup();
        fs::write(&area.library, b"!<arch>\n").unwrap();
        fs::write(&area.header, "#ifndef LIBFT_H\n").unwrap();

        let staged = area.stage(&descriptor()).unwrap();
        assert_eq!(staged, area.temp_root.join("fsoares"));
        assert!(staged.join(LIBRARY_FILE).is_file());
        assert!(staged.join(HEADER_FILE).is_file());
        assert!(staged.join("Makefile").is_file());
    }

    #[test]
    fn test_stage_without_artifacts_continues() {
        let (_temp, area) = setup();

        let staged = area.stage(&descriptor()).unwrap();
        assert!(staged.join("Makefile").is_file());
        assert!(!staged.join(LIBRARY_FILE).exists());
        assert!(!staged.join(HEADER_FILE).exists());
    }

    #[test]
    fn test_stage_missing_source_is_error() {
        let temp = TempDir::new().unwrap();
        let area = StagingArea::new(temp.path().join("tests"), temp.path().join("temp"));

        let err = area.stage(&descriptor()).unwrap_err();
        assert!(matches!(err, UnifiedError::Staging { .. }));
    }
}
