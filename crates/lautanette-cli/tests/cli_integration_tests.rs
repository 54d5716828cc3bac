//! CLI integration tests
//!
//! Exercises the binary end to end:
//! - Help messages
//! - Suite listing
//! - Unified runs with crashing suites
//! - Error handling for missing suite sources

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn lautanette_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lautanette").unwrap();
    cmd.current_dir(dir)
        .env_remove("LAUTANETTE_ENABLE_COMPAT_SUITES")
        .env_remove("LAUTANETTE_STRICT")
        .env_remove("LAUTANETTE_JSON")
        .env("NO_COLOR", "1");
    cmd
}

/// Checkout with a settings file and a baseline suite without a Makefile
fn checkout() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lautanette.toml"),
        r#"
[paths]
tests_dir = "testers"
temp_dir = "temp"
"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("testers").join("fsoares")).unwrap();
    fs::create_dir_all(dir.path().join("temp")).unwrap();
    dir
}

mod help_messages {
    use super::*;

    #[test]
    fn test_main_help_shows_commands() {
        let dir = TempDir::new().unwrap();
        lautanette_cmd(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("run"))
            .stdout(predicate::str::contains("suites"))
            .stdout(predicate::str::contains("completions"));
    }

    #[test]
    fn test_main_help_shows_environment_variables() {
        let dir = TempDir::new().unwrap();
        lautanette_cmd(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("LAUTANETTE_ENABLE_COMPAT_SUITES"))
            .stdout(predicate::str::contains("LAUTANETTE_STRICT"));
    }
}

mod suites_command {
    use super::*;

    #[test]
    fn test_suites_json_default_selection() {
        let dir = checkout();
        lautanette_cmd(dir.path())
            .args(["suites", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""name":"fsoares""#))
            .stdout(predicate::str::contains(r#""strict":false"#));
    }

    #[test]
    fn test_suites_strict_env() {
        let dir = checkout();
        lautanette_cmd(dir.path())
            .env("LAUTANETTE_STRICT", "yes")
            .args(["suites", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""strict":true"#));
    }
}

mod run_command {
    use super::*;

    #[test]
    fn test_run_records_crash_and_writes_reports() {
        let dir = checkout();
        lautanette_cmd(dir.path())
            .args(["run", "ft_strlen", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""suite": "unified""#))
            .stdout(predicate::str::contains("fsoares: OK"))
            .stdout(predicate::str::contains("Unified summary").not())
            .stderr(predicate::str::contains("Unified summary: all suites passed"));

        let unified = dir.path().join("temp").join("unified");
        assert!(unified.join("unified_summary.json").is_file());

        let text = fs::read_to_string(unified.join("unified_summary.txt")).unwrap();
        assert!(text.contains("Suite: fsoares"));
        assert!(text.contains("Note: Suite crashed with MissingMakefile"));
    }

    #[test]
    fn test_run_banner_mentions_report() {
        let dir = checkout();
        lautanette_cmd(dir.path())
            .args(["run", "ft_strlen"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Unified summary: all suites passed"))
            .stdout(predicate::str::contains("unified_summary.json"));
    }

    #[test]
    fn test_run_without_sources_fails() {
        let dir = TempDir::new().unwrap();
        lautanette_cmd(dir.path())
            .args(["run", "--tests-dir", "nowhere", "--temp-dir", "temp", "--json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unified run failed"));
    }
}
