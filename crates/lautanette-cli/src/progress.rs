//! Spinner progress for suite runs

use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use lautanette_libft::{RunObserver, SuiteResult};
use std::time::Duration;

/// Shows a spinner while suites run and one status line per finished suite
pub struct SpinnerObserver {
    spinner: ProgressBar,
}

impl SpinnerObserver {
    pub fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Running Lautanette libft suites");
        Ok(Self { spinner })
    }
}

impl RunObserver for SpinnerObserver {
    fn suite_started(&mut self, name: &str) {
        self.spinner
            .set_message(format!("Running Lautanette libft suites: {}", name.bold()));
    }

    fn suite_crashed(&mut self, name: &str, message: &str) {
        self.spinner.suspend(|| {
            eprintln!("{} {} crashed: {}", "✗".red().bold(), name, message.dimmed());
        });
    }

    fn suite_finished(&mut self, result: &SuiteResult) {
        let mark = if result.has_failures() {
            "KO".red().bold()
        } else {
            "OK".green().bold()
        };
        self.spinner.suspend(|| {
            println!("{} {}", mark, result.suite_name());
        });
    }

    fn run_finished(&mut self, banner: &str) {
        self.spinner.finish_and_clear();
        println!("{}", banner);
    }
}

/// Keeps stdout for the JSON document and sends the banner to stderr
#[derive(Debug, Default)]
pub struct StderrBannerObserver {
    banner: Option<String>,
}

impl StderrBannerObserver {
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

impl RunObserver for StderrBannerObserver {
    fn run_finished(&mut self, banner: &str) {
        eprintln!("{}", banner);
        self.banner = Some(banner.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_banner_observer_keeps_banner() {
        let mut observer = StderrBannerObserver::default();
        assert_eq!(observer.banner(), None);

        observer.run_finished("Unified summary: fail on ft_atoi");
        assert_eq!(observer.banner(), Some("Unified summary: fail on ft_atoi"));
    }
}
