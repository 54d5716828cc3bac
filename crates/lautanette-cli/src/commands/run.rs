//! Run command - execute the unified libft suites

use crate::progress::{SpinnerObserver, StderrBannerObserver};
use anyhow::{Context, Result};
use colored::*;
use lautanette_config::{ExecutionContext, Settings};
use lautanette_libft::{SuiteResult, Unified};
use std::path::PathBuf;
use tracing::debug;

/// Mandatory and bonus libft functions, used when none are named
pub const LIBFT_FUNCTIONS: &[&str] = &[
    "ft_isalpha", "ft_isdigit", "ft_isalnum", "ft_isascii", "ft_isprint", "ft_strlen",
    "ft_memset", "ft_bzero", "ft_memcpy", "ft_memmove", "ft_strlcpy", "ft_strlcat",
    "ft_toupper", "ft_tolower", "ft_strchr", "ft_strrchr", "ft_strncmp", "ft_memchr",
    "ft_memcmp", "ft_strnstr", "ft_atoi", "ft_calloc", "ft_strdup", "ft_substr",
    "ft_strjoin", "ft_strtrim", "ft_split", "ft_itoa", "ft_strmapi", "ft_striteri",
    "ft_putchar_fd", "ft_putstr_fd", "ft_putendl_fd", "ft_putnbr_fd", "ft_lstnew",
    "ft_lstadd_front", "ft_lstsize", "ft_lstlast", "ft_lstadd_back", "ft_lstdelone",
    "ft_lstclear", "ft_lstiter", "ft_lstmap",
];

/// Arguments for the run command
pub struct RunArgs {
    /// Functions to test (all libft functions when empty)
    pub functions: Vec<String>,
    /// Functions the library does not provide
    pub missing: Vec<String>,
    /// Suite sources root (settings file, then `tests`)
    pub tests_dir: Option<PathBuf>,
    /// Working root with libft.a / libft.h (settings file, then `temp`)
    pub temp_dir: Option<PathBuf>,
    /// Force strict mode on
    pub strict: bool,
    /// Force compatibility suites on
    pub compat: bool,
    /// Output the aggregate result as JSON
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Directory to look for lautanette.toml from
    pub cwd: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            functions: Vec::new(),
            missing: Vec::new(),
            tests_dir: None,
            temp_dir: None,
            strict: false,
            compat: false,
            json: false,
            no_color: false,
            cwd: PathBuf::from("."),
        }
    }
}

/// Disables colors until dropped
struct NoColorGuard {
    active: bool,
}

impl NoColorGuard {
    fn new(active: bool) -> Self {
        if active {
            colored::control::set_override(false);
        }
        Self { active }
    }
}

impl Drop for NoColorGuard {
    fn drop(&mut self) {
        if self.active {
            colored::control::unset_override();
        }
    }
}

/// Run the unified suites; returns whether every suite passed
pub fn run(args: RunArgs) -> Result<bool> {
    let _colors = NoColorGuard::new(args.no_color);

    let settings = Settings::discover(&args.cwd).context("Failed to load lautanette.toml")?;
    let mut context = ExecutionContext::resolve(&settings);
    if args.strict {
        context = context.with_strict(true);
    }
    if args.compat {
        context = context.with_compat_suites(true);
    }

    let tests_dir = args.tests_dir.unwrap_or_else(|| settings.tests_dir());
    let temp_dir = args.temp_dir.unwrap_or_else(|| settings.temp_dir());
    let functions = if args.functions.is_empty() {
        LIBFT_FUNCTIONS.iter().map(|f| f.to_string()).collect()
    } else {
        args.functions
    };

    debug!(
        strict = context.is_strict(),
        compat = context.compat_suites,
        tests_dir = %tests_dir.display(),
        temp_dir = %temp_dir.display(),
        functions = functions.len(),
        "Resolved run configuration"
    );

    let mut unified = Unified::new(tests_dir, temp_dir, functions, args.missing, context);
    let summary = if args.json {
        unified.execute_with(&mut StderrBannerObserver::default())
    } else {
        unified.execute_with(&mut SpinnerObserver::new()?)
    }
    .context("Unified run failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.as_summary())?);
    } else {
        print_summary(&summary);
    }

    Ok(!summary.has_failures())
}

fn print_summary(summary: &SuiteResult) {
    println!();
    for note in &summary.notes {
        println!("  {} {}", "●".cyan(), note);
    }
    for log in &summary.log_files {
        println!("  {} {}", "Log:".dimmed(), log.display());
    }
}
