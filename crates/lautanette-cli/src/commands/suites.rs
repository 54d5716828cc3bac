//! Suites command - list known suites and whether they would run

use anyhow::{Context, Result};
use colored::*;
use lautanette_config::{ExecutionContext, Settings};
use lautanette_libft::{SuiteRegistry, Unified};
use std::path::PathBuf;

/// Arguments for the suites command
pub struct SuitesArgs {
    pub tests_dir: Option<PathBuf>,
    pub strict: bool,
    pub compat: bool,
    pub json: bool,
    pub cwd: PathBuf,
}

/// One registry entry as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteListing {
    pub name: &'static str,
    pub folder: &'static str,
    pub tier: &'static str,
    pub selected: bool,
}

/// Registry entries, marked with the current selection
pub fn listings(tests_dir: PathBuf, context: ExecutionContext) -> Vec<SuiteListing> {
    let registry = SuiteRegistry::builtin();
    let mut unified = Unified::new(
        tests_dir,
        PathBuf::new(),
        Vec::<String>::new(),
        Vec::<String>::new(),
        context,
    );
    let selected = unified.select_suites();

    registry
        .descriptors()
        .iter()
        .map(|d| SuiteListing {
            name: d.name,
            folder: d.folder,
            tier: d.tier.name(),
            selected: selected.iter().any(|s| s.name == d.name),
        })
        .collect()
}

pub fn run(args: SuitesArgs) -> Result<()> {
    let settings = Settings::discover(&args.cwd).context("Failed to load lautanette.toml")?;
    let mut context = ExecutionContext::resolve(&settings);
    if args.strict {
        context = context.with_strict(true);
    }
    if args.compat {
        context = context.with_compat_suites(true);
    }
    let tests_dir = args.tests_dir.unwrap_or_else(|| settings.tests_dir());

    let entries = listings(tests_dir, context);

    if args.json {
        let suites: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.name,
                    "folder": e.folder,
                    "tier": e.tier,
                    "selected": e.selected,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "strict": context.is_strict(),
                "compat": context.compat_suites,
                "suites": suites,
            })
        );
        return Ok(());
    }

    for entry in &entries {
        let mark = if entry.selected {
            "run".green().bold()
        } else {
            "skip".dimmed()
        };
        println!(
            "{:<5} {:<12} {:<9} {}",
            mark,
            entry.name.bold(),
            entry.tier,
            entry.folder
        );
    }
    if context.is_strict() {
        println!("{}", "Strict mode: baseline suite only".yellow());
    }

    Ok(())
}
