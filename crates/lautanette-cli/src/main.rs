use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod progress;

/// Lautanette libft test orchestrator.
///
/// Stages third-party libft testers next to your libft.a, runs them one after
/// another and writes a unified JSON and text report.
///
/// EXAMPLES:
///     lautanette run                        Test every libft function
///     lautanette run ft_split ft_itoa       Test selected functions
///     lautanette run --compat               Include compatibility suites
///     lautanette suites                     Show which suites would run
///
/// ENVIRONMENT VARIABLES:
///     LAUTANETTE_ENABLE_COMPAT_SUITES  Set to '1', 'true' or 'yes' to add compatibility suites
///     LAUTANETTE_STRICT                Set to '1', 'true' or 'yes' to run the baseline suite only
///     LAUTANETTE_JSON                  Set to '1' for JSON output by default
///     NO_COLOR                         Set to disable colored output
#[derive(Parser)]
#[command(name = "lautanette")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable log output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the unified libft suites
    ///
    /// Stages every selected suite under the temp directory, runs them in
    /// order and writes unified_summary.json / unified_summary.txt.
    /// Exits with status 1 when any function fails.
    ///
    /// EXAMPLES:
    ///     lautanette run                          All functions
    ///     lautanette run ft_atoi --missing ft_lstmap
    ///     lautanette run --strict                 Baseline suite only
    #[command(visible_alias = "r")]
    Run {
        /// Functions to test (defaults to every libft function)
        functions: Vec<String>,
        /// Functions not provided by the library (repeatable)
        #[arg(long, short = 'm')]
        missing: Vec<String>,
        /// Root holding one source tree per suite
        #[arg(long)]
        tests_dir: Option<PathBuf>,
        /// Working root holding libft.a and libft.h
        #[arg(long)]
        temp_dir: Option<PathBuf>,
        /// Run the baseline suite only
        #[arg(long)]
        strict: bool,
        /// Include the compatibility suites
        #[arg(long)]
        compat: bool,
        /// Output the aggregate result as JSON
        #[arg(long, env = "LAUTANETTE_JSON")]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List known suites
    ///
    /// Shows every registered suite, its tier and folder, and whether it
    /// would run with the current settings.
    Suites {
        /// Root holding one source tree per suite
        #[arg(long)]
        tests_dir: Option<PathBuf>,
        /// Apply strict mode
        #[arg(long)]
        strict: bool,
        /// Include the compatibility suites
        #[arg(long)]
        compat: bool,
        /// Output as JSON
        #[arg(long, env = "LAUTANETTE_JSON")]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     lautanette completions bash > ~/.bash_completion.d/lautanette
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Run {
            functions,
            missing,
            tests_dir,
            temp_dir,
            strict,
            compat,
            json,
            no_color,
        } => {
            let args = commands::run::RunArgs {
                functions,
                missing,
                tests_dir,
                temp_dir,
                strict,
                compat,
                json: json || cli_config.default_json,
                no_color: no_color || cli_config.no_color,
                cwd: std::env::current_dir()?,
            };
            let passed = commands::run::run(args)?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Suites {
            tests_dir,
            strict,
            compat,
            json,
        } => {
            if cli_config.no_color {
                colored::control::set_override(false);
            }
            let args = commands::suites::SuitesArgs {
                tests_dir,
                strict,
                compat,
                json: json || cli_config.default_json,
                cwd: std::env::current_dir()?,
            };
            commands::suites::run(args)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = match verbose {
        0 => "warn,lautanette=info,lautanette_libft=info",
        1 => "info,lautanette_libft=debug,lautanette_config=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
