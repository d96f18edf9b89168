//! Command-line interface for siteconf
//!
//! Provides `resolve`, `get`, `diff`, `check` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod completions;
mod diff;
mod get;
mod resolve;
mod utils;

/// Resolve static-site generator settings from a base file and a publish override
#[derive(Parser)]
#[command(name = "siteconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Resolve(resolve::ResolveArgs),

    /// Print the effective value of one setting
    Get(get::GetArgs),

    /// List the settings the override adds or replaces
    Diff(diff::DiffArgs),

    /// Validate settings files without resolving them
    Check(check::CheckArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Diff(args) => diff::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Log to stderr. `RUST_LOG` decides the filter when set; otherwise `--verbose`
/// selects DEBUG and the default is WARN.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
