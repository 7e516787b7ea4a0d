//! Drills CLI - command-line interface for the practice exercises
//!
//! Each subcommand runs one exercise from `drills-core` on input taken from
//! the command line and prints the result:
//! - `dedup`, `count`, `profile update`, `keys`, `area`, `get`
//! - `demo` runs all of them on their sample inputs
//!
//! Results go to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
pub mod output;

use commands::{area, count, dedup, demo, get, keys, profile, Context};
pub use config::DrillsConfig;
pub use error::{CliError, CliResult};

/// Drills CLI application
#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "Drills - small exercises over sequences, text, records and shapes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "DRILLS_CONFIG")]
    config: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long)]
    output: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Remove repeated numbers, keeping first occurrences
    Dedup(dedup::DedupArgs),

    /// Count case-insensitive whole-word occurrences
    Count(count::CountArgs),

    /// Profile operations
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Check that every key exists on a sample record
    Keys(keys::KeysArgs),

    /// Compute the area of a shape
    Area {
        #[command(subcommand)]
        command: area::AreaCommands,
    },

    /// Read a field from a sample record
    Get(get::GetArgs),

    /// Run every exercise on its sample inputs
    Demo,

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    // Load config
    let config = DrillsConfig::load(cli.config.as_deref())?;
    let ctx = Context {
        output: cli.output.or(config.output).unwrap_or_default(),
        config,
    };

    // Execute command
    match cli.command {
        Commands::Dedup(args) => dedup::execute(args, &ctx),
        Commands::Count(args) => count::execute(args, &ctx),
        Commands::Profile { command } => profile::execute(command, &ctx),
        Commands::Keys(args) => keys::execute(args, &ctx),
        Commands::Area { command } => area::execute(command, &ctx),
        Commands::Get(args) => get::execute(args, &ctx),
        Commands::Demo => demo::execute(&ctx),
        Commands::Config => {
            let text = ctx.config.to_toml()?;
            output::print_value(&ctx.config, text.trim_end(), ctx.output)
        }
    }
}
