//! gamescan entry point.

mod app;
mod config;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "gamescan", version)]
#[command(about = "Find Steam libraries and installed games", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Config file (default: <config dir>/gamescan/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scan flags used when no subcommand is given
    #[command(flatten)]
    scan: ScanArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan this host and print the result as JSON (default)
    Scan(ScanArgs),

    /// Print every key/value pair found in one manifest file
    Manifest {
        /// Path to an appmanifest_*.acf or libraryfolders.vdf file
        file: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub struct ScanArgs {
    /// OS layout to probe (windows, linux, macos); defaults to this host
    #[arg(long)]
    pub os: Option<String>,

    /// Extra directory to probe, may be repeated
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Skip the Windows registry lookup
    #[arg(long)]
    pub no_registry: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries only the JSON document.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting gamescan");

    match cli.command {
        Some(Command::Scan(args)) => run_scan(&args, cli.config.as_deref()),
        None => run_scan(&cli.scan, cli.config.as_deref()),
        Some(Command::Manifest { file }) => app::dump_manifest(&file),
    }
}

fn run_scan(args: &ScanArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    app::scan(args, &config)
}
