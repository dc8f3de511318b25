//! # sitewright CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitewright_cli::hash::{run_hash, HashArgs};
use sitewright_cli::policy::{run_policy, PolicyArgs};
use sitewright_cli::robots::{run_robots, RobotsArgs};

/// Sitewright site toolchain.
///
/// Computes CSP hash-source tokens for inline scripts, assembles complete
/// Content-Security-Policy header values, and renders robots.txt bodies.
#[derive(Parser, Debug)]
#[command(name = "sitewright", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print CSP hash-source tokens for inline script files or source text.
    Hash(HashArgs),

    /// Assemble the full Content-Security-Policy header value for a page.
    Policy(PolicyArgs),

    /// Render a robots.txt body from crawl rules.
    Robots(RobotsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args),
        Commands::Policy(args) => run_policy(&args),
        Commands::Robots(args) => run_robots(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
