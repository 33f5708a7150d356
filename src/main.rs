//! herald - release announcements for tracked projects
//!
//! CLI binary meant to be run by an external scheduler.

use anyhow::Result;
use clap::Parser;
use release_herald::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Announce new tagged releases to a chat webhook")]
#[command(version)]
struct Cli {
    /// Tracked project to process (defaults to `default_project` from the config)
    #[arg(short, long)]
    project: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print announcements instead of delivering them, without saving state
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "release_herald=debug,herald=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load(cli.config.as_deref())?;

    // A blank project name falls back to the default
    let project = cli
        .project
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(config.default_project.as_str());

    cli::run_announce(
        &config,
        cli::AnnounceOptions {
            project,
            dry_run: cli.dry_run,
        },
    )
    .await?;

    Ok(())
}
