//! site-config: configuration loader for a static documentation site
//!
//! A CLI that validates the site declaration and prints what the renderer
//! would see for a given page.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use site_config::domain::logger;
use site_config::{ConfigService, RecordingRegistry, SiteService};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let log_dir = cli.log_dir.clone().unwrap_or_else(logger::default_log_dir);
        logger::init(&log_dir)?;
    }

    match &cli.command {
        Commands::Init { path } => {
            ConfigService::generate_at(path)
                .with_context(|| format!("Failed to write declaration: {}", path.display()))?;
            if !cli.quiet {
                eprintln!("Declaration created at: {}", path.display());
            }
        }
        Commands::Version => {
            println!("site-config {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check => {
            let service = open(&cli)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
                println!("{}", service.summary_json()?);
            }
        }
        Commands::Sidebar { path } => println!("{}", open(&cli)?.sidebar_json(path)?),
        Commands::Nav { active } => println!("{}", open(&cli)?.nav_json(active.as_deref())?),
        Commands::Page { path } => println!("{}", open(&cli)?.page_json(path)?),
        Commands::Extensions => {
            let service = open(&cli)?;
            for ext in service.config().extensions() {
                println!("{}", ext);
            }
        }
    }

    Ok(())
}

/// Load the declaration selected on the command line.
fn open(cli: &Cli) -> Result<SiteService> {
    let mut registry = RecordingRegistry::new();
    let config = match &cli.config {
        Some(path) => ConfigService::load_file(path, &mut registry)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?,
        None => ConfigService::load(&mut registry).context("Invalid embedded configuration")?,
    };
    Ok(SiteService::new(config))
}
