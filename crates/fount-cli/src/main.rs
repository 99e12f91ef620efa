//! Fount - Data Source Administration
//!
//! Usage:
//!   fount --config sources.yaml list            # table of configured sources
//!   fount --config sources.yaml show <name>     # one source config as YAML
//!   fount --config sources.yaml resolve <name>  # resolve to a local file path

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fount_core::prelude::*;
use fount_core::registry::render_table;

#[derive(Parser)]
#[command(name = "fount")]
#[command(about = "Data source registry and path resolution", long_about = None)]
struct Cli {
    /// Path to the sources YAML configuration
    #[arg(long)]
    config: PathBuf,

    /// Root directory for relative local source paths
    ///
    /// Defaults to the directory containing the configuration file.
    #[arg(long)]
    sources_dir: Option<PathBuf>,

    /// Cache directory for downloads and extractions
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Report cache hits and misses while resolving
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured sources
    List,

    /// Show one source configuration as YAML
    Show {
        /// Source name
        name: String,
    },

    /// Resolve a source to a concrete local file path
    ///
    /// Tries the source's paths in order (primary first, then failovers)
    /// and prints the first one that resolves.
    Resolve {
        /// Source name
        name: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fount=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let sources_dir = cli.sources_dir.clone().unwrap_or_else(|| {
        cli.config
            .parent()
            .map(|dir| dir.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    });
    let registry = SourceRegistry::load(&cli.config, &sources_dir)?;

    match cli.command {
        Commands::List => {
            println!("{}", render_table(&registry));
        }
        Commands::Show { name } => {
            let config = registry
                .get(&name)
                .with_context(|| format!("Unknown source: {name}"))?;
            print!("{}", serde_yaml::to_string(config)?);
        }
        Commands::Resolve { name } => {
            let specs = registry
                .paths(&name)
                .with_context(|| format!("No paths configured for source: {name}"))?;

            let cache_dir = cli.cache_dir.unwrap_or_else(default_cache_dir);
            std::fs::create_dir_all(&cache_dir).with_context(|| {
                format!("Failed to create cache directory: {}", cache_dir.display())
            })?;

            let resolver = PathResolver::new(cache_dir, cli.verbose);
            match resolver.resolve_any(&specs) {
                Some(path) => println!("{}", path.display()),
                None => anyhow::bail!("No usable path for source: {name}"),
            }
        }
    }

    Ok(())
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("fount")
}
