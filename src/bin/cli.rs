//! streamcat CLI
//!
//! Local execution entry point. Designed to be invoked repeatedly (e.g.,
//! from a scheduler) as a stateless batch job.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use streamcat::{error::Result, models::Config, pipeline, storage::LocalStorage};

/// streamcat - M3U playlist to stream catalog updater
#[derive(Parser, Debug)]
#[command(
    name = "streamcat",
    version,
    about = "Fetches an M3U playlist and publishes a stream catalog"
)]
struct Cli {
    /// Path to data directory containing config.toml and the catalog file
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the playlist and rewrite the catalog
    Update {
        /// Override the configured playlist source URL for this run
        #[arg(long)]
        source: Option<String>,

        /// Override the configured catalog file name for this run
        #[arg(long)]
        output: Option<String>,
    },

    /// Validate configuration
    Validate,

    /// Show current catalog info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("streamcat starting...");

    let config_path = cli.data_dir.join("config.toml");
    let mut config = Config::load_or_default(&config_path);

    log::info!("Loaded configuration from {}", cli.data_dir.display());

    let storage = LocalStorage::new(&cli.data_dir);

    match cli.command {
        Command::Update { source, output } => {
            if let Some(source) = source {
                config.source.url = source;
            }
            if let Some(output) = output {
                config.output.file = output;
            }

            pipeline::run_update(&config, &storage).await?;

            log::info!("Update complete!");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("  source: {}", config.source.url);
            log::info!("  timeout: {}s", config.source.timeout_secs);
            log::info!(
                "  catalog: {}",
                storage.catalog_path(&config.output.file).display()
            );
        }

        Command::Info => {
            log::info!("Data directory: {}", cli.data_dir.display());

            match storage.read_catalog(&config.output.file).await? {
                Some(entries) => {
                    log::info!(
                        "Catalog: {} ({} entries)",
                        storage.catalog_path(&config.output.file).display(),
                        entries.len()
                    );
                }
                None => {
                    log::info!("No catalog found yet.");
                }
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
