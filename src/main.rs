mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use timetrack_core::config::ClientConfig;
use timetrack_core::remote::EventsClient;
use timetrack_core::{Store, TimeTracker};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timetrack")]
#[command(about = "Record time spent on activities and browse the recorded events")]
struct Cli {
    /// Events service URL, overriding the config file (e.g. "http://localhost:3001")
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recorded events, grouped by day
    Events,
    /// Start recording; press Ctrl-C to stop and save the session
    Record {
        /// Stop without saving an event
        #[arg(long)]
        discard: bool,
    },
    /// Delete an event
    Delete { id: u64 },
    /// Change the title of an event
    Rename { id: u64, title: String },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load configuration")?;
    if let Some(server) = cli.server {
        tracing::debug!(from = %config.server_url, to = %server, "overriding server url");
        config.server_url = server;
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Events => commands::events::run(connect(&config)?).await,
        Commands::Record { discard } => commands::record::run(connect(&config)?, discard).await,
        Commands::Delete { id } => commands::delete::run(connect(&config)?, id).await,
        Commands::Rename { id, title } => {
            commands::rename::run(connect(&config)?, id, title).await
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("timetrack=warn,timetrack_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn connect(config: &ClientConfig) -> Result<TimeTracker<EventsClient>> {
    let client = EventsClient::from_config(config).context("Failed to set up HTTP client")?;
    Ok(TimeTracker::new(Store::new(), client, config))
}
