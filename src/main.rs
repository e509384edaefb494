use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daily_hub::config::Config;
use daily_hub::fetcher::Fetcher;
use daily_hub::{aggregator, routes, shortcuts};

#[derive(Parser)]
#[command(name = "daily-hub", about = "Generate and serve start page data")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "daily-hub.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch news sources and write feeds-data.json
    Feeds,
    /// Write the hot shortcut list to shortcuts-config.json
    Shortcuts,
    /// Serve the public directory
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daily_hub=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Feeds) {
        Command::Feeds => {
            let fetcher = Fetcher::new(&config)?;
            aggregator::run(&fetcher, &config.feeds_output()).await?;
        }
        Command::Shortcuts => {
            shortcuts::publish(&config.shortcuts, &config.shortcuts_output()).await?;
        }
        Command::Serve => {
            let app = routes::router(&config.public_dir);
            let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
            info!(
                "Serving {} on http://{}",
                config.public_dir.display(),
                config.server.bind
            );
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
