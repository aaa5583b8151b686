//! Heartview dashboard server
//!
//! Run with: cargo run -- [serve] [--data heart.csv] [--port 8050]
//!
//! # Configuration
//!
//! Settings come from (later wins): built-in defaults, a TOML config file,
//! `HEARTVIEW_*` environment variables, command-line flags.
//! `RUST_LOG` overrides the log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use heartview::api::{serve, ApiConfig, AppState};
use heartview::config::{generate_default_config, Config};
use heartview::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "heartview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Heart Disease Data Analysis dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: <config dir>/heartview/config.toml or ./heartview.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV path
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset and serve the dashboard (default)
    Serve,

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { ref output }) => write_default_config(output.as_deref()),
        Some(Commands::Serve) | None => run_server(&cli).await,
    }
}

async fn run_server(cli: &Cli) -> anyhow::Result<()> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::load_default(),
    };
    apply_cli_overrides(&mut config, cli);

    heartview::logging::init(&config.logging);
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting Heartview v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.data.path);

    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("cannot start without dataset {:?}", config.data.path))?;

    let api_config: ApiConfig = (&config.api).into();
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Heartview stopped");
    Ok(())
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(data) = &cli.data {
        config.data.path = data.clone();
    }
    if let Some(host) = &cli.host {
        config.api.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if cli.debug {
        config.logging.level = "debug".to_string();
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
