// ABOUTME: Entry point for plainchat — a minimal TUI chat over a base text-generation model.
// ABOUTME: Parses CLI args, loads config, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use plainchat::app::App;
use plainchat::config::Config;

#[derive(Parser)]
#[command(name = "plainchat", about = "Chat with a base text-generation model")]
struct Cli {
    /// Path to the config file (default: ~/.plainchat/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model name, overriding the config file
    #[arg(long)]
    model: Option<String>,

    /// Generation backend base URL, overriding the config file
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(model) = cli.model {
        config.generator.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.generator.base_url = base_url;
    }

    App::new(config).run().await
}
