//! Entry point: parse CLI, start logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricket_insight::{
    cli::{Commands, CricketInsight},
    commands::{analyze::handle_analyze, serve::handle_serve},
    Config,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = CricketInsight::parse();
    let config = Config::from(app.service);

    match app.command {
        Commands::Serve { bind } => handle_serve(config, &bind)
            .await
            .with_context(|| format!("server on {bind} stopped"))?,

        Commands::Analyze { name, json } => handle_analyze(config, &name, json)
            .await
            .context("analyze failed")?,
    }

    Ok(())
}
