//! Autoscreenwriter command-line front end.

mod cli;

use anyhow::Context;
use autoscreenwriter::{ModelRegistry, VertexConfig, init_tracing};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use tracing::info;

fn install_registry(config_path: Option<&Path>) -> anyhow::Result<&'static ModelRegistry> {
    let config = VertexConfig::load(config_path).context("Loading Vertex AI settings")?;
    let registry = ModelRegistry::from_config(&config)?.install()?;
    Ok(registry)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.log_format, "info")?;

    info!(command = ?cli.command, "Starting autoscreenwriter");

    match &cli.command {
        Commands::Prompt { story } => cli::handle_prompt_command(story)?,
        Commands::Story {
            story,
            show_prompt,
            progressive,
            allow_empty,
        } => {
            let registry = install_registry(cli.config.as_deref())?;
            cli::handle_story_command(registry, story, *show_prompt, *progressive, *allow_empty)
                .await?
        }
        Commands::Vision {
            prompt,
            images,
            file_uris,
        } => {
            let registry = install_registry(cli.config.as_deref())?;
            cli::handle_vision_command(registry, prompt, images, file_uris).await?
        }
    }
    Ok(())
}
