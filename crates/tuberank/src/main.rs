//! TubeRank command-line entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_categories_command, handle_generate_command, launch_tui};
use std::path::Path;
use std::sync::Arc;
use tuberank::config::default_log_path;
use tuberank::{AppConfig, GeminiClient, LogTarget, SeoGenerator, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Categories => {
            handle_categories_command(&mut std::io::stdout().lock())?;
        }
        Commands::Tui => {
            let log_file = default_log_path();
            init_logging(&LogTarget::File(log_file.clone()), "info")?;
            let (config, client) = load_client(cli.config.as_deref())?;
            let generator: Arc<dyn SeoGenerator> = Arc::new(client);
            launch_tui(generator, config.ui().tui_options(), &log_file).await?;
        }
        Commands::Generate {
            topic,
            audience,
            category,
        } => {
            init_logging(&LogTarget::Stderr, "info")?;
            let (_, client) = load_client(cli.config.as_deref())?;
            handle_generate_command(
                &client,
                topic,
                audience,
                category,
                &mut std::io::stdout().lock(),
            )
            .await?;
        }
    }

    Ok(())
}

fn load_client(config_path: Option<&Path>) -> anyhow::Result<(AppConfig, GeminiClient)> {
    let config = AppConfig::load(config_path)?;
    let client = GeminiClient::new(config.gemini().clone())?;
    Ok((config, client))
}
