use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use promokit_core::{get_default_config_file, GeminiClient, PromokitConfig};

mod app;
mod cli;
mod interactive;
mod output;

use crate::cli::Args;
use crate::output::print_usage_instructions;

/// Main function - resolves configuration, builds the client, and dispatches
/// to a single panel run or the interactive menu
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from any .env file
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // File config first, then environment, then flags
    let config_path = get_default_config_file("promokit")?;
    let file_config = PromokitConfig::load_from_file(&config_path)?;

    let overrides = PromokitConfig {
        api_key: args
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok()),
        model_name: args.model.clone(),
        temperature: None,
        log_level: None,
    };
    let config = file_config.merge(&overrides);

    init_tracing(args.verbose, config.log_level.as_deref());
    debug!("Resolved model: {:?}", config.model_name);

    // The client refuses to start without a key; requests are never sent
    // unauthenticated
    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize the Gemini client: {}", e);
            eprintln!(
                "{}",
                "No API key configured. Pass --api-key, set GEMINI_API_KEY, \
                 or add api_key to ~/.config/promokit/config.toml."
                    .red()
            );
            std::process::exit(2);
        }
    };

    match args.command {
        Some(command) => {
            let succeeded = app::run_panel(&client, command.into_request()).await;
            if !succeeded {
                std::process::exit(1);
            }
        }
        None if args.interactive => interactive::run(Arc::new(client)).await?,
        None => print_usage_instructions(),
    }

    Ok(())
}

/// Initialize the subscriber: RUST_LOG wins, then --verbose, then the config
/// file's log_level, defaulting to warnings only
fn init_tracing(verbose: bool, config_level: Option<&str>) {
    let default_level = if verbose {
        "debug"
    } else {
        config_level.unwrap_or("warn")
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
