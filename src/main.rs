//! Spis CLI entry point.

use anyhow::Result;
use clap::Parser;
use spis::cli::{commands, Cli, Commands};
use spis::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("spis={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match cli.command {
        Commands::Fetch { url } => {
            commands::run_fetch(url, settings).await?;
        }

        Commands::Recommend {
            vegan,
            athlete,
            gluten_free,
            allergies,
            notes,
            url,
            input,
            speak,
        } => {
            let opts = commands::RecommendOptions {
                vegan,
                athlete,
                gluten_free,
                allergies,
                notes,
                url,
                input,
                speak,
            };
            commands::run_recommend(opts, settings).await?;
        }

        Commands::Fact => {
            commands::run_fact()?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(&host, port, settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings)?;
        }
    }

    Ok(())
}
