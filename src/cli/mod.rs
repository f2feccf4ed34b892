//! CLI module for Spis.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Spis - AI Dining Assistant
///
/// A CLI tool and HTTP API for turning a dining-center menu page into
/// personalized meal recommendations.
/// The name "Spis" comes from the Norwegian/Scandinavian word for "eat."
#[derive(Parser, Debug)]
#[command(name = "spis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the menu page and print the normalized transcript
    Fetch {
        /// Menu page URL (defaults to the configured dining center)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Get a personalized meal recommendation
    Recommend {
        /// Prefer vegan meals
        #[arg(long)]
        vegan: bool,

        /// Prefer high-protein, athlete-oriented options
        #[arg(long)]
        athlete: bool,

        /// Prefer gluten-free options
        #[arg(long)]
        gluten_free: bool,

        /// Comma-separated allergy list (sets the allergies flag)
        #[arg(long)]
        allergies: Option<String>,

        /// Additional free-text preferences or requests
        #[arg(long)]
        notes: Option<String>,

        /// Menu page URL (defaults to the configured dining center)
        #[arg(short, long)]
        url: Option<String>,

        /// Read menu markup from a file instead of fetching
        #[arg(long)]
        input: Option<String>,

        /// Synthesize the recommendation to this audio file
        #[arg(long)]
        speak: Option<String>,
    },

    /// Print a random food trivia fact
    Fact,

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
