//! Spis - AI Dining Assistant
//!
//! A CLI tool and HTTP API for turning a dining-center menu page into
//! personalized meal recommendations.
//!
//! The name "Spis" comes from the Norwegian/Scandinavian word for "eat."
//!
//! # Overview
//!
//! Spis allows you to:
//! - Fetch a dining-center menu page and reduce it to a plain-text transcript
//! - Describe dietary preferences (vegan, athlete, gluten-free, allergies)
//! - Get an AI-generated, conversational meal recommendation
//! - Optionally synthesize the recommendation to speech
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management and prompt templates
//! - `menu` - Menu fetching, markup normalization, and chunking
//! - `preferences` - Structured dietary preferences and flattening
//! - `recommend` - Recommendation engine over a completion service
//! - `speech` - Speech-to-text and text-to-speech boundary
//! - `facts` - Trivia facts for the sidebar surface
//! - `orchestrator` - Session coordination (fetch, recommend)
//!
//! # Example
//!
//! ```rust,no_run
//! use spis::config::Settings;
//! use spis::orchestrator::Orchestrator;
//! use spis::preferences::PreferenceSet;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let url = settings.menu.url.clone();
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let transcript = orchestrator.fetch_menu(&url).await;
//!     let prefs = PreferenceSet {
//!         vegan: true,
//!         ..Default::default()
//!     };
//!     let answer = orchestrator.recommend(&transcript, &prefs).await;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod menu;
pub mod openai;
pub mod orchestrator;
pub mod preferences;
pub mod recommend;
pub mod speech;

pub use error::{Result, SpisError};
