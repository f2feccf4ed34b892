//! Configuration module for Spis.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, RecommendationPrompts};
pub use settings::{
    GeneralSettings, MenuSettings, PromptSettings, RecommendationSettings, Settings,
    SpeechSettings,
};
