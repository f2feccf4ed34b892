//! Meal recommendation generation.
//!
//! Drives the per-chunk prompt/response loop against a completion service
//! and reconciles the chunk responses into one deduplicated answer.

mod engine;
mod openai;
mod post_process;

pub use engine::RecommendationEngine;
pub use openai::OpenAiCompletion;
pub use post_process::{process_response, remove_duplicate_lines};

use crate::error::Result;
use async_trait::async_trait;

/// Trait for the external text-generation boundary.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generate a completion for `prompt` under `system` instructions.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String>;
}
