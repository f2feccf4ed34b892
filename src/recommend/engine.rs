//! Recommendation engine.
//!
//! Processes transcript chunks sequentially: one rendered prompt and one
//! completion call per chunk, with per-chunk failures downgraded to visible
//! placeholders so a single bad call never sinks the whole batch.

use super::{post_process, CompletionService};
use crate::config::{Prompts, RecommendationSettings};
use chrono::{Local, NaiveTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Engine that turns menu chunks plus a preference string into a single
/// recommendation.
pub struct RecommendationEngine {
    service: Arc<dyn CompletionService>,
    prompts: Prompts,
    max_tokens: u32,
    temperature: f32,
    include_time: bool,
}

impl RecommendationEngine {
    /// Create a new recommendation engine.
    pub fn new(
        service: Arc<dyn CompletionService>,
        prompts: Prompts,
        settings: &RecommendationSettings,
    ) -> Self {
        Self {
            service,
            prompts,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            include_time: settings.include_time,
        }
    }

    /// Generate the final recommendation for the given chunks.
    ///
    /// Per-chunk results are joined with a blank line and then deduplicated
    /// line-wise, keeping the first occurrence of each distinct line.
    #[instrument(skip(self, chunks), fields(chunks = chunks.len()))]
    pub async fn recommend(&self, chunks: &[String], preferences: &str) -> String {
        let segments = self.recommend_segments(chunks, preferences).await;
        let combined = segments.join("\n\n");
        post_process::remove_duplicate_lines(&combined)
    }

    /// Process every chunk in sequence order and return one segment per
    /// chunk, before reconciliation.
    ///
    /// A failed completion call yields a placeholder segment naming the
    /// error; no chunk is skipped and no retry is attempted.
    pub async fn recommend_segments(&self, chunks: &[String], preferences: &str) -> Vec<String> {
        let total = chunks.len();
        let mut segments = Vec::with_capacity(total);

        for (i, chunk) in chunks.iter().enumerate() {
            let prompt = self.render_prompt(chunk, preferences);

            let segment = match self
                .service
                .complete(
                    &self.prompts.recommendation.system,
                    &prompt,
                    self.max_tokens,
                    self.temperature,
                )
                .await
            {
                Ok(raw) => post_process::process_response(&raw),
                Err(e) => {
                    warn!("Chunk {} of {} failed: {}", i + 1, total, e);
                    format!("Unable to process this part of the menu due to an error: {}", e)
                }
            };

            segments.push(segment);
            info!("Processed chunk {} of {}", i + 1, total);
        }

        segments
    }

    /// Render the user prompt for one chunk.
    fn render_prompt(&self, chunk: &str, preferences: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("menu".to_string(), chunk.to_string());
        vars.insert("preferences".to_string(), preferences.to_string());
        vars.insert(
            "current_time".to_string(),
            if self.include_time {
                current_time_string()
            } else {
                "unknown".to_string()
            },
        );

        self.prompts
            .render_with_custom(&self.prompts.recommendation.user, &vars)
    }
}

/// The current local time as a 12-hour clock string, e.g. "2:05 PM".
pub fn current_time_string() -> String {
    format_clock(Local::now().time())
}

fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SpisError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Completion service that replays a scripted sequence of outcomes.
    struct ScriptedService {
        responses: Mutex<VecDeque<Result<String>>>,
        prompts_seen: Mutex<Vec<String>>,
    }

    impl ScriptedService {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedService {
        async fn complete(
            &self,
            _system: &str,
            prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String> {
            self.prompts_seen.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(SpisError::Recommendation("script exhausted".to_string())))
        }
    }

    fn engine_with(service: ScriptedService) -> (RecommendationEngine, Arc<ScriptedService>) {
        let service = Arc::new(service);
        let engine = RecommendationEngine::new(
            service.clone(),
            Prompts::default(),
            &RecommendationSettings::default(),
        );
        (engine, service)
    }

    #[tokio::test]
    async fn test_single_chunk_end_to_end() {
        let (engine, service) = engine_with(ScriptedService::new(vec![Ok(
            "try the pasta at Station A".to_string(),
        )]));

        let chunks = vec!["Station A: Pasta. Station B: Salad.".to_string()];
        let result = engine.recommend(&chunks, "vegan").await;

        assert_eq!(result, "Try the pasta at Station A.");

        // The prompt carried both the chunk and the preferences.
        let prompts = service.prompts_seen.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Station A: Pasta"));
        assert!(prompts[0].contains("vegan"));
    }

    #[tokio::test]
    async fn test_failed_chunk_yields_placeholder_segment() {
        let (engine, _service) = engine_with(ScriptedService::new(vec![
            Ok("first part looks great.".to_string()),
            Err(SpisError::OpenAI("rate limited".to_string())),
            Ok("third part also fine.".to_string()),
        ]));

        let chunks = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let segments = engine.recommend_segments(&chunks, "gluten_free").await;

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "First part looks great.");
        assert!(segments[1].starts_with("Unable to process this part of the menu"));
        assert!(segments[1].contains("rate limited"));
        assert_eq!(segments[2], "Third part also fine.");
    }

    #[tokio::test]
    async fn test_duplicate_lines_across_chunks_are_removed() {
        let (engine, _service) = engine_with(ScriptedService::new(vec![
            Ok("The Grill closes at 8 PM.\nBurgers available.".to_string()),
            Ok("The Grill closes at 8 PM.\nFries available.".to_string()),
        ]));

        let chunks = vec!["x".to_string(), "y".to_string()];
        let result = engine.recommend(&chunks, "athlete").await;

        assert_eq!(
            result,
            "The Grill closes at 8 PM.\nBurgers available.\n\nFries available."
        );
    }

    #[tokio::test]
    async fn test_no_chunks_means_empty_answer() {
        let (engine, _service) = engine_with(ScriptedService::new(vec![]));
        let result = engine.recommend(&[], "vegan").await;
        assert_eq!(result, "");
    }

    #[test]
    fn test_clock_formatting() {
        let afternoon = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(format_clock(afternoon), "2:05 PM");

        let morning = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(format_clock(morning), "9:30 AM");
    }
}
