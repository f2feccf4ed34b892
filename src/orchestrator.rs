//! Session orchestration for Spis.
//!
//! Coordinates the fetch-normalize-chunk-recommend pipeline for one user
//! session. Every failure path here degrades to an empty transcript or an
//! apology string; nothing propagates as a fatal error to the surface.

use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::menu::{normalize_markup, split_transcript, Fetcher, HttpFetcher};
use crate::preferences::PreferenceSet;
use crate::recommend::{CompletionService, OpenAiCompletion, RecommendationEngine};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Apology shown when the whole recommendation request fails.
const REQUEST_FAILED_MESSAGE: &str = "Sorry, I couldn't process your request at this time.";

/// The main orchestrator for the Spis pipeline.
pub struct Orchestrator {
    settings: Settings,
    fetcher: Arc<dyn Fetcher>,
    engine: RecommendationEngine,
}

impl Orchestrator {
    /// Create a new orchestrator with default components.
    pub fn new(settings: Settings) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(settings.menu.fetch_timeout_seconds)?);
        let service = Arc::new(OpenAiCompletion::new(&settings.recommendation.model));
        Self::with_components(settings, fetcher, service)
    }

    /// Create an orchestrator with explicit fetcher and completion service.
    pub fn with_components(
        settings: Settings,
        fetcher: Arc<dyn Fetcher>,
        service: Arc<dyn CompletionService>,
    ) -> Result<Self> {
        // Load prompts (with optional custom directory and variables)
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let engine = RecommendationEngine::new(service, prompts, &settings.recommendation);

        Ok(Self {
            settings,
            fetcher,
            engine,
        })
    }

    /// Fetch the menu page and normalize it to a transcript.
    ///
    /// Any fetch error is logged and mapped to an empty transcript.
    #[instrument(skip(self))]
    pub async fn fetch_menu(&self, url: &str) -> String {
        match self.fetcher.fetch(url).await {
            Ok(markup) => {
                let transcript = normalize_markup(&markup);
                info!("Fetched menu: {} characters of transcript", transcript.len());
                transcript
            }
            Err(e) => {
                error!("Error fetching menu: {}", e);
                String::new()
            }
        }
    }

    /// Generate a meal recommendation for a transcript and preference set.
    ///
    /// The structured preferences are flattened to the free-text form the
    /// prompt template expects. Failures degrade to a fixed apology string.
    #[instrument(skip(self, transcript))]
    pub async fn recommend(&self, transcript: &str, preferences: &PreferenceSet) -> String {
        if transcript.is_empty() {
            error!("No menu transcript available for recommendation");
            return REQUEST_FAILED_MESSAGE.to_string();
        }

        let chunks = split_transcript(transcript, self.settings.menu.max_chunk_chars);
        info!("Requesting recommendations across {} chunks", chunks.len());

        self.engine.recommend(&chunks, &preferences.flatten()).await
    }

    /// The configured menu URL.
    pub fn menu_url(&self) -> &str {
        &self.settings.menu.url
    }

    /// The settings this orchestrator was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpisError;
    use async_trait::async_trait;

    struct FixedFetcher {
        result: std::result::Result<String, String>,
    }

    #[async_trait]
    impl Fetcher for FixedFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            self.result
                .clone()
                .map_err(SpisError::Fetch)
        }
    }

    struct EchoService;

    #[async_trait]
    impl CompletionService for EchoService {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String> {
            Ok("Have the salad.".to_string())
        }
    }

    fn orchestrator(fetch: std::result::Result<String, String>) -> Orchestrator {
        Orchestrator::with_components(
            Settings::default(),
            Arc::new(FixedFetcher { result: fetch }),
            Arc::new(EchoService),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_menu_normalizes_markup() {
        let orch = orchestrator(Ok(
            "<html><script>x()</script><body><p>Station A: Pasta</p></body></html>".to_string(),
        ));
        let transcript = orch.fetch_menu("https://example.edu/menu").await;
        assert_eq!(transcript, "Station A: Pasta");
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_transcript() {
        let orch = orchestrator(Err("connection refused".to_string()));
        let transcript = orch.fetch_menu("https://example.edu/menu").await;
        assert_eq!(transcript, "");
    }

    #[tokio::test]
    async fn test_empty_transcript_yields_apology() {
        let orch = orchestrator(Ok(String::new()));
        let prefs = PreferenceSet {
            vegan: true,
            ..Default::default()
        };
        let answer = orch.recommend("", &prefs).await;
        assert_eq!(answer, REQUEST_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_recommend_round_trip() {
        let orch = orchestrator(Ok(String::new()));
        let prefs = PreferenceSet {
            vegan: true,
            ..Default::default()
        };
        let answer = orch
            .recommend("Station A: Pasta. Station B: Salad.", &prefs)
            .await;
        assert_eq!(answer, "Have the salad.");
    }
}
