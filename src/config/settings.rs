//! Configuration settings for Spis.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub menu: MenuSettings,
    pub recommendation: RecommendationSettings,
    pub speech: SpeechSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Menu fetching and preparation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Dining-center menu page URL.
    pub url: String,
    /// Maximum characters per transcript chunk sent to the model.
    pub max_chunk_chars: usize,
    /// HTTP timeout for fetching the menu page, in seconds.
    pub fetch_timeout_seconds: u64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            url: "https://dash.swarthmore.edu/menu/dining-center".to_string(),
            max_chunk_chars: 6000,
            fetch_timeout_seconds: 30,
        }
    }
}

/// Recommendation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Chat model for recommendation generation.
    pub model: String,
    /// Maximum output tokens per chunk response.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Include the current wall-clock time in the prompt so the model can
    /// pick the right meal period.
    pub include_time: bool,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            include_time: true,
        }
    }
}

/// Speech I/O settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Transcription model for spoken preferences.
    pub transcription_model: String,
    /// Text-to-speech model for reading recommendations aloud.
    pub tts_model: String,
    /// Text-to-speech voice.
    pub voice: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            transcription_model: "whisper-1".to_string(),
            tts_model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SpisError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spis")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let settings = Settings::default();
        assert!(settings.menu.url.starts_with("https://"));
        assert!(settings.menu.max_chunk_chars > 0);
        assert_eq!(settings.recommendation.max_tokens, 1000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [recommendation]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();
        assert_eq!(settings.recommendation.model, "gpt-4o-mini");
        assert_eq!(settings.recommendation.max_tokens, 1000);
        assert_eq!(settings.menu.max_chunk_chars, 6000);
    }
}
