//! Prompt templates for Spis.
//!
//! Prompts can be customized by placing TOML files in the custom prompts
//! directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub recommendation: RecommendationPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// Prompts for meal recommendation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPrompts {
    pub system: String,
    pub user: String,
}

impl Default for RecommendationPrompts {
    fn default() -> Self {
        Self {
            system: "You are a helpful assistant.".to_string(),

            user: r#"You are a friendly and humorous AI dining assistant named "Spis", tasked with helping students at a dining center customize their meals.
The current time is {{current_time}}.
The following is the dining center menu content: {{menu}}

Please follow these instructions carefully:

1. **Understand the Meal Requirements:** Based on the user's request: {{preferences}},
   extract relevant meal options. Consider dietary preferences (e.g., vegan, gluten-free, high-protein).

2. **Extract Relevant Information:** List available dishes that match the user's preferences,
   including the food station and any relevant timing details since there is time for breakfast, lunch, and dinner. Remember to tell the user the time they are closing.

3. **Format Your Response:** Present meal recommendations clearly, categorizing them by station
   (e.g., Grillin' Station, Verdant & Vegan, World of Flavor). Use emoji where appropriate.

4. **Handle Missing Information:** If specific requests cannot be found, suggest alternatives or provide general meal options.

5. **Add Humor:** Include a light-hearted joke or pun related to food or the user's preferences.

Remember to maintain a friendly and engaging tone throughout your response!
Most importantly, keep your answer reasonably concise: it may be read aloud by a text-to-speech model and should take no more than 30 seconds of audio."#.to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory
    /// and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        // Store custom variables
        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            // Load recommendation prompts if file exists
            let recommendation_path = custom_path.join("recommendation.toml");
            if recommendation_path.exists() {
                let content = std::fs::read_to_string(&recommendation_path)?;
                prompts.recommendation = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config
    /// variables. Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        // Start with custom variables, then override with provided vars
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
