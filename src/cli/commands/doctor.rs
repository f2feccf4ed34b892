//! Doctor command implementation.

use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the doctor command.
pub fn run_doctor(settings: &Settings) -> Result<()> {
    Output::header("Spis Doctor");
    println!();

    let mut all_ok = true;

    // API key
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            Output::success("OPENAI_API_KEY is set");
        }
        _ => {
            all_ok = false;
            Output::error("OPENAI_API_KEY is not set");
            Output::info("Set it with: export OPENAI_API_KEY='sk-...'");
        }
    }

    // Config file
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::success(&format!("Config file found at {}", config_path.display()));
    } else {
        Output::info(&format!(
            "No config file at {} (defaults in use)",
            config_path.display()
        ));
    }

    // Effective settings summary
    Output::header("Settings");
    Output::kv("Menu URL", &settings.menu.url);
    Output::kv("Model", &settings.recommendation.model);
    Output::kv(
        "Max chunk chars",
        &settings.menu.max_chunk_chars.to_string(),
    );
    Output::kv("TTS voice", &settings.speech.voice);

    println!();
    if all_ok {
        Output::success("Everything looks good!");
    } else {
        Output::warning("Some checks failed; see above.");
    }

    Ok(())
}
