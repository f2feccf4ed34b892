//! Recommend command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::menu::normalize_markup;
use crate::orchestrator::Orchestrator;
use crate::preferences::PreferenceSet;
use crate::speech::{OpenAiSpeech, SpeechIo};
use anyhow::Result;

/// Options collected from the recommend subcommand flags.
pub struct RecommendOptions {
    pub vegan: bool,
    pub athlete: bool,
    pub gluten_free: bool,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub url: Option<String>,
    pub input: Option<String>,
    pub speak: Option<String>,
}

/// Run the recommend command.
pub async fn run_recommend(opts: RecommendOptions, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Recommend) {
        Output::error(&format!("{}", e));
        Output::info("Run 'spis doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let preferences = PreferenceSet {
        vegan: opts.vegan,
        athlete: opts.athlete,
        gluten_free: opts.gluten_free,
        allergies: opts.allergies.is_some(),
        allergy_list: opts.allergies.unwrap_or_default(),
        notes: opts.notes.unwrap_or_default(),
    };

    if preferences.is_empty() {
        Output::warning("Please select at least one preference or add a custom request.");
        return Ok(());
    }

    let url = opts.url.unwrap_or_else(|| settings.menu.url.clone());
    let speech_settings = settings.speech.clone();
    let orchestrator = Orchestrator::new(settings)?;

    // Menu markup comes from a file or from the live page; either way it
    // goes through the same normalization.
    let transcript = match opts.input {
        Some(path) => {
            let markup = std::fs::read_to_string(&path)?;
            normalize_markup(&markup)
        }
        None => {
            let spinner = Output::spinner("Fetching the latest menu... This might take a moment!");
            let transcript = orchestrator.fetch_menu(&url).await;
            spinner.finish_and_clear();
            transcript
        }
    };

    if transcript.is_empty() {
        Output::error("Could not fetch the menu. Check the URL and your connection.");
        return Ok(());
    }
    Output::success("Menu fetched successfully!");

    let spinner = Output::spinner("Cooking up your personalized menu...");
    let recommendation = orchestrator.recommend(&transcript, &preferences).await;
    spinner.finish_and_clear();

    Output::header("Your Personalized Menu");
    println!("\n{}\n", recommendation);

    if let Some(audio_path) = opts.speak {
        if let Err(e) = preflight::check(Operation::Speak) {
            Output::error(&format!("{}", e));
            return Ok(());
        }

        let speech = OpenAiSpeech::new(
            &speech_settings.transcription_model,
            &speech_settings.tts_model,
            &speech_settings.voice,
        );

        let spinner = Output::spinner("Synthesizing audio...");
        match speech.synthesize(&recommendation).await {
            Ok(bytes) => {
                spinner.finish_and_clear();
                std::fs::write(&audio_path, bytes)?;
                Output::success(&format!("Audio written to {}", audio_path));
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Speech synthesis failed: {}", e));
            }
        }
    }

    Ok(())
}
