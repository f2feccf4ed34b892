//! Speech I/O boundary.
//!
//! Spoken preferences come in as audio and go out as synthesized
//! recommendations; both directions are black-box service calls. The only
//! logic that lives here is the failure taxonomy: audio the service could
//! not make sense of reads differently to the user than the service being
//! down.

mod openai;

pub use openai::OpenAiSpeech;

use crate::error::{Result, SpisError};
use async_trait::async_trait;

/// User-facing message for audio the service could not understand.
pub const MSG_UNINTELLIGIBLE: &str =
    "Sorry, I couldn't understand that. Could you try speaking again?";

/// User-facing message for a speech service outage.
pub const MSG_SERVICE_UNAVAILABLE: &str =
    "Sorry, the speech service is unavailable right now. Please type your request instead.";

/// Trait for the speech-to-text and text-to-speech boundary.
#[async_trait]
pub trait SpeechIo: Send + Sync {
    /// Transcribe recorded audio bytes into text.
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String>;

    /// Synthesize text into audio bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}

/// Map a transcription outcome to what the user should see.
///
/// Success passes the transcript through; failures degrade to a message
/// instead of propagating.
pub fn transcription_message(outcome: Result<String>) -> String {
    match outcome {
        Ok(text) => text,
        Err(SpisError::SpeechUnintelligible) => MSG_UNINTELLIGIBLE.to_string(),
        Err(_) => MSG_SERVICE_UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_transcript_through() {
        let msg = transcription_message(Ok("vegan options please".to_string()));
        assert_eq!(msg, "vegan options please");
    }

    #[test]
    fn test_unintelligible_audio_message() {
        let msg = transcription_message(Err(SpisError::SpeechUnintelligible));
        assert_eq!(msg, MSG_UNINTELLIGIBLE);
    }

    #[test]
    fn test_service_outage_message() {
        let msg =
            transcription_message(Err(SpisError::SpeechUnavailable("timeout".to_string())));
        assert_eq!(msg, MSG_SERVICE_UNAVAILABLE);
    }
}
