//! OpenAI-backed speech I/O.

use super::SpeechIo;
use crate::error::{Result, SpisError};
use crate::openai::create_client;
use async_openai::types::{
    AudioInput, CreateSpeechRequestArgs, CreateTranscriptionRequestArgs, SpeechModel, Voice,
};
use async_trait::async_trait;
use tracing::debug;

/// Speech service backed by the OpenAI audio APIs.
pub struct OpenAiSpeech {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    transcription_model: String,
    tts_model: String,
    voice: String,
}

impl OpenAiSpeech {
    /// Create a new speech service.
    pub fn new(transcription_model: &str, tts_model: &str, voice: &str) -> Self {
        Self {
            client: create_client(),
            transcription_model: transcription_model.to_string(),
            tts_model: tts_model.to_string(),
            voice: voice.to_string(),
        }
    }

    fn speech_model(&self) -> SpeechModel {
        match self.tts_model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    fn speech_voice(&self) -> Voice {
        match self.voice.as_str() {
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }
}

#[async_trait]
impl SpeechIo for OpenAiSpeech {
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        debug!("Transcribing {} bytes of audio", audio.len());

        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(file_name.to_string(), audio))
            .model(&self.transcription_model)
            .build()
            .map_err(|e| SpisError::SpeechUnavailable(e.to_string()))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| SpisError::SpeechUnavailable(e.to_string()))?;

        let text = response.text.trim().to_string();
        if text.is_empty() {
            return Err(SpisError::SpeechUnintelligible);
        }

        Ok(text)
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        debug!("Synthesizing {} characters of text", text.len());

        let request = CreateSpeechRequestArgs::default()
            .input(text)
            .model(self.speech_model())
            .voice(self.speech_voice())
            .build()
            .map_err(|e| SpisError::SpeechUnavailable(e.to_string()))?;

        let response = self
            .client
            .audio()
            .speech(request)
            .await
            .map_err(|e| SpisError::SpeechUnavailable(e.to_string()))?;

        Ok(response.bytes.to_vec())
    }
}
