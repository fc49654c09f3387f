use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppError;

/// Audio bytes as returned by the provider, passed through unmodified.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub audio: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Synthesis, AppError>;
}

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

pub struct ElevenLabsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Synthesis, AppError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);
        let body = SynthesisBody {
            text,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.5,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await?.to_vec();

        Ok(Synthesis {
            audio,
            content_type,
        })
    }
}
