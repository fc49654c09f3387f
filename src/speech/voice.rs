use std::collections::BTreeMap;

use crate::error::AppError;

/// Immutable tone label -> provider voice id mapping, fixed at startup.
#[derive(Debug, Clone)]
pub struct VoiceMap {
    voices: BTreeMap<String, String>,
    default_tone: String,
}

impl VoiceMap {
    pub fn new(voices: BTreeMap<String, String>, default_tone: impl Into<String>) -> Self {
        let default_tone = default_tone.into();
        debug_assert!(voices.contains_key(&default_tone));
        Self {
            voices,
            default_tone,
        }
    }

    pub fn default_tone(&self) -> &str {
        &self.default_tone
    }

    pub fn resolve(&self, tone: &str) -> Result<&str, AppError> {
        self.voices
            .get(tone)
            .map(String::as_str)
            .ok_or_else(|| AppError::UnknownVoice(tone.to_string()))
    }

    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.voices
    }
}

impl Default for VoiceMap {
    fn default() -> Self {
        let voices = BTreeMap::from([
            ("neutral".to_string(), "EXAVITQu4vr4xnSDxMaL".to_string()),
            ("friendly".to_string(), "21m00Tcm4TlvDq8ikWAM".to_string()),
            ("serious".to_string(), "TxGEqnHWrfWFTfGW9XjX".to_string()),
            ("dramatic".to_string(), "VR6AewLTigWG4xSOukaG".to_string()),
            ("whisper".to_string(), "pNInz6obpgDQGcFmaJgB".to_string()),
        ]);
        Self::new(voices, "neutral")
    }
}
