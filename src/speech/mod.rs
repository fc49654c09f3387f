pub mod provider;
pub mod voice;

use std::sync::Arc;

use crate::account::{AccountStore, PlanTable};
use crate::error::AppError;
use crate::normalize::{self, Locale};

pub use provider::{ElevenLabsProvider, SpeechProvider, Synthesis};
pub use voice::VoiceMap;

pub struct SpeechService {
    store: Arc<dyn AccountStore>,
    provider: Arc<dyn SpeechProvider>,
    voices: VoiceMap,
    plans: PlanTable,
    locale: Locale,
}

impl SpeechService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        provider: Arc<dyn SpeechProvider>,
        voices: VoiceMap,
        plans: PlanTable,
        locale: Locale,
    ) -> Self {
        Self {
            store,
            provider,
            voices,
            plans,
            locale,
        }
    }

    pub fn voices(&self) -> &VoiceMap {
        &self.voices
    }

    pub fn plans(&self) -> &PlanTable {
        &self.plans
    }

    pub async fn account(&self, identity: &str) -> crate::account::Account {
        self.store.get_or_create(identity).await
    }

    /// Full metered pipeline. The debit runs only after the provider call
    /// succeeded; any earlier failure leaves the account untouched.
    pub async fn generate(
        &self,
        identity: &str,
        text: &str,
        tone: Option<&str>,
    ) -> Result<Synthesis, AppError> {
        let (synthesis, plan) = self.synthesize(identity, text, tone).await?;

        if self.plans.rules(plan).metered {
            // Conditional debit; a concurrent request may have spent the
            // last credit after our validation passed.
            self.store.debit(identity).await?;
        }

        tracing::info!(identity, chars = text.chars().count(), "generated audio");
        Ok(synthesis)
    }

    /// Same validation as generate, never debits.
    pub async fn preview(
        &self,
        identity: &str,
        text: &str,
        tone: Option<&str>,
    ) -> Result<Synthesis, AppError> {
        let (synthesis, _) = self.synthesize(identity, text, tone).await?;
        Ok(synthesis)
    }

    async fn synthesize(
        &self,
        identity: &str,
        text: &str,
        tone: Option<&str>,
    ) -> Result<(Synthesis, crate::account::Plan), AppError> {
        // 1. Account (created on first contact)
        let account = self.store.get_or_create(identity).await;

        // 2. Resolve tone
        let tone = tone.unwrap_or_else(|| self.voices.default_tone());
        let voice_id = self.voices.resolve(tone)?;

        // 3. Plan limits (length measured pre-normalization)
        self.plans.validate(&account, text, tone)?;

        // 4. Currency normalization
        let spoken = normalize::normalize(text, self.locale);

        // 5. Provider call
        let synthesis = self.provider.synthesize(&spoken, voice_id).await?;
        Ok((synthesis, account.plan))
    }
}
