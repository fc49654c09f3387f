pub mod handlers;
pub mod routes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub default_tone: String,
    pub voices: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub plan: String,
    pub credits: Credits,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Credits {
    Remaining(u32),
    Unlimited(&'static str),
}

impl Credits {
    pub fn unlimited() -> Self {
        Credits::Unlimited("unlimited")
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
