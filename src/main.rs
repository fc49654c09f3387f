use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod account;
mod api;
mod auth;
mod error;
mod normalize;
mod speech;

use account::{InMemoryAccountStore, PlanTable};
use api::routes::{create_router, AppState};
use auth::OpaqueTokenAuthenticator;
use normalize::Locale;
use speech::{ElevenLabsProvider, SpeechService, VoiceMap};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a number");
    let api_key =
        std::env::var("ELEVENLABS_API_KEY").expect("ELEVENLABS_API_KEY must be set");
    let provider_url = std::env::var("PROVIDER_URL")
        .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string());
    let starting_credits: u32 = std::env::var("STARTING_CREDITS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .expect("STARTING_CREDITS must be a number");

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("TTS Proxy Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Provider endpoint: {}", provider_url);

    // Wire the metered speech pipeline
    let provider = ElevenLabsProvider::new(reqwest::Client::new(), provider_url, api_key);
    let speech = SpeechService::new(
        Arc::new(InMemoryAccountStore::new(starting_credits)),
        Arc::new(provider),
        VoiceMap::default(),
        PlanTable::default(),
        Locale::PtBr,
    );

    let state = Arc::new(AppState {
        speech,
        auth: Arc::new(OpaqueTokenAuthenticator),
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
