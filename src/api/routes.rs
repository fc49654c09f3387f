use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::auth::Authenticator;
use crate::speech::SpeechService;

pub struct AppState {
    pub speech: SpeechService,
    pub auth: Arc<dyn Authenticator>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        .route("/audio/generate", post(handlers::generate))
        .route("/audio/preview", post(handlers::preview))
        .route("/voices", get(handlers::list_voices))
        .route("/me", get(handlers::me))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
