use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{Credits, GenerateRequest, HealthResponse, MeResponse, VoicesResponse};
use crate::api::routes::AppState;
use crate::auth;
use crate::error::AppError;

pub async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    let identity = state.auth.resolve(auth::bearer_token(&headers)?)?;

    let synthesis = state
        .speech
        .generate(&identity, &request.text, request.tone.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, synthesis.content_type)],
        synthesis.audio,
    )
        .into_response())
}

pub async fn preview(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    let identity = state.auth.resolve(auth::bearer_token(&headers)?)?;

    let synthesis = state
        .speech
        .preview(&identity, &request.text, request.tone.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, synthesis.content_type)],
        synthesis.audio,
    )
        .into_response())
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    let voices = state.speech.voices();
    Json(VoicesResponse {
        default_tone: voices.default_tone().to_string(),
        voices: voices.all().clone(),
    })
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, AppError> {
    let identity = state.auth.resolve(auth::bearer_token(&headers)?)?;
    let account = state.speech.account(&identity).await;

    let credits = if state.speech.plans().rules(account.plan).metered {
        Credits::Remaining(account.credits)
    } else {
        Credits::unlimited()
    };

    Ok(Json(MeResponse {
        plan: account.plan.as_str().to_string(),
        credits,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
