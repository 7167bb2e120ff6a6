//! Postback endpoint handlers.
//!
//! The postback endpoint always answers `200 OK` once the request reaches
//! it. Signhost retries any postback that is not acknowledged, so rejected
//! or malformed postbacks are only reported in the logs.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::postback::processor::{LoggingProcessor, PostbackProcessor};
use crate::postback::validation::{validate, PostbackPayload, ValidationError};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub processor: Arc<dyn PostbackProcessor>,
}

impl AppState {
    pub fn new(config: Config, processor: Arc<dyn PostbackProcessor>) -> Self {
        Self {
            config: Arc::new(config),
            processor,
        }
    }

    /// State with the default [`LoggingProcessor`].
    pub fn with_logging_processor(config: Config) -> Self {
        Self::new(config, Arc::new(LoggingProcessor))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/postback", post(postback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Postback
// =============================================================================

/// How a postback was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostbackOutcome {
    /// Body was not a valid postback JSON document.
    Malformed { error: String },
    /// Decoded but failed validation.
    Rejected {
        transaction_id: String,
        errors: Vec<ValidationError>,
    },
    /// Passed validation and was handed to the processor.
    Accepted { transaction_id: String },
}

/// Postback webhook endpoint.
///
/// Only `POST` is routed here; other methods get `405` from the router.
pub async fn postback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    // A missing header compares as empty. Opaque bytes are compared as-is,
    // with invalid UTF-8 replaced.
    let auth_header = headers
        .get(AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
        .unwrap_or_default();

    // Oversized or unreadable bodies are still acknowledged.
    match body {
        Ok(body) => {
            receive_postback(&state, &auth_header, &body).await;
        }
        Err(rejection) => {
            warn!(
                error = %rejection,
                rejection_status = rejection.status().as_u16(),
                "postback_malformed"
            );
        }
    }

    (StatusCode::OK, "OK")
}

/// Decode, validate and dispatch a postback body.
pub async fn receive_postback(state: &AppState, auth_header: &str, body: &[u8]) -> PostbackOutcome {
    info!(
        body_length = body.len(),
        has_authorization = !auth_header.is_empty(),
        "postback_received"
    );

    // Only the first JSON value is read; trailing bytes are ignored.
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let payload = match PostbackPayload::deserialize(&mut deserializer) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "postback_malformed");
            return PostbackOutcome::Malformed {
                error: e.to_string(),
            };
        }
    };

    let validation = validate(
        &payload,
        auth_header,
        &state.config.expected_auth_header,
        &state.config.shared_secret,
    );

    if !validation.is_valid() {
        warn!(
            transaction_id = %payload.id,
            errors = ?validation.error_messages(),
            "postback_rejected"
        );
        return PostbackOutcome::Rejected {
            transaction_id: payload.id,
            errors: validation.errors,
        };
    }

    info!(
        transaction_id = %payload.id,
        status = payload.status_code(),
        "postback_accepted"
    );

    if let Err(e) = state.processor.process(&payload).await {
        error!(transaction_id = %payload.id, error = %e, "postback_processing_failed");
    }

    PostbackOutcome::Accepted {
        transaction_id: payload.id,
    }
}
