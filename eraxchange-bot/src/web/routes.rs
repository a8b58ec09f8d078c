//! Router and request handlers.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use rate_resolver::RateResolver;
use serde_json::Value;
use std::sync::Arc;
use teloxide::types::Update;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument, warn};

use super::exchange::{parse_exchange_request, ErrorResponse, ExchangeResponse};
use super::MSG_BAD_FORMAT;
use crate::chain::HandlerChain;
use crate::telegram::dispatch_update;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Shared state for all routes.
pub struct AppState {
    pub resolver: RateResolver,
    pub chain: HandlerChain,
    /// Webhook path segment; only `POST /{bot_token}` is accepted as a Telegram update.
    pub bot_token: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/exchange", post(exchange))
        .route("/{token}", post(webhook))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> &'static str {
    "ok"
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

#[instrument(skip(state, payload))]
async fn exchange(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected exchange request body");
            return bad_request(MSG_BAD_FORMAT);
        }
    };

    let request = match parse_exchange_request(&body) {
        Ok(r) => r,
        Err(message) => {
            debug!(body = %body, reason = message, "Invalid exchange request");
            return bad_request(message);
        }
    };

    match state
        .resolver
        .convert(request.amount.value(), &request.from, &request.to)
        .await
    {
        Ok(conversion) => {
            info!(
                from = %conversion.from,
                to = %conversion.to,
                rate = conversion.rate,
                "Exchange computed"
            );
            Json(ExchangeResponse::from(conversion)).into_response()
        }
        Err(e) => {
            error!(error = %e, kind = %e.kind(), "Exchange failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.user_message())),
            )
                .into_response()
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

#[instrument(skip_all)]
async fn webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if token != state.bot_token {
        return StatusCode::NOT_FOUND;
    }
    if !is_json(&headers) {
        warn!("Webhook request without JSON content type");
        return StatusCode::FORBIDDEN;
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(u) => u,
        Err(e) => {
            warn!(error = %e, "Could not decode Telegram update");
            return StatusCode::BAD_REQUEST;
        }
    };

    dispatch_update(&state.chain, update).await;
    StatusCode::OK
}
