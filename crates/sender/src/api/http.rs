//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use milkbutton_domain::SenderConfig;
use milkbutton_shared::routes::{CONFIG_PATH, DISCOVER_PATH, HEALTH_PATH, SEND_PATH};
use milkbutton_shared::{SendResponse, SenderConfigPatch};

use crate::app::App;
use crate::use_cases::{ConfigError, SendError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(SEND_PATH, get(send).post(send))
        .route(HEALTH_PATH, get(health))
        .route(CONFIG_PATH, get(get_config).patch(update_config))
        .route(DISCOVER_PATH, post(discover))
}

async fn health() -> &'static str {
    "OK"
}

async fn send(State(app): State<Arc<App>>) -> Result<Json<SendResponse>, ApiError> {
    app.send.execute().await?;
    Ok(Json(SendResponse::success()))
}

// =============================================================================
// Config
// =============================================================================

async fn get_config(State(app): State<Arc<App>>) -> Json<SenderConfig> {
    Json(app.config.get())
}

async fn update_config(
    State(app): State<Arc<App>>,
    payload: Result<Json<SenderConfigPatch>, JsonRejection>,
) -> Result<Json<SenderConfig>, ApiError> {
    let Json(patch) = payload?;
    Ok(Json(app.config.update(patch).await?))
}

async fn discover(State(app): State<Arc<App>>) -> Result<Json<SenderConfig>, ApiError> {
    Ok(Json(app.config.rediscover().await?))
}

/// Failures carry a `{ok: false, error}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(SendResponse::failure(msg))).into_response()
    }
}

impl From<SendError> for ApiError {
    fn from(e: SendError) -> Self {
        match e {
            SendError::NoServer | SendError::NoFiles => ApiError::BadRequest(e.to_string()),
            SendError::Upstream(_) => ApiError::BadGateway(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Unreachable | ConfigError::NoFilesOnPlayer => {
                ApiError::BadRequest(e.to_string())
            }
            ConfigError::NotFound => ApiError::NotFound(e.to_string()),
            ConfigError::Store(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
