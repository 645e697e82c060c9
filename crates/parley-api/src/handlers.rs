//! Route handler functions for all API endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::page;
use crate::state::AppState;

/// Body returned by `GET /`.
pub const INDEX_TEXT: &str = "this is my first url.";

// =============================================================================
// Query parameter types
// =============================================================================

/// Name of the query parameter carrying the user's message.
pub const USER_MESSAGE_PARAM: &str = "userMessage";

/// Raw query pairs for `GET /response`. A repeated key is allowed; the last
/// occurrence wins.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ResponseParams(pub Vec<(String, String)>);

impl ResponseParams {
    pub fn user_message(&self) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == USER_MESSAGE_PARAM)
            .map(|(_, value)| value.as_str())
    }
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub statements: u64,
    pub trained: bool,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - fixed confirmation text; the request is ignored.
pub async fn index() -> &'static str {
    INDEX_TEXT
}

/// GET /specific - the chat page.
pub async fn specific(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(&state.config.general.bot_name))
}

/// GET /response - forward `userMessage` to the engine and return its reply
/// as plain text.
pub async fn get_response(
    State(state): State<AppState>,
    params: Result<Query<ResponseParams>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;
    let message = params
        .user_message()
        .ok_or_else(|| ApiError::BadRequest("Parameter 'userMessage' is required".to_string()))?
        .to_string();

    if message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Parameter 'userMessage' must not be empty".to_string(),
        ));
    }

    // Matching scans the whole store; keep it off the async workers.
    let engine = state.engine.clone();
    let reply = tokio::task::spawn_blocking(move || engine.get_response(&message))
        .await
        .map_err(|e| ApiError::Internal(format!("Response task failed: {}", e)))??;

    tracing::debug!(
        confidence = reply.confidence,
        default = reply.is_default(),
        "Reply sent"
    );

    Ok(reply.text)
}

/// GET /health - liveness plus engine status.
///
/// A store that cannot be read reports `degraded` with 503.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, statements) = match state.engine.statement_count() {
        Ok(0) => (StatusCode::OK, "untrained", 0),
        Ok(count) => (StatusCode::OK, "healthy", count as u64),
        Err(e) => {
            tracing::warn!(error = %e, "Engine store unreadable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", 0)
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        statements,
        trained: statements > 0,
    };
    (code, Json(body))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ResponseParams {
        ResponseParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_user_message_last_occurrence_wins() {
        let p = params(&[("userMessage", "a"), ("x", "y"), ("userMessage", "b")]);
        assert_eq!(p.user_message(), Some("b"));
    }

    #[test]
    fn test_user_message_missing() {
        assert_eq!(params(&[("usermessage", "a")]).user_message(), None);
        assert_eq!(ResponseParams::default().user_message(), None);
    }
}
