use super::state::AppState;
use crate::meeting::{MeetingDuration, MeetingId, MeetingResult};
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

/// Caller-facing message for any downstream failure. Provider detail is only logged.
pub const MEETING_ERROR_MESSAGE: &str = "Error creating Zoom meeting";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMeetingResponse {
    pub meeting_id: MeetingId,

    /// Host link
    pub start_url: String,

    /// Participant link
    pub join_url: String,
}

impl From<MeetingResult> for CreateMeetingResponse {
    fn from(result: MeetingResult) -> Self {
        Self {
            meeting_id: result.meeting_id,
            start_url: result.start_url,
            join_url: result.join_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// `application/json` or any `application/*+json`, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /create-meeting
/// Validate `{"duration": <minutes>}` then book a meeting with a fresh token.
///
/// The body is read raw so malformed JSON, a non-JSON content type and a
/// missing field all get the same 400 as an out-of-range duration. A body sent
/// without a JSON content type is never parsed.
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn create_meeting(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let payload: Value = if is_json_content_type(&headers) {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    } else {
        Value::Null
    };

    let duration = match MeetingDuration::from_body(&payload) {
        Ok(duration) => duration,
        Err(e) => {
            warn!("Rejected meeting request: {:?}", e);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    info!("Creating {} meeting", duration);

    match state.scheduler.schedule(duration).await {
        Ok(result) => {
            (StatusCode::OK, Json(CreateMeetingResponse::from(result))).into_response()
        }
        Err(e) => {
            error!("Error creating meeting: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MEETING_ERROR_MESSAGE)
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
