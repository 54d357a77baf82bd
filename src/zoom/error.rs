use reqwest::StatusCode;

/// Token acquisition failed
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed token response: {0}")]
    InvalidResponse(String),
}

/// Meeting creation failed
#[derive(Debug, thiserror::Error)]
pub enum MeetingCreationError {
    #[error("meeting request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("meeting endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed meeting response: {0}")]
    InvalidResponse(String),
}
