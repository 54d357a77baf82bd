//! HTTP API server
//!
//! - POST /create-meeting - Book a scheduled video meeting
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{CreateMeetingResponse, ErrorResponse, MEETING_ERROR_MESSAGE};
pub use routes::create_router;
pub use state::AppState;
