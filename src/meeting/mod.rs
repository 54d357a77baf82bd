//! Meeting domain types
//!
//! Everything here is request-scoped and built from validated caller input:
//! - `MeetingDuration` - the only caller-influenced value, checked against a fixed allow-list
//! - `MeetingConfig` - the fixed scheduled-meeting template sent to the provider
//! - `MeetingResult` - identifiers and URLs relayed back to the caller

mod duration;
mod types;

pub use duration::{MeetingDuration, ValidationError, ALLOWED_DURATIONS};
pub use types::{MeetingConfig, MeetingId, MeetingResult, MeetingSettings, SCHEDULED_MEETING};
