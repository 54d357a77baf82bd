use super::MeetingDuration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider meeting type code for a scheduled meeting
pub const SCHEDULED_MEETING: u8 = 2;

/// Fixed template for the meetings this service books.
///
/// Only `duration` comes from the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingConfig {
    pub topic: String,

    #[serde(rename = "type")]
    pub meeting_type: u8,

    pub duration: MeetingDuration,

    pub timezone: String,

    pub settings: MeetingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,

    /// Only the host may start the call
    pub join_before_host: bool,

    pub mute_upon_entry: bool,
}

impl MeetingConfig {
    pub fn scheduled(duration: MeetingDuration) -> Self {
        Self {
            topic: "Consultancy Video Call".to_string(),
            meeting_type: SCHEDULED_MEETING,
            duration,
            timezone: "UTC".to_string(),
            settings: MeetingSettings {
                host_video: true,
                participant_video: true,
                join_before_host: false,
                mute_upon_entry: true,
            },
        }
    }
}

/// Provider meeting identifier, echoed back exactly as received.
///
/// Numbers are kept as `serde_json::Number` so ids beyond `i64` pass through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeetingId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetingId::Number(id) => write!(f, "{}", id),
            MeetingId::Text(id) => f.write_str(id),
        }
    }
}

/// A created meeting, as relayed to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingResult {
    pub meeting_id: MeetingId,

    /// Host link (starts the meeting)
    pub start_url: String,

    /// Participant link
    pub join_url: String,
}
