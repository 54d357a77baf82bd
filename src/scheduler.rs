//! Ordered token -> meeting pipeline
//!
//! Each stage returns a typed error; a failed token fetch ends the pipeline
//! before any meeting is created.

use crate::meeting::{MeetingConfig, MeetingDuration, MeetingResult};
use crate::zoom::{AuthError, MeetingCreationError, MeetingCreator, TokenProvider};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("meeting creation failed: {0}")]
    Creation(#[from] MeetingCreationError),
}

/// Books one scheduled meeting per call using a fresh access token
#[derive(Clone)]
pub struct MeetingScheduler {
    tokens: Arc<dyn TokenProvider>,
    meetings: Arc<dyn MeetingCreator>,
}

impl MeetingScheduler {
    pub fn new(tokens: Arc<dyn TokenProvider>, meetings: Arc<dyn MeetingCreator>) -> Self {
        Self { tokens, meetings }
    }

    pub async fn schedule(&self, duration: MeetingDuration) -> Result<MeetingResult, ScheduleError> {
        let token = self.tokens.access_token().await?;

        let config = MeetingConfig::scheduled(duration);
        let result = self.meetings.create_meeting(&config, &token).await?;

        info!("Created meeting {} ({})", result.meeting_id, duration);

        Ok(result)
    }
}
