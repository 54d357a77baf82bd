//! Video-conferencing provider adapters
//!
//! Two independent stages, each one outbound call:
//! - `TokenProvider` - OAuth2 account-credentials grant, yields a bearer token
//! - `MeetingCreator` - books a scheduled meeting with that token
//!
//! Tokens are fetched per request and never cached.

mod error;
mod meeting;
mod token;

pub use error::{AuthError, MeetingCreationError};
pub use meeting::ZoomMeetingCreator;
pub use token::OAuthTokenProvider;

use crate::meeting::{MeetingConfig, MeetingResult};
use secrecy::{ExposeSecret, SecretString};

/// Short-lived bearer token, owned by a single request
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Obtains a bearer token for the provider API
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, AuthError>;
}

/// Creates one scheduled meeting per call (not idempotent)
#[async_trait::async_trait]
pub trait MeetingCreator: Send + Sync {
    async fn create_meeting(
        &self,
        config: &MeetingConfig,
        token: &AccessToken,
    ) -> Result<MeetingResult, MeetingCreationError>;
}
