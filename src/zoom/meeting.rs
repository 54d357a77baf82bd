use super::{AccessToken, MeetingCreationError, MeetingCreator};
use crate::meeting::{MeetingConfig, MeetingId, MeetingResult};
use serde::Deserialize;
use tracing::{debug, error};

/// Subset of the provider's meeting object we relay
#[derive(Debug, Deserialize)]
struct MeetingResponse {
    id: MeetingId,
    start_url: String,
    join_url: String,
}

/// Books meetings for the token's own user (`/users/me/meetings`)
pub struct ZoomMeetingCreator {
    http: reqwest::Client,
    meetings_url: String,
}

impl ZoomMeetingCreator {
    pub fn new(http: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http,
            meetings_url: format!("{}/users/me/meetings", api_base_url.trim_end_matches('/')),
        }
    }

    async fn post_meeting(
        &self,
        config: &MeetingConfig,
        token: &AccessToken,
    ) -> Result<MeetingResult, MeetingCreationError> {
        let response = self
            .http
            .post(&self.meetings_url)
            .bearer_auth(token.expose())
            .json(config)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MeetingCreationError::Status { status, body });
        }

        let meeting: MeetingResponse = serde_json::from_str(&body)
            .map_err(|e| MeetingCreationError::InvalidResponse(e.to_string()))?;

        if meeting.start_url.is_empty() || meeting.join_url.is_empty() {
            return Err(MeetingCreationError::InvalidResponse(format!(
                "meeting {} is missing start_url or join_url",
                meeting.id
            )));
        }

        Ok(MeetingResult {
            meeting_id: meeting.id,
            start_url: meeting.start_url,
            join_url: meeting.join_url,
        })
    }
}

#[async_trait::async_trait]
impl MeetingCreator for ZoomMeetingCreator {
    async fn create_meeting(
        &self,
        config: &MeetingConfig,
        token: &AccessToken,
    ) -> Result<MeetingResult, MeetingCreationError> {
        debug!("Creating {} meeting at {}", config.duration, self.meetings_url);

        match self.post_meeting(config, token).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Error creating meeting: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingDuration;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn config(minutes: i64) -> MeetingConfig {
        MeetingConfig::scheduled(MeetingDuration::try_from(minutes).unwrap())
    }

    #[test]
    fn test_meetings_url_trims_trailing_slash() {
        let creator = ZoomMeetingCreator::new(reqwest::Client::new(), "https://api.zoom.us/v2/");
        assert_eq!(creator.meetings_url, "https://api.zoom.us/v2/users/me/meetings");
    }

    #[tokio::test]
    async fn test_posts_template_with_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/users/me/meetings"))
            .and(header("authorization", "Bearer tok123"))
            .and(body_json(serde_json::to_value(config(45)).unwrap()))
            .respond_with(ResponseTemplate::new(201).set_body_raw(
                r#"{"id": 111, "topic": "Consultancy Video Call", "start_url": "https://zoom.us/s/111", "join_url": "https://zoom.us/j/111"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let creator = ZoomMeetingCreator::new(reqwest::Client::new(), &format!("{}/v2", server.uri()));
        let result = creator
            .create_meeting(&config(45), &AccessToken::new("tok123"))
            .await
            .unwrap();

        assert_eq!(result.meeting_id, MeetingId::Number(111.into()));
        assert_eq!(result.start_url, "https://zoom.us/s/111");
        assert_eq!(result.join_url, "https://zoom.us/j/111");
    }

    #[tokio::test]
    async fn test_error_status_keeps_provider_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/users/me/meetings"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_raw(r#"{ "code": 124, "message": "Invalid access token" }"#, "application/json"),
            )
            .mount(&server)
            .await;

        let creator = ZoomMeetingCreator::new(reqwest::Client::new(), &format!("{}/v2", server.uri()));
        let err = creator
            .create_meeting(&config(15), &AccessToken::new("stale"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid access token"));
        assert!(matches!(err, MeetingCreationError::Status { .. }));
    }

    #[tokio::test]
    async fn test_missing_join_url_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/users/me/meetings"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_raw(r#"{"id": 1, "start_url": "https://zoom.us/s/1"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let creator = ZoomMeetingCreator::new(reqwest::Client::new(), &format!("{}/v2", server.uri()));
        let err = creator
            .create_meeting(&config(1), &AccessToken::new("tok"))
            .await
            .unwrap_err();

        assert!(matches!(err, MeetingCreationError::InvalidResponse(_)));
    }
}
