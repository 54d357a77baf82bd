use super::{AccessToken, AuthError, TokenProvider};
use crate::config::ZoomConfig;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error};

const GRANT_TYPE: &str = "account_credentials";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Server-to-server OAuth: account-credentials grant with HTTP Basic client auth
pub struct OAuthTokenProvider {
    http: reqwest::Client,
    token_url: String,
    account_id: String,

    /// Precomputed `Basic base64(client_id:client_secret)` header value
    basic_auth: SecretString,
}

impl OAuthTokenProvider {
    pub fn new(http: reqwest::Client, zoom: &ZoomConfig) -> Self {
        let pair = format!("{}:{}", zoom.client_id, zoom.client_secret.expose_secret());
        let encoded = base64::engine::general_purpose::STANDARD.encode(pair);

        Self {
            http,
            token_url: zoom.oauth_url.clone(),
            account_id: zoom.account_id.clone(),
            basic_auth: SecretString::new(format!("Basic {}", encoded)),
        }
    }

    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth.expose_secret())
            .form(&[("grant_type", GRANT_TYPE), ("account_id", self.account_id.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::Status { status, body });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        if parsed.access_token.is_empty() {
            return Err(AuthError::InvalidResponse("empty access_token".to_string()));
        }

        Ok(AccessToken::new(parsed.access_token))
    }
}

#[async_trait::async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, AuthError> {
        debug!("Requesting access token from {}", self.token_url);

        match self.request_token().await {
            Ok(token) => Ok(token),
            Err(e) => {
                error!("Error fetching access token: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn provider(server: &MockServer) -> OAuthTokenProvider {
        let zoom = ZoomConfig {
            client_id: "id".to_string(),
            client_secret: SecretString::new("secret".to_string()),
            account_id: "acct-1".to_string(),
            oauth_url: format!("{}/oauth/token", server.uri()),
            api_base_url: format!("{}/v2", server.uri()),
        };
        OAuthTokenProvider::new(reqwest::Client::new(), &zoom)
    }

    #[tokio::test]
    async fn test_sends_account_credentials_grant() {
        let server = MockServer::start().await;

        // base64("id:secret")
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("authorization", "Basic aWQ6c2VjcmV0"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=account_credentials"))
            .and(body_string_contains("account_id=acct-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"access_token":"tok123","token_type":"bearer"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = provider(&server).access_token().await.unwrap();
        assert_eq!(token.expose(), "tok123");
    }

    #[tokio::test]
    async fn test_error_status_is_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"reason":"Invalid client_id or client_secret"}"#))
            .mount(&server)
            .await;

        let err = provider(&server).access_token().await.unwrap_err();
        match err {
            AuthError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert!(body.contains("Invalid client_id"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_access_token_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"token_type":"bearer"}"#, "application/json"))
            .mount(&server)
            .await;

        let err = provider(&server).access_token().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let zoom = ZoomConfig {
            client_id: "id".to_string(),
            client_secret: SecretString::new("secret".to_string()),
            account_id: "acct-1".to_string(),
            oauth_url: "http://127.0.0.1:1/oauth/token".to_string(),
            api_base_url: "http://127.0.0.1:1/v2".to_string(),
        };
        let err = OAuthTokenProvider::new(reqwest::Client::new(), &zoom)
            .access_token()
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Request(_)));
    }
}
