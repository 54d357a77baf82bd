use anyhow::{ensure, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;

/// Environment variables carrying the OAuth client-credentials triple
pub const CLIENT_ID_VAR: &str = "ZOOM_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "ZOOM_CLIENT_SECRET";
pub const ACCOUNT_ID_VAR: &str = "ZOOM_ACCOUNT_ID";

/// Prefix for generic overrides, e.g. `ZOOM_MEETINGS__SERVICE__HTTP__PORT=8080`
const ENV_PREFIX: &str = "ZOOM_MEETINGS";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub zoom: ZoomConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Provider account credentials and endpoints.
///
/// Loaded once at startup and shared read-only by every request.
#[derive(Debug, Deserialize)]
pub struct ZoomConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub account_id: String,

    /// OAuth token endpoint (account-credentials grant)
    pub oauth_url: String,

    /// REST API base, without a trailing slash
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from defaults, an optional file and the process environment
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_env(path, std::env::vars().collect())
    }

    /// Load configuration using an explicit set of environment variables
    pub fn load_with_env(path: &str, vars: HashMap<String, String>) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "zoom-meetings")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 5000)?
            .set_default("zoom.oauth_url", "https://zoom.us/oauth/token")?
            .set_default("zoom.api_base_url", "https://api.zoom.us/v2")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("zoom.client_id", vars.get(CLIENT_ID_VAR).cloned())?
            .set_override_option("zoom.client_secret", vars.get(CLIENT_SECRET_VAR).cloned())?
            .set_override_option("zoom.account_id", vars.get(ACCOUNT_ID_VAR).cloned())?
            .build()?;

        let mut cfg: Config = settings
            .try_deserialize()
            .context("Invalid or incomplete configuration")?;

        cfg.zoom.api_base_url = cfg.zoom.api_base_url.trim().trim_end_matches('/').to_string();
        cfg.validate()?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;

        ensure!(!zoom.client_id.trim().is_empty(), "{} must not be empty", CLIENT_ID_VAR);
        ensure!(
            !zoom.client_secret.expose_secret().trim().is_empty(),
            "{} must not be empty",
            CLIENT_SECRET_VAR
        );
        ensure!(!zoom.account_id.trim().is_empty(), "{} must not be empty", ACCOUNT_ID_VAR);

        reqwest::Url::parse(&zoom.oauth_url)
            .with_context(|| format!("Invalid zoom.oauth_url: {}", zoom.oauth_url))?;
        reqwest::Url::parse(&zoom.api_base_url)
            .with_context(|| format!("Invalid zoom.api_base_url: {}", zoom.api_base_url))?;

        Ok(())
    }
}
