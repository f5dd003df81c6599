// SPDX-License-Identifier: MIT

//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};

/// OAuth2 application credentials and transport settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Teamleader integration client ID (public).
    pub client_id: String,
    /// Teamleader integration client secret.
    pub client_secret: String,
    /// Redirect URI registered with the integration.
    pub redirect_uri: String,
    /// Scopes to request; empty means "everything the integration is
    /// configured for".
    pub scopes: Vec<String>,
    /// API base URL.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_client_secret".to_string(),
            redirect_uri: "http://localhost:9999/callback".to_string(),
            scopes: Vec::new(),
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TEAMLEADER_CLIENT_ID`, `TEAMLEADER_CLIENT_SECRET` and
    /// `TEAMLEADER_REDIRECT_URI` are required. `TEAMLEADER_SCOPES` is a
    /// comma-separated list; `TEAMLEADER_BASE_URL` and
    /// `TEAMLEADER_TIMEOUT_SECS` override the defaults. A `.env` file is
    /// loaded first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let scopes = env::var("TEAMLEADER_SCOPES")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let timeout_secs = match env::var("TEAMLEADER_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::Config("TEAMLEADER_TIMEOUT_SECS"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            client_id: env::var("TEAMLEADER_CLIENT_ID")
                .map_err(|_| Error::Config("TEAMLEADER_CLIENT_ID"))?,
            client_secret: env::var("TEAMLEADER_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| Error::Config("TEAMLEADER_CLIENT_SECRET"))?,
            redirect_uri: env::var("TEAMLEADER_REDIRECT_URI")
                .map_err(|_| Error::Config("TEAMLEADER_REDIRECT_URI"))?,
            scopes,
            base_url: env::var("TEAMLEADER_BASE_URL").unwrap_or_else(|_| BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
