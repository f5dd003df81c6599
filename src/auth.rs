// SPDX-License-Identifier: MIT

//! OAuth2 Authorization Code flow with refresh token rotation.
//!
//! [`OAuth2Handler`] drives the three-step dance:
//! 1. [`OAuth2Handler::authorization_url`]: the browser redirect target,
//! 2. [`OAuth2Handler::exchange_code`]: turns the code into the first token pair,
//! 3. [`OAuth2Handler::get_valid_access_token`]: the single entry point the
//!    transport layer uses; refreshes transparently when the stored token is
//!    stale and makes zero network calls when it is fresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::constants::{AUTHORIZATION_URL, TOKEN_URL};
use crate::error::{Error, Result};
use crate::store::TokenStore;
use crate::token::Token;

/// Successful token-endpoint response body.
///
/// Shared between code exchange and refresh; both grants answer with the
/// same shape.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

/// Manages the full OAuth2 lifecycle for a Teamleader application.
pub struct OAuth2Handler {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<String>,
    store: Arc<dyn TokenStore>,
    http: reqwest::Client,
    authorization_url: String,
    token_url: String,
}

impl OAuth2Handler {
    /// Create a handler with the production Teamleader OAuth2 endpoints.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: Vec::new(),
            store,
            http: reqwest::Client::new(),
            authorization_url: AUTHORIZATION_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
        }
    }

    /// Create a handler from a loaded [`crate::config::Config`].
    pub fn from_config(config: &crate::config::Config, store: Arc<dyn TokenStore>) -> Self {
        Self::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            config.redirect_uri.clone(),
            store,
        )
        .with_scopes(config.scopes.clone())
    }

    /// Request specific scopes during authorization. With no scopes set, the
    /// `scope` parameter is omitted and Teamleader grants everything the
    /// integration is configured for.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Override the authorization endpoint (tests, staging environments).
    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = url.into();
        self
    }

    /// Override the token endpoint (tests, staging environments).
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// The token store this handler persists to.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Build the URL to send the user to for authorization.
    ///
    /// Deterministic, no I/O, no state change. The `scope` parameter is
    /// omitted entirely when no scopes are configured, since Teamleader interprets
    /// an absent parameter as "grant everything configured", which an empty
    /// string would not.
    pub fn authorization_url(&self) -> String {
        let mut url = format!(
            "{}?client_id={}&response_type=code&redirect_uri={}",
            self.authorization_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
        );
        if !self.scopes.is_empty() {
            let joined = self.scopes.join(" ");
            url.push_str("&scope=");
            url.push_str(&urlencoding::encode(&joined));
        }
        url
    }

    /// Exchange an authorization code for a token pair and persist it.
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!(status = %status, "authorization code exchange failed");
            return Err(Error::Auth {
                message: format!("code exchange failed with status {status}"),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }

        let token = parse_token_response(&body)?;
        self.store.save(&token).await?;
        tracing::info!("authorization code exchanged, token stored");
        Ok(token)
    }

    /// Return a non-stale access token, refreshing transparently if needed.
    ///
    /// Hard contract: when the stored token is fresh this makes zero network
    /// calls and returns its access token unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::Auth`] when no token has ever been stored.
    /// - [`Error::AuthExpired`] when the refresh endpoint rejects the stored
    ///   refresh token; the user must re-authorize from scratch.
    pub async fn get_valid_access_token(&self) -> Result<String> {
        let token = self.store.get().await?.ok_or_else(|| Error::Auth {
            message: "no token stored; complete the authorization flow first".to_string(),
            status: None,
            body: None,
        })?;

        if !token.is_stale() {
            return Ok(token.access_token);
        }

        tracing::info!("access token stale, refreshing");
        let new_token = self.refresh(&token).await?;
        self.store.save(&new_token).await?;
        tracing::info!("token refreshed and stored");
        Ok(new_token.access_token)
    }

    /// Use the refresh token to obtain a new token pair.
    async fn refresh(&self, token: &Token) -> Result<Token> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", token.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!(status = %status, "token refresh rejected");
            return Err(Error::AuthExpired {
                message: format!("refresh failed with status {status}"),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }

        parse_token_response(&body)
    }
}

/// Parse a token-endpoint body into a [`Token`].
///
/// `expires_at` is computed from `now + expires_in` at the moment the
/// response is received, truncated to whole seconds for determinism. A body
/// missing any of the three fields is an [`Error::Auth`].
fn parse_token_response(body: &str) -> Result<Token> {
    let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| Error::Auth {
        message: format!("malformed token response: {e}"),
        status: None,
        body: Some(body.to_string()),
    })?;

    let expires_at = DateTime::<Utc>::from_timestamp(Utc::now().timestamp() + parsed.expires_in, 0)
        .ok_or_else(|| Error::Auth {
            message: format!("token response has out-of-range expires_in: {}", parsed.expires_in),
            status: None,
            body: Some(body.to_string()),
        })?;

    Ok(Token::new(parsed.access_token, parsed.refresh_token, expires_at))
}
