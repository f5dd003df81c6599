// SPDX-License-Identifier: MIT

//! Authenticated HTTP transport for the Teamleader Focus API.
//!
//! [`TeamleaderClient`] wraps one [`OAuth2Handler`], one HTTP session, a
//! per-request timeout and the injected endpoint descriptor table. Every
//! request (not just the first) obtains a valid access token from the
//! handler before being sent, so token refresh is fully transparent to every
//! call site.

use std::time::Duration;

use serde_json::{Map, Value};

use crate::auth::OAuth2Handler;
use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::endpoints::Endpoints;
use crate::error::{Error, Result};
use crate::resources::{
    CompaniesResource, ContactsResource, DealsResource, InvoicesResource, QuotationsResource,
};

/// Entry point for all Teamleader API interactions.
///
/// Construct with an [`OAuth2Handler`] and an endpoint table, then use the
/// curated resource accessors for the common CRM objects or
/// [`TeamleaderClient::call`] for anything else in the API surface:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use teamleader::{Endpoints, MemoryTokenStore, OAuth2Handler, TeamleaderClient};
///
/// # async fn run() -> teamleader::Result<()> {
/// let store = Arc::new(MemoryTokenStore::new());
/// let auth = OAuth2Handler::new("client_id", "client_secret", "https://example.com/cb", store);
/// let client = TeamleaderClient::new(auth, Endpoints::empty())?;
///
/// let contact = client.contacts().get("some-uuid").await?;
/// # Ok(())
/// # }
/// ```
pub struct TeamleaderClient {
    http: reqwest::Client,
    base_url: String,
    auth: OAuth2Handler,
    endpoints: Endpoints,
    timeout: Duration,
}

impl TeamleaderClient {
    /// Create a client with the default base URL and a 30 second timeout.
    pub fn new(auth: OAuth2Handler, endpoints: Endpoints) -> Result<Self> {
        Self::with_timeout(auth, endpoints, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(
        auth: OAuth2Handler,
        endpoints: Endpoints,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            auth,
            endpoints,
            timeout,
        })
    }

    /// Create a client from a loaded [`crate::config::Config`], taking the
    /// base URL and timeout from it.
    pub fn from_config(
        config: &crate::config::Config,
        auth: OAuth2Handler,
        endpoints: Endpoints,
    ) -> Result<Self> {
        Ok(Self::with_timeout(auth, endpoints, config.timeout)?.with_base_url(&config.base_url))
    }

    /// Override the API base URL (tests, staging environments).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The OAuth2 handler driving this client's authentication.
    pub fn auth(&self) -> &OAuth2Handler {
        &self.auth
    }

    // ------------------------------------------------------------------
    // Curated resources
    // ------------------------------------------------------------------

    pub fn contacts(&self) -> ContactsResource<'_> {
        ContactsResource::new(self)
    }

    pub fn companies(&self) -> CompaniesResource<'_> {
        CompaniesResource::new(self)
    }

    pub fn deals(&self) -> DealsResource<'_> {
        DealsResource::new(self)
    }

    pub fn invoices(&self) -> InvoicesResource<'_> {
        InvoicesResource::new(self)
    }

    pub fn quotations(&self) -> QuotationsResource<'_> {
        QuotationsResource::new(self)
    }

    // ------------------------------------------------------------------
    // Generic endpoint bridge
    // ------------------------------------------------------------------

    /// Call any operation in the injected endpoint table by name.
    ///
    /// Pre-flight validation happens before any network I/O: an unknown
    /// operation ID is [`Error::UnknownOperation`], and missing required
    /// body parameters are [`Error::MissingParameters`] listing exactly
    /// which names are missing. An empty `body` sends no request body.
    pub async fn call(&self, operation_id: &str, body: Map<String, Value>) -> Result<Value> {
        let endpoint =
            self.endpoints
                .get(operation_id)
                .ok_or_else(|| Error::UnknownOperation {
                    operation: operation_id.to_string(),
                    available: self.endpoints.len(),
                })?;

        let missing: Vec<String> = endpoint
            .required_params
            .iter()
            .filter(|p| !body.contains_key(*p))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingParameters {
                operation: operation_id.to_string(),
                missing,
                required: endpoint.required_params.clone(),
                optional: endpoint.optional_params.clone(),
            });
        }

        if body.is_empty() {
            self.post(&endpoint.path, None).await
        } else {
            self.post(&endpoint.path, Some(&Value::Object(body))).await
        }
    }

    // ------------------------------------------------------------------
    // Authenticated primitives
    // ------------------------------------------------------------------

    /// Authenticated POST to `{base_url}/{path}` with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let access_token = self.auth.get_valid_access_token().await?;
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self.http.post(&url).bearer_auth(access_token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Authenticated GET to `{base_url}/{path}`. Only a handful of
    /// auxiliary endpoints use GET; everything else is POST.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let access_token = self.auth.get_valid_access_token().await?;
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Map a response onto the error taxonomy or its parsed JSON body.
    ///
    /// Any status below 300 is success; an empty success body (204 No
    /// Content) becomes an empty JSON object.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        if status < 300 {
            if body.trim().is_empty() {
                return Ok(Value::Object(Map::new()));
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let message = extract_message(&body, status);
        Err(match status {
            401 => Error::Auth {
                message,
                status: Some(status),
                body: Some(body),
            },
            403 => Error::Permission {
                message,
                status,
                body,
            },
            404 => Error::NotFound {
                message,
                status,
                body,
            },
            422 => Error::Validation {
                message,
                status,
                body,
            },
            429 => {
                tracing::warn!(retry_after, "rate limit hit (429)");
                Error::RateLimit {
                    message,
                    status,
                    body,
                    retry_after,
                }
            }
            s if s >= 500 => Error::Server {
                message,
                status,
                body,
            },
            _ => Error::Api {
                message,
                status,
                body,
            },
        })
    }
}

/// Best-effort human-readable message from an error response body.
///
/// Never fails. Tries, in order: the JSON:API `errors[].title` list (titles
/// joined with `"; "`), then the first non-empty of `error_description` /
/// `message` / `error`, then the raw body text, then `"HTTP <status>"`.
pub fn extract_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = value.get("errors").and_then(Value::as_array) {
            let titles: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("title").and_then(Value::as_str))
                .filter(|t| !t.is_empty())
                .collect();
            if !titles.is_empty() {
                return titles.join("; ");
            }
        }
        for key in ["error_description", "message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    if !body.trim().is_empty() {
        return body.to_string();
    }
    format!("HTTP {status}")
}
