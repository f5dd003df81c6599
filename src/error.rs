// SPDX-License-Identifier: MIT

//! Error taxonomy for the Teamleader client.
//!
//! Every non-2xx API response becomes exactly one variant of [`Error`] at the
//! call site; nothing is swallowed and nothing is retried automatically. The
//! HTTP-derived variants carry the extracted message, the numeric status code
//! and the raw response body for introspection.
//!
//! [`Error::UnknownOperation`] and [`Error::MissingParameters`] are local
//! contract violations raised before any network call, kept
//! distinct from the HTTP-derived variants.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// 401, a token-endpoint failure, or no token stored at all.
    #[error("authentication failed: {message}")]
    Auth {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// The refresh token itself was rejected; the user must re-run the
    /// authorization flow from scratch. Distinct from [`Error::Auth`] so
    /// callers can tell "never set up" apart from "was set up, now revoked";
    /// [`Error::is_auth_error`] matches both.
    #[error("refresh token rejected, re-authorization required: {message}")]
    AuthExpired {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// 403: the OAuth token lacks the required scope.
    #[error("permission denied: {message}")]
    Permission {
        message: String,
        status: u16,
        body: String,
    },

    /// 404: the requested resource does not exist.
    #[error("not found: {message}")]
    NotFound {
        message: String,
        status: u16,
        body: String,
    },

    /// 422: the request body failed server-side validation.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        status: u16,
        body: String,
    },

    /// 429: rate limit exceeded. `retry_after` holds the `Retry-After`
    /// header in seconds when the server sent one. Backing off is the
    /// caller's responsibility.
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        status: u16,
        body: String,
        retry_after: Option<u64>,
    },

    /// 5xx: the Teamleader server returned an internal error.
    #[error("server error (status {status}): {message}")]
    Server {
        message: String,
        status: u16,
        body: String,
    },

    /// Catch-all for any other non-2xx status.
    #[error("API error (status {status}): {message}")]
    Api {
        message: String,
        status: u16,
        body: String,
    },

    /// `call()` was given an operation ID that is not in the endpoint table.
    /// Raised before any network call.
    #[error("unknown operation `{operation}` ({available} operations available)")]
    UnknownOperation { operation: String, available: usize },

    /// `call()` was missing one or more required parameters for the
    /// operation. Raised before any network call.
    #[error(
        "missing required parameters for `{operation}`: {missing:?} \
         (required: {required:?}, optional: {optional:?})"
    )]
    MissingParameters {
        operation: String,
        missing: Vec<String>,
        required: Vec<String>,
        optional: Vec<String>,
    },

    /// `Page::next()` was called on the last page.
    #[error("no more pages: page {page} * size {page_size} >= total {total_count}")]
    NoMorePages {
        page: u32,
        page_size: u32,
        total_count: u64,
    },

    /// The API answered 2xx but the body did not have the expected shape
    /// (e.g. an `add` response without `data.id`).
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// Transport-level failure from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body (or model payload) could not be decoded as JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A token store implementation failed to read or write.
    #[error("token store error: {0}")]
    Store(String),

    /// A required configuration value is missing or malformed.
    #[error("missing or invalid configuration: {0}")]
    Config(&'static str),
}

impl Error {
    /// True for both [`Error::Auth`] and [`Error::AuthExpired`], the
    /// "catch broadly" check for anything that means the caller is not
    /// (or no longer) authenticated.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth { .. } | Error::AuthExpired { .. })
    }

    /// True for every error derived from a non-2xx API response, including
    /// the specialized variants (not found, validation, rate limit, …).
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Error::Permission { .. }
                | Error::NotFound { .. }
                | Error::Validation { .. }
                | Error::RateLimit { .. }
                | Error::Server { .. }
                | Error::Api { .. }
        )
    }

    /// The HTTP status code this error was mapped from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } | Error::AuthExpired { status, .. } => *status,
            Error::Permission { status, .. }
            | Error::NotFound { status, .. }
            | Error::Validation { status, .. }
            | Error::RateLimit { status, .. }
            | Error::Server { status, .. }
            | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `Retry-After` value in seconds for rate-limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
