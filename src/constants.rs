// SPDX-License-Identifier: MIT

//! Fixed constants for the Teamleader Focus API.
//!
//! All values come from the official Teamleader documentation. Runtime
//! overrides go through [`crate::config::Config`], not through these.

/// Base URL for all API calls.
pub const BASE_URL: &str = "https://api.focus.teamleader.eu";

/// OAuth2 authorization endpoint (browser redirect target).
pub const AUTHORIZATION_URL: &str = "https://focus.teamleader.eu/oauth2/authorize";

/// OAuth2 token endpoint (code exchange and refresh).
pub const TOKEN_URL: &str = "https://focus.teamleader.eu/oauth2/access_token";

/// Seconds before real expiry at which a token is treated as stale.
///
/// Guarantees an access token handed to an in-flight request has enough
/// remaining lifetime that the server's own clock skew cannot reject it
/// mid-flight.
pub const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of items per page for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size accepted by the API.
pub const MAX_PAGE_SIZE: u32 = 100;
