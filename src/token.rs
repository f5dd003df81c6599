// SPDX-License-Identifier: MIT

//! OAuth2 token pair value type.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::TOKEN_EXPIRY_MARGIN_SECONDS;

/// An OAuth2 access/refresh token pair with its expiry time.
///
/// Tokens are immutable: a refresh constructs and stores a new `Token`, it
/// never mutates one in place. All expiry comparisons happen in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Create a token with an explicit UTC expiry.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at,
        }
    }

    /// Create a token from a zone-less expiry timestamp.
    ///
    /// Naive timestamps are interpreted as UTC, so a naive expiry behaves
    /// identically to the same instant expressed with an explicit UTC zone.
    pub fn with_naive_expiry(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: NaiveDateTime,
    ) -> Self {
        Self::new(access_token, refresh_token, expires_at.and_utc())
    }

    /// True when the token expires within the safety margin (60 seconds).
    ///
    /// Strict comparison: a token with exactly 60 seconds remaining is NOT
    /// stale.
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }

    /// Staleness evaluated against an explicit `now` reference point.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.signed_duration_since(now)
            < chrono::Duration::seconds(TOKEN_EXPIRY_MARGIN_SECONDS)
    }
}
