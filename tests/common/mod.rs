// SPDX-License-Identifier: MIT

//! Shared helpers for the integration test suite.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::{Duration, Utc};
use teamleader::{
    Endpoint, Endpoints, MemoryTokenStore, OAuth2Handler, TeamleaderClient, Token, TokenStore,
};
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Install a test subscriber once per binary; honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A token pair expiring `secs` seconds from now.
pub fn token_expiring_in(secs: i64) -> Token {
    Token::new("acc_valid", "ref_valid", Utc::now() + Duration::seconds(secs))
}

/// A store pre-seeded with a token that stays fresh for the whole test.
pub async fn store_with_fresh_token() -> Arc<MemoryTokenStore> {
    let store = Arc::new(MemoryTokenStore::new());
    store.save(&token_expiring_in(3600)).await.unwrap();
    store
}

/// An OAuth2 handler pointed at the mock server's token endpoint.
pub fn auth_against(server: &MockServer, store: Arc<MemoryTokenStore>) -> OAuth2Handler {
    OAuth2Handler::new(
        "test_client_id",
        "test_client_secret",
        "http://localhost:9999/callback",
        store,
    )
    .with_authorization_url(format!("{}/oauth2/authorize", server.uri()))
    .with_token_url(format!("{}/oauth2/access_token", server.uri()))
}

/// A small synthetic endpoint table for exercising the `call()` bridge.
pub fn sample_endpoints() -> Endpoints {
    Endpoints::new([
        Endpoint::post("contacts.list").optional(&["page", "filter", "sort"]),
        Endpoint::post("departments.info").required(&["id"]),
        Endpoint::post("activityTypes.list").optional(&["page"]),
    ])
}

/// A client against the mock server with a fresh token already stored, so
/// no refresh traffic interferes with the request assertions.
pub async fn client_against(server: &MockServer) -> TeamleaderClient {
    init_tracing();
    let store = store_with_fresh_token().await;
    let auth = auth_against(server, store);
    TeamleaderClient::new(auth, sample_endpoints())
        .unwrap()
        .with_base_url(server.uri())
}
