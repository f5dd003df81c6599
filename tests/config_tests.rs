// SPDX-License-Identifier: MIT

//! Environment-based configuration tests. Kept to a single test function so
//! env-var mutation never races against a parallel test thread.

use std::env;
use std::time::Duration;

use teamleader::{Config, Error};

#[test]
fn test_from_env() {
    let vars = [
        "TEAMLEADER_CLIENT_ID",
        "TEAMLEADER_CLIENT_SECRET",
        "TEAMLEADER_REDIRECT_URI",
        "TEAMLEADER_SCOPES",
        "TEAMLEADER_BASE_URL",
        "TEAMLEADER_TIMEOUT_SECS",
    ];
    for var in vars {
        env::remove_var(var);
    }

    // All required vars missing: the first one is reported.
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config("TEAMLEADER_CLIENT_ID")));

    env::set_var("TEAMLEADER_CLIENT_ID", "cid");
    env::set_var("TEAMLEADER_CLIENT_SECRET", " csecret ");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config("TEAMLEADER_REDIRECT_URI")));

    // Minimal valid environment gets the defaults.
    env::set_var("TEAMLEADER_REDIRECT_URI", "http://localhost:8080/cb");
    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "cid");
    assert_eq!(config.client_secret, "csecret");
    assert_eq!(config.redirect_uri, "http://localhost:8080/cb");
    assert!(config.scopes.is_empty());
    assert_eq!(config.base_url, "https://api.focus.teamleader.eu");
    assert_eq!(config.timeout, Duration::from_secs(30));

    // Optional overrides.
    env::set_var("TEAMLEADER_SCOPES", "contacts, deals,,invoices ");
    env::set_var("TEAMLEADER_BASE_URL", "https://sandbox.example.com");
    env::set_var("TEAMLEADER_TIMEOUT_SECS", "5");
    let config = Config::from_env().unwrap();
    assert_eq!(config.scopes, vec!["contacts", "deals", "invoices"]);
    assert_eq!(config.base_url, "https://sandbox.example.com");
    assert_eq!(config.timeout, Duration::from_secs(5));

    // Malformed timeout is rejected rather than silently defaulted.
    env::set_var("TEAMLEADER_TIMEOUT_SECS", "soon");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config("TEAMLEADER_TIMEOUT_SECS")));

    for var in vars {
        env::remove_var(var);
    }
}
