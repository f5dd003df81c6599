// SPDX-License-Identifier: MIT

//! Typed async client for the Teamleader Focus API.
//!
//! The crate is built around three layers:
//!
//! - [`OAuth2Handler`] owns the authorization-code flow and guarantees every
//!   request gets a non-stale access token, refreshing transparently through
//!   a pluggable [`TokenStore`];
//! - [`TeamleaderClient`] is the authenticated POST transport with the typed
//!   error taxonomy ([`Error`]) and a generic [`TeamleaderClient::call`]
//!   bridge driven by an injected endpoint table;
//! - curated resources (contacts, companies, deals, invoices, quotations)
//!   layer CRUD, page-based pagination and domain actions on top.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use teamleader::{Endpoints, MemoryTokenStore, OAuth2Handler, TeamleaderClient};
//!
//! # async fn run() -> teamleader::Result<()> {
//! let store = Arc::new(MemoryTokenStore::new());
//! let auth = OAuth2Handler::new(
//!     "client_id",
//!     "client_secret",
//!     "https://example.com/oauth/callback",
//!     store,
//! );
//!
//! // One-time setup: send the user to `auth.authorization_url()`, then
//! // exchange the code from the redirect.
//! auth.exchange_code("code-from-redirect").await?;
//!
//! let client = TeamleaderClient::new(auth, Endpoints::empty())?;
//! let page = client.contacts().list(Default::default()).await?;
//! for contact in &page.data {
//!     println!("{}", contact.full_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod resources;
pub mod store;
pub mod token;

pub use auth::OAuth2Handler;
pub use client::TeamleaderClient;
pub use config::Config;
pub use endpoints::{Endpoint, Endpoints};
pub use error::{Error, Result};
pub use resources::{CrudResource, ListOptions, Page};
pub use store::{MemoryTokenStore, TokenStore};
pub use token::Token;
