// SPDX-License-Identifier: MIT

//! Pluggable storage for the single persisted [`Token`].

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::token::Token;

/// Storage backend holding zero or one [`Token`].
///
/// The contract is deliberately small: `get` returns the stored token if any,
/// `save` unconditionally replaces it (last write wins) and `clear` is
/// idempotent. A deployment persists exactly one token record, always
/// addressed by the same fixed key.
///
/// Implementations shared between processes (e.g. a relational database) must
/// pin the record to a single row and perform `save` inside a transaction
/// with a row-level lock, so concurrent refreshers never race to insert
/// duplicate rows and a late writer cannot leave a partially-written record.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Return the stored token, or `None` if none has ever been saved.
    async fn get(&self) -> Result<Option<Token>>;

    /// Persist `token`, replacing any existing one.
    async fn save(&self, token: &Token) -> Result<()>;

    /// Delete any stored token. Calling this on an empty store is not an
    /// error.
    async fn clear(&self) -> Result<()>;
}

/// In-process token store, suitable for tests and single-process use.
///
/// Holds the token behind a plain mutex; it makes no cross-process
/// guarantees.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<Token>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| Error::Store(format!("token mutex poisoned: {e}")))?;
        Ok(guard.clone())
    }

    async fn save(&self, token: &Token) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| Error::Store(format!("token mutex poisoned: {e}")))?;
        *guard = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| Error::Store(format!("token mutex poisoned: {e}")))?;
        *guard = None;
        Ok(())
    }
}
