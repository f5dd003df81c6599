// SPDX-License-Identifier: MIT

//! Endpoint descriptor table for the generic `call()` bridge.
//!
//! The table is produced externally (spec-driven code generation is out of
//! scope here) and injected into [`crate::client::TeamleaderClient`] at
//! construction. The client treats it as immutable and read-only, which
//! keeps the transport layer testable with a synthetic table.

use std::collections::HashMap;

/// Metadata for a single Teamleader Focus API operation.
///
/// Every Focus operation is reached via POST to `{BASE_URL}/{path}` where
/// `path` equals the operation ID (e.g. `contacts.list`); parameters live in
/// the JSON request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub operation_id: String,
    pub method: String,
    pub path: String,
    pub required_params: Vec<String>,
    pub optional_params: Vec<String>,
}

impl Endpoint {
    /// Describe a POST operation whose path equals its operation ID.
    pub fn post(operation_id: impl Into<String>) -> Self {
        let operation_id = operation_id.into();
        Self {
            path: operation_id.clone(),
            operation_id,
            method: "POST".to_string(),
            required_params: Vec::new(),
            optional_params: Vec::new(),
        }
    }

    pub fn required(mut self, params: &[&str]) -> Self {
        self.required_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn optional(mut self, params: &[&str]) -> Self {
        self.optional_params = params.iter().map(|p| p.to_string()).collect();
        self
    }
}

/// Immutable lookup table from operation ID to [`Endpoint`].
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    table: HashMap<String, Endpoint>,
}

impl Endpoints {
    /// Build a table from endpoint descriptors, keyed by operation ID.
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        Self {
            table: endpoints
                .into_iter()
                .map(|e| (e.operation_id.clone(), e))
                .collect(),
        }
    }

    /// An empty table. `call()` will reject every operation, but the
    /// curated resources remain fully usable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, operation_id: &str) -> Option<&Endpoint> {
        self.table.get(operation_id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
