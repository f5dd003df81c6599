// SPDX-License-Identifier: MIT

//! Quotations resource: CRUD plus sending and acceptance.

use std::ops::Deref;

use serde_json::{json, Map, Value};

use crate::client::TeamleaderClient;
use crate::error::Result;
use crate::models::Quotation;
use crate::resources::base::CrudResource;

/// Parameters for [`QuotationsResource::send`].
///
/// All quotation IDs must belong to the same deal. `recipients` follows the
/// API shape: a required `"to"` list and optional `"cc"` list of
/// `{"email_address": ...}` entries.
#[derive(Debug, Clone)]
pub struct QuotationSendRequest {
    pub quotation_ids: Vec<String>,
    pub recipients: Value,
    pub subject: String,
    pub content: String,
    /// ISO 639-1 language code for the e-mail (e.g. "en", "nl").
    pub language: String,
    /// Optional sender override (`{"sender": {...}, "email_address": ...}`).
    pub from: Option<Value>,
}

/// CRUD + extra actions for Teamleader quotations.
pub struct QuotationsResource<'a> {
    crud: CrudResource<'a, Quotation>,
}

impl<'a> QuotationsResource<'a> {
    pub(crate) fn new(client: &'a TeamleaderClient) -> Self {
        Self {
            crud: CrudResource::new(client, "quotations"),
        }
    }

    /// Send one or more quotations from the same deal in a single e-mail
    /// via `quotations.send`.
    pub async fn send(&self, request: QuotationSendRequest) -> Result<()> {
        let mut body = Map::new();
        body.insert("quotations".to_string(), json!(request.quotation_ids));
        body.insert("recipients".to_string(), request.recipients);
        body.insert("subject".to_string(), json!(request.subject));
        body.insert("content".to_string(), json!(request.content));
        body.insert("language".to_string(), json!(request.language));
        if let Some(from) = request.from {
            body.insert("from".to_string(), from);
        }
        self.crud
            .client()
            .post("quotations.send", Some(&Value::Object(body)))
            .await?;
        Ok(())
    }

    /// Mark a quotation as accepted via `quotations.accept`.
    pub async fn accept(&self, quotation_id: &str) -> Result<()> {
        self.crud
            .client()
            .post("quotations.accept", Some(&json!({"id": quotation_id})))
            .await?;
        Ok(())
    }
}

impl<'a> Deref for QuotationsResource<'a> {
    type Target = CrudResource<'a, Quotation>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
