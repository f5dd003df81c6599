// SPDX-License-Identifier: MIT

//! Invoices resource: CRUD plus booking, crediting, payments and delivery.

use std::ops::Deref;

use serde_json::{json, Map, Value};

use crate::client::TeamleaderClient;
use crate::error::{Error, Result};
use crate::models::{DownloadLocation, Invoice, Money, TypeAndId};
use crate::resources::base::CrudResource;

/// CRUD + extra actions for Teamleader invoices.
pub struct InvoicesResource<'a> {
    crud: CrudResource<'a, Invoice>,
}

impl<'a> InvoicesResource<'a> {
    pub(crate) fn new(client: &'a TeamleaderClient) -> Self {
        Self {
            crud: CrudResource::new(client, "invoices"),
        }
    }

    /// Book a draft invoice via `invoices.book`, turning it into a numbered
    /// invoice. `on` is the ISO 8601 invoice date (`"YYYY-MM-DD"`).
    pub async fn book(&self, invoice_id: &str, on: &str) -> Result<()> {
        self.crud
            .client()
            .post("invoices.book", Some(&json!({"id": invoice_id, "on": on})))
            .await?;
        Ok(())
    }

    /// Credit a booked invoice completely via `invoices.credit`, returning
    /// a reference to the newly created credit note. The credit note date
    /// defaults to today when omitted.
    pub async fn credit(
        &self,
        invoice_id: &str,
        credit_note_date: Option<&str>,
    ) -> Result<TypeAndId> {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(invoice_id));
        if let Some(date) = credit_note_date {
            body.insert("credit_note_date".to_string(), json!(date));
        }
        let resp = self
            .crud
            .client()
            .post("invoices.credit", Some(&Value::Object(body)))
            .await?;
        let data = resp
            .get("data")
            .ok_or_else(|| Error::UnexpectedResponse("credit response missing `data`".into()))?;
        Ok(serde_json::from_value(data.clone())?)
    }

    /// Register a payment against an invoice via `invoices.registerPayment`.
    /// `paid_at` is an ISO 8601 datetime.
    pub async fn register_payment(
        &self,
        invoice_id: &str,
        payment: &Money,
        paid_at: &str,
        payment_method_id: Option<&str>,
    ) -> Result<()> {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(invoice_id));
        body.insert("payment".to_string(), json!(payment));
        body.insert("paid_at".to_string(), json!(paid_at));
        if let Some(method_id) = payment_method_id {
            body.insert("payment_method_id".to_string(), json!(method_id));
        }
        self.crud
            .client()
            .post("invoices.registerPayment", Some(&Value::Object(body)))
            .await?;
        Ok(())
    }

    /// Send an invoice to the invoicee via `invoices.send`.
    pub async fn send(
        &self,
        invoice_id: &str,
        subject: &str,
        body_text: &str,
        mail_template_id: Option<&str>,
        recipients: Option<&Value>,
    ) -> Result<()> {
        let mut content = Map::new();
        content.insert("subject".to_string(), json!(subject));
        content.insert("body".to_string(), json!(body_text));
        if let Some(template_id) = mail_template_id {
            content.insert("mail_template_id".to_string(), json!(template_id));
        }

        let mut payload = Map::new();
        payload.insert("id".to_string(), json!(invoice_id));
        payload.insert("content".to_string(), Value::Object(content));
        if let Some(recipients) = recipients {
            payload.insert("recipients".to_string(), recipients.clone());
        }
        self.crud
            .client()
            .post("invoices.send", Some(&Value::Object(payload)))
            .await?;
        Ok(())
    }

    /// Request a pre-signed download URL for an invoice document via
    /// `invoices.download`. `format` is `"pdf"`, `"ubl/e-fff"` or
    /// `"ubl/peppol_bis_3"`; the returned location expires after a short
    /// time.
    pub async fn download(&self, invoice_id: &str, format: &str) -> Result<DownloadLocation> {
        let resp = self
            .crud
            .client()
            .post(
                "invoices.download",
                Some(&json!({"id": invoice_id, "format": format})),
            )
            .await?;
        let data = resp
            .get("data")
            .ok_or_else(|| Error::UnexpectedResponse("download response missing `data`".into()))?;
        Ok(serde_json::from_value(data.clone())?)
    }
}

impl<'a> Deref for InvoicesResource<'a> {
    type Target = CrudResource<'a, Invoice>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
