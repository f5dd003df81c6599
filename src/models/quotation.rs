// SPDX-License-Identifier: MIT

//! Quotation model, curated layer over the Focus quotations API.

use serde::Deserialize;
use serde_json::Value;

use crate::models::common::{CustomField, Money, TypeAndId};

/// A Teamleader Focus quotation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quotation {
    #[serde(default)]
    pub id: String,
    pub deal: Option<TypeAndId>,
    #[serde(default)]
    pub grouped_lines: Vec<Value>,
    /// ISO 4217.
    pub currency: Option<String>,
    pub currency_exchange_rate: Option<Value>,
    /// Markdown.
    pub text: Option<String>,
    /// Totals block (`tax_exclusive`, `tax_inclusive`, `taxes`, …).
    pub total: Option<Value>,
    #[serde(default)]
    pub discounts: Vec<Value>,
    /// "open" | "accepted" | "expired" | "rejected" | "closed"
    #[serde(default)]
    pub status: Option<String>,
    pub name: Option<String>,
    pub document_template: Option<TypeAndId>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Quotation {
    pub fn is_open(&self) -> bool {
        self.status.as_deref() == Some("open")
    }

    pub fn is_accepted(&self) -> bool {
        self.status.as_deref() == Some("accepted")
    }

    /// The tax-exclusive total amount, if the totals block is present.
    pub fn total_tax_exclusive(&self) -> Option<Money> {
        self.total
            .as_ref()
            .and_then(|t| t.get("tax_exclusive"))
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
