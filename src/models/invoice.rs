// SPDX-License-Identifier: MIT

//! Invoice model, curated layer over the Focus invoices API.

use serde::Deserialize;
use serde_json::Value;

use crate::models::common::{CustomField, Money, PaymentTerm, TypeAndId};

/// A Teamleader Focus invoice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: String,
    pub department: Option<TypeAndId>,
    pub invoice_number: Option<String>,
    /// ISO 8601 date.
    pub invoice_date: Option<String>,
    /// "draft" | "outstanding" | "matched"
    #[serde(default)]
    pub status: Option<String>,
    /// ISO 8601 date.
    pub due_on: Option<String>,
    #[serde(default)]
    pub paid: bool,
    pub paid_at: Option<String>,
    #[serde(default)]
    pub sent: bool,
    pub purchase_order_number: Option<String>,
    /// Name, VAT number and customer reference, raw as returned.
    pub invoicee: Option<Value>,
    #[serde(default)]
    pub discounts: Vec<Value>,
    #[serde(default)]
    pub grouped_lines: Vec<Value>,
    /// Totals block (`tax_exclusive`, `tax_inclusive`, `payable`, `due`, …).
    pub total: Option<Value>,
    pub payment_term: Option<PaymentTerm>,
    #[serde(default)]
    pub payments: Vec<Value>,
    pub payment_reference: Option<String>,
    pub note: Option<String>,
    /// ISO 4217.
    pub currency: Option<String>,
    pub currency_exchange_rate: Option<Value>,
    pub deal: Option<TypeAndId>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub delivery_date: Option<String>,
}

impl Invoice {
    pub fn is_draft(&self) -> bool {
        self.status.as_deref() == Some("draft")
    }

    /// The outstanding `due` amount from the totals block, if present.
    pub fn total_due(&self) -> Option<Money> {
        self.total
            .as_ref()
            .and_then(|t| t.get("due"))
            .and_then(|due| serde_json::from_value(due.clone()).ok())
    }
}
