// SPDX-License-Identifier: MIT

//! Shared sub-models used across multiple Teamleader resources.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `{type, id}` reference to another API object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeAndId {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Monetary amount with its ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    pub line_1: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub area_level_two_id: Option<String>,
}

/// An address with its role ("primary", "invoicing", …).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddressEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub address: Option<Address>,
}

/// Email contact detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Email {
    pub email: String,
    /// "primary", "invoicing", etc.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Telephone contact detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Telephone {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Payment term applied to invoices for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaymentTerm {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub days: Option<u32>,
}

/// A custom field value: the definition reference plus a free-form value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomField {
    pub definition: Option<TypeAndId>,
    #[serde(default)]
    pub value: Value,
}

/// Pre-signed document download reference from `invoices.download`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownloadLocation {
    pub location: String,
    /// ISO 8601 datetime at which the location stops working.
    pub expires: Option<String>,
}
