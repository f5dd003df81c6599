// SPDX-License-Identifier: MIT

//! Contact model, curated layer over the Focus contacts API.

use serde::Deserialize;
use serde_json::Value;

use crate::models::common::{AddressEntry, CustomField, Email, PaymentTerm, Telephone};

/// A Teamleader Focus contact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// "active" | "deactivated"
    #[serde(default)]
    pub status: Option<String>,
    pub salutation: Option<String>,
    pub vat_number: Option<String>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub telephones: Vec<Telephone>,
    pub website: Option<String>,
    #[serde(default)]
    pub addresses: Vec<AddressEntry>,
    pub gender: Option<String>,
    /// ISO 8601 date.
    pub birthdate: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub national_identification_number: Option<String>,
    /// Company links, raw as returned by the API.
    #[serde(default)]
    pub companies: Vec<Value>,
    /// ISO 639-1 language code.
    pub language: Option<String>,
    pub payment_term: Option<PaymentTerm>,
    /// Markdown.
    pub remarks: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub marketing_mails_consent: Option<bool>,
    pub added_at: Option<String>,
    pub updated_at: Option<String>,
    pub web_url: Option<String>,
}

impl Contact {
    /// `"First Last"`, with extra whitespace stripped.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The address of the "primary"-typed email, or the first one listed.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.kind.as_deref() == Some("primary"))
            .or_else(|| self.emails.first())
            .map(|e| e.email.as_str())
    }
}
