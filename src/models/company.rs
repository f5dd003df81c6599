// SPDX-License-Identifier: MIT

//! Company model, curated layer over the Focus companies API.

use serde::Deserialize;

use crate::models::common::{AddressEntry, CustomField, Email, PaymentTerm, Telephone, TypeAndId};

/// A Teamleader Focus company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// "active" | "deactivated"
    #[serde(default)]
    pub status: Option<String>,
    pub business_type: Option<TypeAndId>,
    pub vat_number: Option<String>,
    pub national_identification_number: Option<String>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub telephones: Vec<Telephone>,
    pub website: Option<String>,
    #[serde(default)]
    pub addresses: Vec<AddressEntry>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    /// ISO 639-1 language code.
    pub language: Option<String>,
    pub payment_term: Option<PaymentTerm>,
    pub responsible_user: Option<TypeAndId>,
    /// Markdown.
    pub remarks: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub added_at: Option<String>,
    pub updated_at: Option<String>,
    pub web_url: Option<String>,
}

impl Company {
    /// The address of the "primary"-typed email, or the first one listed.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.kind.as_deref() == Some("primary"))
            .or_else(|| self.emails.first())
            .map(|e| e.email.as_str())
    }
}
