// SPDX-License-Identifier: MIT

//! Deal model and pipeline reference data.

use serde::Deserialize;
use serde_json::Value;

use crate::models::common::{CustomField, Money, TypeAndId};

/// A Teamleader Focus deal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub summary: Option<String>,
    pub reference: Option<String>,
    /// "open" | "won" | "lost"
    #[serde(default)]
    pub status: Option<String>,
    /// `{customer: TypeAndId, contact_person: TypeAndId}`, raw.
    pub lead: Option<Value>,
    pub department: Option<TypeAndId>,
    pub estimated_value: Option<Money>,
    /// ISO 8601 date.
    pub estimated_closing_date: Option<String>,
    /// 0.0 – 1.0
    pub estimated_probability: Option<f64>,
    pub weighted_value: Option<Money>,
    pub purchase_order_number: Option<String>,
    pub current_phase: Option<TypeAndId>,
    pub responsible_user: Option<TypeAndId>,
    pub closed_at: Option<String>,
    pub source: Option<TypeAndId>,
    #[serde(default)]
    pub phase_history: Vec<Value>,
    #[serde(default)]
    pub quotations: Vec<TypeAndId>,
    pub lost_reason: Option<Value>,
    pub pipeline: Option<TypeAndId>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub web_url: Option<String>,
}

impl Deal {
    pub fn is_open(&self) -> bool {
        self.status.as_deref() == Some("open")
    }

    pub fn is_won(&self) -> bool {
        self.status.as_deref() == Some("won")
    }

    pub fn is_lost(&self) -> bool {
        self.status.as_deref() == Some("lost")
    }
}

/// A phase in a deal pipeline, from `dealPhases.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct DealPhase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub actions: Vec<String>,
    pub expected_duration_in_days: Option<u32>,
}

/// A deal source, from `dealSources.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct DealSource {
    pub id: String,
    pub name: String,
}
