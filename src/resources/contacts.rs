// SPDX-License-Identifier: MIT

//! Contacts resource: CRUD plus tagging and company linking.

use std::ops::Deref;

use serde_json::{json, Map, Value};

use crate::client::TeamleaderClient;
use crate::error::Result;
use crate::models::Contact;
use crate::resources::base::CrudResource;

/// CRUD + extra actions for Teamleader contacts.
pub struct ContactsResource<'a> {
    crud: CrudResource<'a, Contact>,
}

impl<'a> ContactsResource<'a> {
    pub(crate) fn new(client: &'a TeamleaderClient) -> Self {
        Self {
            crud: CrudResource::new(client, "contacts"),
        }
    }

    /// Add tags to a contact via `contacts.tag`. Tags that already exist on
    /// the contact are silently ignored by the API.
    pub async fn tag(&self, contact_id: &str, tags: &[&str]) -> Result<()> {
        self.crud
            .client()
            .post("contacts.tag", Some(&json!({"id": contact_id, "tags": tags})))
            .await?;
        Ok(())
    }

    /// Remove tags from a contact via `contacts.untag`. Absent tags are
    /// silently ignored by the API.
    pub async fn untag(&self, contact_id: &str, tags: &[&str]) -> Result<()> {
        self.crud
            .client()
            .post(
                "contacts.untag",
                Some(&json!({"id": contact_id, "tags": tags})),
            )
            .await?;
        Ok(())
    }

    /// Link a contact to a company via `contacts.linkToCompany`, optionally
    /// recording a job title and decision-maker flag.
    pub async fn link_to_company(
        &self,
        contact_id: &str,
        company_id: &str,
        position: Option<&str>,
        decision_maker: Option<bool>,
    ) -> Result<()> {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(contact_id));
        body.insert("company_id".to_string(), json!(company_id));
        if let Some(position) = position {
            body.insert("position".to_string(), json!(position));
        }
        if let Some(decision_maker) = decision_maker {
            body.insert("decision_maker".to_string(), json!(decision_maker));
        }
        self.crud
            .client()
            .post("contacts.linkToCompany", Some(&Value::Object(body)))
            .await?;
        Ok(())
    }

    /// Remove the link between a contact and a company via
    /// `contacts.unlinkFromCompany`.
    pub async fn unlink_from_company(&self, contact_id: &str, company_id: &str) -> Result<()> {
        self.crud
            .client()
            .post(
                "contacts.unlinkFromCompany",
                Some(&json!({"id": contact_id, "company_id": company_id})),
            )
            .await?;
        Ok(())
    }
}

impl<'a> Deref for ContactsResource<'a> {
    type Target = CrudResource<'a, Contact>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
