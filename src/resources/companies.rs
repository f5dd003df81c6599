// SPDX-License-Identifier: MIT

//! Companies resource: CRUD plus tagging.

use std::ops::Deref;

use serde_json::json;

use crate::client::TeamleaderClient;
use crate::error::Result;
use crate::models::Company;
use crate::resources::base::CrudResource;

/// CRUD + extra actions for Teamleader companies.
pub struct CompaniesResource<'a> {
    crud: CrudResource<'a, Company>,
}

impl<'a> CompaniesResource<'a> {
    pub(crate) fn new(client: &'a TeamleaderClient) -> Self {
        Self {
            crud: CrudResource::new(client, "companies"),
        }
    }

    /// Add tags to a company via `companies.tag`.
    pub async fn tag(&self, company_id: &str, tags: &[&str]) -> Result<()> {
        self.crud
            .client()
            .post(
                "companies.tag",
                Some(&json!({"id": company_id, "tags": tags})),
            )
            .await?;
        Ok(())
    }

    /// Remove tags from a company via `companies.untag`.
    pub async fn untag(&self, company_id: &str, tags: &[&str]) -> Result<()> {
        self.crud
            .client()
            .post(
                "companies.untag",
                Some(&json!({"id": company_id, "tags": tags})),
            )
            .await?;
        Ok(())
    }
}

impl<'a> Deref for CompaniesResource<'a> {
    type Target = CrudResource<'a, Company>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
