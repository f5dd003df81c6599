// SPDX-License-Identifier: MIT

//! Deals resource: CRUD plus status transitions and pipeline reference data.

use std::ops::Deref;

use serde_json::{json, Map, Value};

use crate::client::TeamleaderClient;
use crate::error::{Error, Result};
use crate::models::{Deal, DealPhase, DealSource};
use crate::resources::base::CrudResource;

/// Optional details for [`DealsResource::lose`].
#[derive(Debug, Clone, Default)]
pub struct LoseOptions {
    /// UUID of a configured lost-reason.
    pub reason_id: Option<String>,
    /// Free-text explanation (e.g. "Too expensive").
    pub extra_info: Option<String>,
}

/// CRUD + extra actions for Teamleader deals.
pub struct DealsResource<'a> {
    crud: CrudResource<'a, Deal>,
}

impl<'a> DealsResource<'a> {
    pub(crate) fn new(client: &'a TeamleaderClient) -> Self {
        Self {
            crud: CrudResource::new(client, "deals"),
        }
    }

    /// Move a deal to a different pipeline phase via `deals.move`.
    pub async fn move_to_phase(&self, deal_id: &str, phase_id: &str) -> Result<()> {
        self.crud
            .client()
            .post(
                "deals.move",
                Some(&json!({"id": deal_id, "phase_id": phase_id})),
            )
            .await?;
        Ok(())
    }

    /// Mark a deal as won via `deals.win`.
    pub async fn win(&self, deal_id: &str) -> Result<()> {
        self.crud
            .client()
            .post("deals.win", Some(&json!({"id": deal_id})))
            .await?;
        Ok(())
    }

    /// Mark a deal as lost via `deals.lose`. Optional fields are omitted
    /// from the body entirely when not set.
    pub async fn lose(&self, deal_id: &str, opts: LoseOptions) -> Result<()> {
        let mut body = Map::new();
        body.insert("id".to_string(), json!(deal_id));
        if let Some(reason_id) = opts.reason_id {
            body.insert("reason_id".to_string(), json!(reason_id));
        }
        if let Some(extra_info) = opts.extra_info {
            body.insert("extra_info".to_string(), json!(extra_info));
        }
        self.crud
            .client()
            .post("deals.lose", Some(&Value::Object(body)))
            .await?;
        Ok(())
    }

    /// All deal phases from `dealPhases.list`, optionally filtered to one
    /// pipeline or a set of phase IDs.
    pub async fn list_phases(
        &self,
        deal_pipeline_id: Option<&str>,
        ids: Option<&[&str]>,
    ) -> Result<Vec<DealPhase>> {
        let mut filter = Map::new();
        if let Some(pipeline_id) = deal_pipeline_id {
            filter.insert("deal_pipeline_id".to_string(), json!(pipeline_id));
        }
        if let Some(ids) = ids {
            filter.insert("ids".to_string(), json!(ids));
        }
        let body = if filter.is_empty() {
            None
        } else {
            Some(json!({"filter": filter}))
        };

        let resp = self
            .crud
            .client()
            .post("dealPhases.list", body.as_ref())
            .await?;
        deserialize_data(resp)
    }

    /// All deal sources from `dealSources.list`.
    pub async fn list_sources(&self, ids: Option<&[&str]>) -> Result<Vec<DealSource>> {
        let body = ids.map(|ids| json!({"filter": {"ids": ids}}));
        let resp = self
            .crud
            .client()
            .post("dealSources.list", body.as_ref())
            .await?;
        deserialize_data(resp)
    }
}

fn deserialize_data<T: serde::de::DeserializeOwned>(resp: Value) -> Result<Vec<T>> {
    let data = resp
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::UnexpectedResponse("list response missing `data` array".into()))?;
    data.iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(Error::from))
        .collect()
}

impl<'a> Deref for DealsResource<'a> {
    type Target = CrudResource<'a, Deal>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
