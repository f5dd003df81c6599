// SPDX-License-Identifier: MIT

//! Generic CRUD + pagination layer shared by every curated resource.
//!
//! [`CrudResource`] maps the five canonical Teamleader operations
//! (`.list`, `.info`, `.add`, `.update`, `.delete`) onto a model type, and
//! [`Page`] provides cursor-free forward pagination with the filters that
//! produced it captured for continuity.

use std::marker::PhantomData;

use async_stream::try_stream;
use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::client::TeamleaderClient;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};

/// Options for [`CrudResource::list`].
///
/// `filters` are extra top-level body parameters forwarded verbatim to the
/// API (`filter`, `sort`, `includes`, …) and are carried onto the returned
/// [`Page`] so that [`Page::next`] continues with the same query.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub page: u32,
    pub page_size: u32,
    pub filters: Map<String, Value>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: Map::new(),
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Add one extra top-level body parameter, e.g.
    /// `.filter("filter", json!({"email": "a@b.c"}))`.
    pub fn filter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.filters.insert(key.into(), value);
        self
    }
}

/// Generic resource over a model type `M` and an operation-name prefix.
///
/// Cheap to copy since it only borrows the client. Concrete resources
/// ([`crate::resources::ContactsResource`] etc.) wrap one of these and add
/// their domain actions on top.
pub struct CrudResource<'a, M> {
    client: &'a TeamleaderClient,
    prefix: &'static str,
    _model: PhantomData<fn() -> M>,
}

// Manual impls: the derives would wrongly require `M: Clone`/`M: Copy`.
impl<M> Clone for CrudResource<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<M> Copy for CrudResource<'_, M> {}

impl<'a, M: DeserializeOwned> CrudResource<'a, M> {
    pub(crate) fn new(client: &'a TeamleaderClient, prefix: &'static str) -> Self {
        Self {
            client,
            prefix,
            _model: PhantomData,
        }
    }

    /// The transport client this resource posts through.
    pub(crate) fn client(&self) -> &'a TeamleaderClient {
        self.client
    }

    /// Build the full operation path, e.g. `contacts.list`.
    fn path(&self, operation: &str) -> String {
        format!("{}.{}", self.prefix, operation)
    }

    /// Return a single page of results from `{prefix}.list`.
    ///
    /// The page's `total_count` comes from the response's `meta.matches`,
    /// the total across all pages, never the length of the current page.
    pub async fn list(&self, opts: ListOptions) -> Result<Page<'a, M>> {
        let mut body = Map::new();
        body.insert(
            "page".to_string(),
            json!({"size": opts.page_size, "number": opts.page}),
        );
        for (key, value) in &opts.filters {
            body.insert(key.clone(), value.clone());
        }

        let resp = self
            .client
            .post(&self.path("list"), Some(&Value::Object(body)))
            .await?;

        let raw = resp
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::UnexpectedResponse("list response missing `data` array".into()))?;
        let data = raw
            .iter()
            .map(|item| serde_json::from_value(item.clone()))
            .collect::<std::result::Result<Vec<M>, _>>()?;
        let total_count = resp
            .pointer("/meta/matches")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                Error::UnexpectedResponse("list response missing `meta.matches`".into())
            })?;

        Ok(Page {
            data,
            total_count,
            current_page: opts.page,
            page_size: opts.page_size,
            filters: opts.filters,
            resource: *self,
        })
    }

    /// Fetch a single object by ID via `{prefix}.info` (Teamleader's
    /// canonical name for single-object retrieval).
    pub async fn get(&self, id: &str) -> Result<M> {
        let resp = self
            .client
            .post(&self.path("info"), Some(&json!({"id": id})))
            .await?;
        let data = resp
            .get("data")
            .ok_or_else(|| Error::UnexpectedResponse("info response missing `data`".into()))?;
        Ok(serde_json::from_value(data.clone())?)
    }

    /// Create an object via `{prefix}.add` and return it fully populated.
    ///
    /// The API answers `add` with only a minimal `{id, type}` reference, so
    /// the full object is re-fetched via [`CrudResource::get`] before
    /// returning, so callers never see a partially-populated model.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<M> {
        let resp = self
            .client
            .post(&self.path("add"), Some(&Value::Object(fields)))
            .await?;
        let new_id = resp
            .pointer("/data/id")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::UnexpectedResponse("add response missing `data.id`".into()))?
            .to_string();
        self.get(&new_id).await
    }

    /// Update an object via `{prefix}.update` (the API answers with an empty
    /// body), then re-fetch and return the refreshed model.
    pub async fn update(&self, id: &str, fields: Map<String, Value>) -> Result<M> {
        let mut body = Map::new();
        body.insert("id".to_string(), Value::String(id.to_string()));
        for (key, value) in fields {
            body.insert(key, value);
        }
        self.client
            .post(&self.path("update"), Some(&Value::Object(body)))
            .await?;
        self.get(id).await
    }

    /// Delete an object by ID via `{prefix}.delete`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .post(&self.path("delete"), Some(&json!({"id": id})))
            .await?;
        Ok(())
    }

    /// Yield every matching object, fetching pages lazily as the stream is
    /// consumed, never pre-fetching beyond the page currently being read:
    ///
    /// ```rust,ignore
    /// use futures_util::TryStreamExt;
    ///
    /// let mut contacts = std::pin::pin!(client.contacts().iterate(20, Map::new()));
    /// while let Some(contact) = contacts.try_next().await? {
    ///     println!("{}", contact.full_name());
    /// }
    /// ```
    pub fn iterate(
        &self,
        page_size: u32,
        filters: Map<String, Value>,
    ) -> impl Stream<Item = Result<M>> + 'a
    where
        M: 'a,
    {
        let resource = *self;
        try_stream! {
            let mut page = resource
                .list(ListOptions {
                    page: 1,
                    page_size,
                    filters,
                })
                .await?;
            loop {
                for item in page.data.drain(..) {
                    yield item;
                }
                if !page.has_next() {
                    break;
                }
                page = page.next().await?;
            }
        }
    }
}

/// A single page of results from a list endpoint.
pub struct Page<'a, M> {
    /// The deserialized objects on this page.
    pub data: Vec<M>,
    /// Total number of matching objects across **all** pages
    /// (`meta.matches` from the API response).
    pub total_count: u64,
    /// 1-based index of this page.
    pub current_page: u32,
    /// Number of items requested per page.
    pub page_size: u32,

    // Captured for forward-pagination continuity.
    filters: Map<String, Value>,
    resource: CrudResource<'a, M>,
}

impl<M: std::fmt::Debug> std::fmt::Debug for Page<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("data", &self.data)
            .field("total_count", &self.total_count)
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<'a, M: DeserializeOwned> Page<'a, M> {
    /// True when at least one more page exists after this one.
    ///
    /// `current_page * page_size < total_count`, exact even for a final
    /// partial page (5 items at size 20: `1 * 20 < 5` is false) and for
    /// zero results.
    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) * u64::from(self.page_size) < self.total_count
    }

    /// Fetch the next page, forwarding the filters this page was produced
    /// with.
    ///
    /// # Errors
    ///
    /// [`Error::NoMorePages`] when [`Page::has_next`] is false; no request
    /// is made in that case.
    pub async fn next(&self) -> Result<Page<'a, M>> {
        if !self.has_next() {
            return Err(Error::NoMorePages {
                page: self.current_page,
                page_size: self.page_size,
                total_count: self.total_count,
            });
        }
        self.resource
            .list(ListOptions {
                page: self.current_page + 1,
                page_size: self.page_size,
                filters: self.filters.clone(),
            })
            .await
    }
}
