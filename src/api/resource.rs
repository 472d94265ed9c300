//! Resource Clients
//!
//! The capability interface each page is handed ([`ResourceClient`]), the
//! generic REST implementation over one collection, and the entry client
//! which resolves the referenced category before any write.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::client;
use crate::api::error::ApiResult;
use crate::model::{Category, Entry, Resource};

/// CRUD capability over one resource collection.
///
/// Futures are `!Send` because they run on the single-threaded WASM
/// executor.
#[async_trait(?Send)]
pub trait ResourceClient {
    type Resource: Resource;

    async fn get_all(&self) -> ApiResult<Vec<Self::Resource>>;
    async fn get_by_id(&self, id: u32) -> ApiResult<Self::Resource>;
    async fn create(&self, resource: Self::Resource) -> ApiResult<Self::Resource>;
    async fn update(&self, resource: Self::Resource) -> ApiResult<Self::Resource>;
    async fn delete(&self, id: u32) -> ApiResult<()>;
}

/// REST client for a single resource collection under the API base.
pub struct RestClient<T> {
    collection_url: String,
    _resource: PhantomData<T>,
}

// Derived Clone would require T: Clone even though no T is stored.
impl<T> Clone for RestClient<T> {
    fn clone(&self) -> Self {
        Self {
            collection_url: self.collection_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> RestClient<T> {
    pub fn new(api_base: &str) -> Self {
        Self {
            collection_url: format!("{}/{}", api_base, T::PATH),
            _resource: PhantomData,
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

#[async_trait(?Send)]
impl<T> ResourceClient for RestClient<T>
where
    T: Resource + Serialize + DeserializeOwned + 'static,
{
    type Resource = T;

    async fn get_all(&self) -> ApiResult<Vec<T>> {
        client::get_json(&self.collection_url).await
    }

    async fn get_by_id(&self, id: u32) -> ApiResult<T> {
        client::get_json(&self.item_url(id)).await
    }

    async fn create(&self, resource: T) -> ApiResult<T> {
        client::post_json(&self.collection_url, &resource).await
    }

    async fn update(&self, resource: T) -> ApiResult<T> {
        let id = resource.id().unwrap_or_default();
        // PUT answers with an empty ack; resolve with the resource we sent.
        client::put_json(&self.item_url(id), &resource).await?;
        Ok(resource)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        client::delete(&self.item_url(id)).await
    }
}

pub type CategoryClient = RestClient<Category>;

/// Entry client composed from an entry collection and a category lookup.
///
/// Before create/update, `category` is re-resolved from `category_id` so the
/// payload always carries the matching category object. A failed lookup
/// short-circuits the write.
#[derive(Clone)]
pub struct EntryClient<E = RestClient<Entry>, C = CategoryClient> {
    entries: E,
    categories: C,
}

impl EntryClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            entries: RestClient::new(api_base),
            categories: RestClient::new(api_base),
        }
    }
}

impl<E, C> EntryClient<E, C>
where
    E: ResourceClient<Resource = Entry>,
    C: ResourceClient<Resource = Category>,
{
    #[cfg(test)]
    pub fn with_parts(entries: E, categories: C) -> Self {
        Self { entries, categories }
    }

    async fn resolve_category(&self, mut entry: Entry) -> ApiResult<Entry> {
        let category = self.categories.get_by_id(entry.category_id).await?;
        entry.category = Some(category);
        Ok(entry)
    }
}

#[async_trait(?Send)]
impl<E, C> ResourceClient for EntryClient<E, C>
where
    E: ResourceClient<Resource = Entry>,
    C: ResourceClient<Resource = Category>,
{
    type Resource = Entry;

    async fn get_all(&self) -> ApiResult<Vec<Entry>> {
        self.entries.get_all().await
    }

    async fn get_by_id(&self, id: u32) -> ApiResult<Entry> {
        self.entries.get_by_id(id).await
    }

    async fn create(&self, entry: Entry) -> ApiResult<Entry> {
        let entry = self.resolve_category(entry).await?;
        self.entries.create(entry).await
    }

    async fn update(&self, entry: Entry) -> ApiResult<Entry> {
        let entry = self.resolve_category(entry).await?;
        self.entries.update(entry).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.entries.delete(id).await
    }
}
