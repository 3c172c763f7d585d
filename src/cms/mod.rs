//! Document store module - the headless CMS query interface

mod client;
mod document;
mod query;

pub use client::PrismicClient;
pub use document::{Banner, ContentSlice, Document, DocumentData, SearchResponse};
pub use query::{predicates_query, Ordering, Predicate, QueryOptions};

use async_trait::async_trait;

use crate::error::CmsResult;

/// Query interface over the post document store.
///
/// The reqwest-backed [`PrismicClient`] implements this for real builds;
/// tests substitute an in-memory fake. Constructed explicitly and passed
/// down, never held as a module-level singleton.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a predicate query against the store.
    async fn query(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> CmsResult<SearchResponse>;

    /// Fetch a single document by its uid.
    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> CmsResult<Document>;

    /// Fetch a pagination cursor URL as returned in `next_page`.
    async fn fetch_page(&self, url: &str) -> CmsResult<SearchResponse>;
}
