//! Incremental post list pagination

use crate::cms::{DocumentStore, SearchResponse};
use crate::content::PostSummary;
use crate::error::CmsResult;

/// Outcome of a [`Paginator::load_more`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// This many summaries were appended
    Appended(usize),
    /// No next page cursor; state untouched
    Exhausted,
    /// A previous call is still in flight; state untouched
    InFlight,
}

/// An incrementally loaded, append-only list of post summaries.
///
/// Holds the summaries fetched so far plus the `next_page` cursor. New
/// pages are appended in fetch order; nothing is sorted or deduplicated.
/// `load_more` is single-flight: a call while another is suspended is a
/// no-op rather than a race.
pub struct Paginator<'a, S: DocumentStore> {
    store: &'a S,
    loaded_posts: Vec<PostSummary>,
    next_page: Option<String>,
    in_flight: bool,
}

impl<'a, S: DocumentStore> Paginator<'a, S> {
    /// Start from the first page of a query response
    pub fn new(store: &'a S, first_page: &SearchResponse) -> Self {
        Self {
            store,
            loaded_posts: first_page
                .results
                .iter()
                .map(PostSummary::from_document)
                .collect(),
            next_page: first_page.next_page.clone(),
            in_flight: false,
        }
    }

    /// The summaries loaded so far, in fetch order
    pub fn posts(&self) -> &[PostSummary] {
        &self.loaded_posts
    }

    /// The cursor for the next fetch, if any
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Whether another page can be loaded
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Fetch the next page and append its results.
    ///
    /// No-op when the list is exhausted or a fetch is already in
    /// flight. A fetch or decode failure is returned to the caller with
    /// the loaded list and cursor untouched, so the call is retryable.
    pub async fn load_more(&mut self) -> CmsResult<LoadMore> {
        if self.in_flight {
            return Ok(LoadMore::InFlight);
        }
        let Some(url) = self.next_page.clone() else {
            return Ok(LoadMore::Exhausted);
        };

        self.in_flight = true;
        let result = self.store.fetch_page(&url).await;
        self.in_flight = false;

        let page = result?;
        let appended = page.results.len();
        self.loaded_posts
            .extend(page.results.iter().map(PostSummary::from_document));
        self.next_page = page.next_page;

        Ok(LoadMore::Appended(appended))
    }

    /// Drain every remaining page, in order
    pub async fn load_all(&mut self) -> CmsResult<()> {
        while self.has_more() {
            self.load_more().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{Document, DocumentData, Predicate, QueryOptions};
    use crate::error::CmsError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn doc(uid: &str) -> Document {
        Document {
            uid: Some(uid.to_string()),
            data: DocumentData {
                title: uid.to_uppercase(),
                ..DocumentData::default()
            },
            ..Document::default()
        }
    }

    fn page(uids: &[&str], next_page: Option<&str>) -> SearchResponse {
        SearchResponse {
            results: uids.iter().map(|u| doc(u)).collect(),
            next_page: next_page.map(String::from),
            ..SearchResponse::default()
        }
    }

    /// Store fake serving canned pages keyed by URL
    struct FakeStore {
        pages: Mutex<Vec<(String, SearchResponse)>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeStore {
        fn new(pages: Vec<(&str, SearchResponse)>) -> Self {
            Self {
                pages: Mutex::new(
                    pages
                        .into_iter()
                        .map(|(url, p)| (url.to_string(), p))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DocumentStore for FakeStore {
        async fn query(
            &self,
            _predicates: &[Predicate],
            _options: &QueryOptions,
        ) -> CmsResult<SearchResponse> {
            unimplemented!("paginator only fetches cursor pages")
        }

        async fn get_by_uid(&self, doc_type: &str, uid: &str) -> CmsResult<Document> {
            Err(CmsError::NotFound {
                doc_type: doc_type.to_string(),
                uid: uid.to_string(),
            })
        }

        async fn fetch_page(&self, url: &str) -> CmsResult<SearchResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            self.pages
                .lock()
                .unwrap()
                .iter()
                .find(|(u, _)| u == url)
                .map(|(_, p)| p.clone())
                .ok_or_else(|| CmsError::MissingMasterRef {
                    api_url: url.to_string(),
                })
        }
    }

    #[tokio::test]
    async fn test_load_more_appends_in_order() {
        let store = FakeStore::new(vec![("page2", page(&["c", "d"], None))]);
        let mut paginator = Paginator::new(&store, &page(&["a", "b"], Some("page2")));

        assert_eq!(paginator.load_more().await.unwrap(), LoadMore::Appended(2));

        let uids: Vec<_> = paginator.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, ["a", "b", "c", "d"]);
        assert_eq!(paginator.next_page(), None);
    }

    #[tokio::test]
    async fn test_exhausted_is_idempotent() {
        let store = FakeStore::new(vec![]);
        let mut paginator = Paginator::new(&store, &page(&["a"], None));

        assert_eq!(paginator.load_more().await.unwrap(), LoadMore::Exhausted);
        assert_eq!(paginator.load_more().await.unwrap(), LoadMore::Exhausted);
        assert_eq!(paginator.posts().len(), 1);
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_is_surfaced_and_state_kept() {
        let store = FakeStore::new(vec![]);
        let mut paginator = Paginator::new(&store, &page(&["a"], Some("missing")));

        assert!(paginator.load_more().await.is_err());
        // state untouched, the call is retryable
        assert_eq!(paginator.posts().len(), 1);
        assert_eq!(paginator.next_page(), Some("missing"));
    }

    #[tokio::test]
    async fn test_load_all_follows_cursors() {
        let store = FakeStore::new(vec![
            ("p2", page(&["b"], Some("p3"))),
            ("p3", page(&["c"], None)),
        ]);
        let mut paginator = Paginator::new(&store, &page(&["a"], Some("p2")));

        paginator.load_all().await.unwrap();

        assert_eq!(paginator.posts().len(), 3);
        assert!(!paginator.has_more());
        assert_eq!(*store.calls.lock().unwrap(), ["p2", "p3"]);
    }

    #[tokio::test]
    async fn test_in_flight_guard() {
        let store = FakeStore::new(vec![("p2", page(&["b"], None))]);
        let mut paginator = Paginator::new(&store, &page(&["a"], Some("p2")));
        paginator.in_flight = true;

        assert_eq!(paginator.load_more().await.unwrap(), LoadMore::InFlight);
        assert_eq!(paginator.posts().len(), 1);

        paginator.in_flight = false;
        assert_eq!(paginator.load_more().await.unwrap(), LoadMore::Appended(1));
    }
}
