//! Adjacent post navigation

use crate::cms::{DocumentStore, Ordering, Predicate, QueryOptions};
use crate::content::{AdjacentPost, NavigationLinks};
use crate::error::CmsResult;

const PUBLICATION_DATE_PATH: &str = "document.first_publication_date";

/// Resolve the chronologically adjacent posts around a publication
/// timestamp.
///
/// Both directions pick the nearest-by-date neighbour: the "after" query
/// is ordered ascending and the "before" query descending, each limited
/// to a single result. Preview renders skip resolution entirely, as does
/// a post that has no publication timestamp yet.
pub async fn resolve<S: DocumentStore>(
    store: &S,
    doc_type: &str,
    first_publication_date: Option<&str>,
    preview: bool,
) -> CmsResult<NavigationLinks> {
    if preview {
        return Ok(NavigationLinks::default());
    }
    let Some(published_at) = first_publication_date else {
        return Ok(NavigationLinks::default());
    };

    let next = nearest(
        store,
        Predicate::at("document.type", doc_type),
        Predicate::date_after(PUBLICATION_DATE_PATH, published_at),
        Ordering::ascending(PUBLICATION_DATE_PATH),
    )
    .await?;

    let previous = nearest(
        store,
        Predicate::at("document.type", doc_type),
        Predicate::date_before(PUBLICATION_DATE_PATH, published_at),
        Ordering::descending(PUBLICATION_DATE_PATH),
    )
    .await?;

    Ok(NavigationLinks { previous, next })
}

async fn nearest<S: DocumentStore>(
    store: &S,
    type_predicate: Predicate,
    date_predicate: Predicate,
    ordering: Ordering,
) -> CmsResult<Option<AdjacentPost>> {
    let options = QueryOptions::default()
        .fetch(&["posts.title"])
        .page_size(1)
        .order_by(ordering);

    let response = store.query(&[type_predicate, date_predicate], &options).await?;

    Ok(response.results.first().map(AdjacentPost::from_document))
}
