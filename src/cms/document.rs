//! Wire types for the document API

use serde::{Deserialize, Serialize};

use crate::content::RichTextBlock;

/// A document as returned by the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// URL-friendly unique name; absent on unpublished drafts
    pub uid: Option<String>,

    /// Timestamp of first publication; null while unpublished
    pub first_publication_date: Option<String>,

    /// Timestamp of the latest publication
    pub last_publication_date: Option<String>,

    /// Typed payload
    pub data: DocumentData,
}

/// The post payload of a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner: Banner,
    pub content: Vec<ContentSlice>,
}

/// Banner image reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub url: String,
}

/// One content section: a heading plus rich text body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSlice {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

/// One page of a search query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub page: u32,
    pub total_pages: u32,
    pub results_size: u32,

    /// Cursor URL for the next page; null when exhausted
    pub next_page: Option<String>,

    /// Documents in store order
    pub results: Vec<Document>,
}
