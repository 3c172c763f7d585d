//! Post models derived from store documents

use serde::{Deserialize, Serialize};

use super::richtext::RichText;
use crate::cms::Document;

/// A post as it appears in the home page list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// URL-friendly unique name
    pub uid: String,

    /// First publication timestamp (ISO-8601); None while unpublished
    pub first_publication_date: Option<String>,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Post author
    pub author: String,
}

impl PostSummary {
    /// Build a summary from a store document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: doc.uid.clone().unwrap_or_default(),
            first_publication_date: doc.first_publication_date.clone(),
            title: doc.data.title.clone(),
            subtitle: doc.data.subtitle.clone(),
            author: doc.data.author.clone(),
        }
    }
}

/// One content section of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section heading; may be empty
    pub heading: String,

    /// Section body
    pub body: RichText,
}

/// A fully fetched post, as rendered on the detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    pub first_publication_date: Option<String>,
    pub last_publication_date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,

    /// Banner image URL
    pub banner_url: String,

    /// Ordered content sections
    pub content: Vec<ContentSection>,
}

impl PostDetail {
    /// Build a detail view from a store document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: doc.uid.clone().unwrap_or_default(),
            first_publication_date: doc.first_publication_date.clone(),
            last_publication_date: doc.last_publication_date.clone(),
            title: doc.data.title.clone(),
            subtitle: doc.data.subtitle.clone(),
            author: doc.data.author.clone(),
            banner_url: doc.data.banner.url.clone(),
            content: doc
                .data
                .content
                .iter()
                .map(|slice| ContentSection {
                    heading: slice.heading.clone(),
                    body: RichText(slice.body.clone()),
                })
                .collect(),
        }
    }

    /// Whether the post was republished after its first publication
    pub fn was_edited(&self) -> bool {
        match (&self.first_publication_date, &self.last_publication_date) {
            (Some(first), Some(last)) => first != last,
            _ => false,
        }
    }
}

/// A navigation target to an adjacent post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPost {
    pub uid: String,
    pub title: String,
}

impl AdjacentPost {
    /// Build a navigation target from a store document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: doc.uid.clone().unwrap_or_default(),
            title: doc.data.title.clone(),
        }
    }
}

/// Links to the chronologically adjacent posts, derived per post view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    /// Nearest post published before this one
    pub previous: Option<AdjacentPost>,

    /// Nearest post published after this one
    pub next: Option<AdjacentPost>,
}
