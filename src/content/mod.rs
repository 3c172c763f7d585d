//! Content module - post models and rich text handling

mod post;
mod richtext;

pub use post::{AdjacentPost, ContentSection, NavigationLinks, PostDetail, PostSummary};
pub use richtext::{RichText, RichTextBlock, Span, SpanData};
