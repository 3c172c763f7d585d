//! Rich text blocks and their plain-text / HTML projections

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::helpers::html_escape;

/// One rich text block (paragraph, heading, list item, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextBlock {
    /// Block kind, e.g. "paragraph", "heading2", "list-item"
    #[serde(rename = "type")]
    pub kind: String,

    /// Plain text of the block
    pub text: String,

    /// Inline formatting spans, in character offsets
    pub spans: Vec<Span>,
}

/// An inline formatting span over `[start, end)` character offsets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Span {
    pub start: usize,
    pub end: usize,

    /// Span kind: "strong", "em" or "hyperlink"
    #[serde(rename = "type")]
    pub kind: String,

    /// Extra payload (hyperlink target)
    pub data: Option<SpanData>,
}

/// Span payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanData {
    pub url: Option<String>,
}

/// An ordered sequence of rich text blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<RichTextBlock>);

impl RichText {
    /// Flatten all blocks to plain text, blocks joined by a single space.
    /// This is the projection word counting runs on.
    pub fn as_text(&self) -> String {
        self.0
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the blocks as HTML. Consecutive list items are grouped
    /// into a single list element.
    pub fn as_html(&self) -> String {
        let mut html = String::new();
        let mut open_list: Option<&str> = None;

        for block in &self.0 {
            let list_tag = match block.kind.as_str() {
                "list-item" => Some("ul"),
                "o-list-item" => Some("ol"),
                _ => None,
            };

            if open_list != list_tag {
                if let Some(tag) = open_list {
                    html.push_str(&format!("</{}>", tag));
                }
                if let Some(tag) = list_tag {
                    html.push_str(&format!("<{}>", tag));
                }
                open_list = list_tag;
            }

            html.push_str(&block.as_html());
        }

        if let Some(tag) = open_list {
            html.push_str(&format!("</{}>", tag));
        }

        html
    }
}

impl RichTextBlock {
    /// Render a single block as HTML
    pub fn as_html(&self) -> String {
        let inner = apply_spans(&self.text, &self.spans);

        let tag = match self.kind.as_str() {
            "heading1" => "h1",
            "heading2" => "h2",
            "heading3" => "h3",
            "heading4" => "h4",
            "heading5" => "h5",
            "heading6" => "h6",
            "preformatted" => "pre",
            "list-item" | "o-list-item" => "li",
            _ => "p",
        };

        format!("<{tag}>{inner}</{tag}>")
    }
}

/// Apply inline spans to a block's text, escaping everything else.
/// Offsets are character indices; spans are assumed well-nested, which
/// holds for the editor output this consumes.
fn apply_spans(text: &str, spans: &[Span]) -> String {
    let mut opens: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut closes: BTreeMap<usize, Vec<String>> = BTreeMap::new();

    for span in spans {
        let (open, close) = match span.kind.as_str() {
            "strong" => ("<strong>".to_string(), "</strong>".to_string()),
            "em" => ("<em>".to_string(), "</em>".to_string()),
            "hyperlink" => {
                let url = span
                    .data
                    .as_ref()
                    .and_then(|d| d.url.as_deref())
                    .unwrap_or("");
                (format!(r#"<a href="{}">"#, html_escape(url)), "</a>".to_string())
            }
            _ => continue,
        };
        opens.entry(span.start).or_default().push(open);
        closes.entry(span.end).or_default().push(close);
    }

    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        // close before open so adjacent spans don't interleave
        if let Some(tags) = closes.get(&i) {
            for tag in tags.iter().rev() {
                out.push_str(tag);
            }
        }
        if let Some(tags) = opens.get(&i) {
            for tag in tags {
                out.push_str(tag);
            }
        }
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    let end = text.chars().count();
    if let Some(tags) = closes.get(&end) {
        for tag in tags.iter().rev() {
            out.push_str(tag);
        }
    }

    out
}
