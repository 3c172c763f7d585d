//! Comment widget (utterances) mounting

use crate::config::CommentsConfig;
use crate::helpers::html_escape;

/// The utterances widget, handed to the renderer as a mount capability.
/// The renderer only places the script tag; the widget itself is an
/// external collaborator.
#[derive(Debug, Clone)]
pub struct CommentWidget {
    repo: String,
    issue_term: String,
    label: String,
    theme: String,
}

impl CommentWidget {
    /// Build the widget from config; None when no repo is configured
    pub fn from_config(config: &CommentsConfig) -> Option<Self> {
        if config.repo.is_empty() {
            return None;
        }
        Some(Self {
            repo: config.repo.clone(),
            issue_term: config.issue_term.clone(),
            label: config.label.clone(),
            theme: config.theme.clone(),
        })
    }

    /// The script tag injected into the `#comments` mount node
    pub fn script_tag(&self) -> String {
        format!(
            concat!(
                r#"<script src="https://utteranc.es/client.js" repo="{}" "#,
                r#"issue-term="{}" label="{}" theme="{}" "#,
                r#"crossorigin="anonymous" async></script>"#
            ),
            html_escape(&self.repo),
            html_escape(&self.issue_term),
            html_escape(&self.label),
            html_escape(&self.theme),
        )
    }
}
