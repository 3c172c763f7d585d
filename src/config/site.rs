//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,

    // Content source
    pub cms: CmsConfig,

    // Comments
    pub comments: CommentsConfig,
}

/// Headless CMS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// API root, e.g. "https://my-repo.cdn.prismic.io/api/v2"
    pub api_url: String,
    /// Optional access token for private repositories
    pub access_token: Option<String>,
    /// Document type holding blog posts
    pub document_type: String,
    /// Page size for post list queries
    pub page_size: usize,
}

/// Comment widget (utterances) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// GitHub repository backing the comments ("owner/repo"); empty
    /// disables the widget
    pub repo: String,
    /// Issue mapping strategy, e.g. "pathname"
    pub issue_term: String,
    /// Label applied to created issues
    pub label: String,
    /// Widget theme
    pub theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetraveling".to_string(),
            subtitle: String::new(),
            description: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),

            cms: CmsConfig::default(),
            comments: CommentsConfig::default(),
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            access_token: None,
            document_type: "posts".to_string(),
            page_size: 20,
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            issue_term: "pathname".to_string(),
            label: "[Comments]".to_string(),
            theme: "photon-dark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.cms.document_type, "posts");
        assert_eq!(config.cms.page_size, 20);
        assert_eq!(config.comments.issue_term, "pathname");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
title: my blog
cms:
  api_url: https://demo.cdn.prismic.io/api/v2
  page_size: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "my blog");
        assert_eq!(config.cms.api_url, "https://demo.cdn.prismic.io/api/v2");
        assert_eq!(config.cms.page_size, 5);
        assert_eq!(config.cms.document_type, "posts");
        assert_eq!(config.public_dir, "public");
    }
}
