//! spacetraveling: a static blog generator backed by a headless CMS
//!
//! Posts live in a Prismic-style document store; this crate fetches
//! them over HTTP at build time, renders the home and post pages, and
//! serves the output locally with fallback rendering for pages that
//! have not been generated yet.

pub mod cms;
pub mod comments;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod navigation;
pub mod pagination;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::Path;

use cms::PrismicClient;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Build the document store client, optionally against a preview ref
    pub fn client(&self, preview_ref: Option<&str>) -> Result<PrismicClient> {
        anyhow::ensure!(
            !self.config.cms.api_url.is_empty(),
            "cms.api_url is not configured; set it in _config.yml"
        );

        let client = PrismicClient::new(&self.config.cms);
        Ok(match preview_ref {
            Some(reference) => client.with_preview_ref(reference),
            None => client,
        })
    }

    /// Generate the static site
    pub async fn generate(&self, preview_ref: Option<&str>) -> Result<()> {
        commands::generate::run(self, preview_ref).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
