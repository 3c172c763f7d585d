//! reqwest-backed document store client

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::query::predicates_query;
use super::{Document, DocumentStore, Predicate, QueryOptions, SearchResponse};
use crate::config::CmsConfig;
use crate::error::{CmsError, CmsResult};

/// HTTP client for a Prismic-style document API.
///
/// The repository master ref is resolved lazily from the API root and
/// cached for the lifetime of the client; a preview ref, when given,
/// takes its place for the whole session.
pub struct PrismicClient {
    api_url: String,
    access_token: Option<String>,
    preview_ref: Option<String>,
    client: reqwest::Client,
    resolved_ref: OnceCell<String>,
}

/// API root payload, reduced to the ref list
#[derive(Debug, Deserialize)]
struct ApiData {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

impl PrismicClient {
    /// Create a client from the CMS config section
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            preview_ref: None,
            client: reqwest::Client::new(),
            resolved_ref: OnceCell::new(),
        }
    }

    /// Switch the client to a preview ref (unpublished content)
    pub fn with_preview_ref(mut self, preview_ref: &str) -> Self {
        self.preview_ref = Some(preview_ref.to_string());
        self
    }

    /// Resolve the ref to query against: the preview ref when set,
    /// otherwise the repository master ref from the API root.
    async fn resolve_ref(&self) -> CmsResult<&str> {
        if let Some(preview) = &self.preview_ref {
            return Ok(preview);
        }

        self.resolved_ref
            .get_or_try_init(|| async {
                let api: ApiData = self.get_json(&self.api_url, &[]).await?;
                api.refs
                    .into_iter()
                    .find(|r| r.is_master_ref)
                    .map(|r| r.reference)
                    .ok_or_else(|| CmsError::MissingMasterRef {
                        api_url: self.api_url.clone(),
                    })
            })
            .await
            .map(String::as_str)
    }

    /// GET a URL with the given query parameters and decode the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> CmsResult<T> {
        let mut request = self.client.get(url).query(params);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        tracing::debug!("GET {} ({} params)", url, params.len());

        let response = request.send().await.map_err(|e| CmsError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(|e| CmsError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl DocumentStore for PrismicClient {
    async fn query(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> CmsResult<SearchResponse> {
        let reference = self.resolve_ref().await?.to_string();

        let mut params = vec![
            ("ref".to_string(), reference),
            ("q".to_string(), predicates_query(predicates)),
        ];
        params.extend(options.to_params());

        let url = format!("{}/documents/search", self.api_url);
        self.get_json(&url, &params).await
    }

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> CmsResult<Document> {
        let uid_path = format!("my.{}.uid", doc_type);
        let predicates = [
            Predicate::at("document.type", doc_type),
            Predicate::at(&uid_path, uid),
        ];

        let response = self
            .query(&predicates, &QueryOptions::default().page_size(1))
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::NotFound {
                doc_type: doc_type.to_string(),
                uid: uid.to_string(),
            })
    }

    async fn fetch_page(&self, url: &str) -> CmsResult<SearchResponse> {
        // next_page URLs already carry ref and query parameters
        self.get_json(url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CmsConfig {
        CmsConfig {
            api_url: "https://demo.cdn.prismic.io/api/v2/".to_string(),
            access_token: None,
            document_type: "posts".to_string(),
            page_size: 20,
        }
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = PrismicClient::new(&test_config());
        assert_eq!(client.api_url, "https://demo.cdn.prismic.io/api/v2");
    }

    #[tokio::test]
    async fn test_preview_ref_skips_master_resolution() {
        let client = PrismicClient::new(&test_config()).with_preview_ref("preview-token");
        // no network call happens for a preview ref
        assert_eq!(client.resolve_ref().await.unwrap(), "preview-token");
    }

    #[test]
    fn test_api_ref_decoding() {
        let json = r#"{ "refs": [
            { "id": "master", "ref": "Yo1577ABCD", "isMasterRef": true },
            { "id": "draft", "ref": "Yo15draft", "label": "draft" }
        ]}"#;
        let api: ApiData = serde_json::from_str(json).unwrap();
        let master = api.refs.iter().find(|r| r.is_master_ref).unwrap();
        assert_eq!(master.reference, "Yo1577ABCD");
    }
}
