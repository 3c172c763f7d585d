//! URL helper functions

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Percent-encoding set for path segments: unreserved characters
/// (RFC 3986) stay literal so slugs keep their hyphens.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "post/my-post/") // -> "/blog/post/my-post/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "post/my-post/") // -> "https://example.com/blog/post/my-post/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// The site-relative URL of a post's detail page
pub fn post_url(config: &SiteConfig, uid: &str) -> String {
    url_for(config, &format!("post/{}/", encode_url(uid)))
}

/// Encode a URL path segment, leaving unreserved characters alone
pub fn encode_url(path: &str) -> String {
    percent_encoding::utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

/// Decode a percent-encoded request path
pub fn decode_url(path: &str) -> String {
    percent_encoding::percent_decode_str(path)
        .decode_utf8_lossy()
        .into_owned()
}
