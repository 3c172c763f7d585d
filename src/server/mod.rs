//! Local server over the generated output, with fallback rendering

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::commands::generate;
use crate::helpers;
use crate::render;
use crate::Blog;

/// Server state
struct ServerState {
    blog: Blog,
}

/// Start the local server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState { blog: blog.clone() });

    let app = Router::new().fallback(fallback_handler).with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serves generated files; an ungenerated post path gets the loading
/// placeholder while generation of that page is attempted in the
/// background. Everything else missing is a plain 404.
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    // hrefs arrive percent-encoded; the filesystem and uid lookups
    // need the decoded form
    let path = helpers::decode_url(request.uri().path());
    let public_dir = &state.blog.public_dir;

    let clean_path = path.trim_matches('/');
    let candidate = if clean_path.is_empty() {
        public_dir.join("index.html")
    } else {
        let direct = public_dir.join(clean_path);
        if direct.is_dir() {
            direct.join("index.html")
        } else {
            direct
        }
    };

    if candidate.exists() {
        let mut service = ServeDir::new(public_dir).append_index_html_on_directories(true);
        return match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        };
    }

    if let Some(uid) = post_uid_from_path(&path) {
        spawn_background_generation(&state.blog, uid);
        return Html(render::render_fallback(&state.blog.config)).into_response();
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

/// Extract the uid of a `/post/<uid>` request path
fn post_uid_from_path(path: &str) -> Option<&str> {
    let uid = path.trim_matches('/').strip_prefix("post/")?;
    let uid = uid.trim_end_matches('/');
    if uid.is_empty() || uid.contains('/') {
        return None;
    }
    Some(uid)
}

/// Try to generate the missing post page in the background; a later
/// request will then hit the generated file.
fn spawn_background_generation(blog: &Blog, uid: &str) {
    let blog = blog.clone();
    let uid = uid.to_string();

    tokio::spawn(async move {
        let store = match blog.client(None) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Fallback generation skipped: {}", e);
                return;
            }
        };
        match generate::generate_post(&blog, &store, &uid, false).await {
            Ok(()) => tracing::info!("Generated fallback page for '{}'", uid),
            Err(e) => tracing::warn!("Fallback generation for '{}' failed: {}", uid, e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    #[test]
    fn test_post_uid_extraction() {
        assert_eq!(post_uid_from_path("/post/hello-world"), Some("hello-world"));
        assert_eq!(post_uid_from_path("/post/hello-world/"), Some("hello-world"));
        assert_eq!(post_uid_from_path("/post/"), None);
        assert_eq!(post_uid_from_path("/post/a/b"), None);
        assert_eq!(post_uid_from_path("/about"), None);
        assert_eq!(post_uid_from_path("/"), None);
    }

    fn test_state(dir: &std::path::Path) -> Arc<ServerState> {
        let config = SiteConfig::default();
        Arc::new(ServerState {
            blog: Blog {
                public_dir: dir.join(&config.public_dir),
                base_dir: dir.to_path_buf(),
                config,
            },
        })
    }

    async fn get(state: Arc<ServerState>, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = fallback_handler(State(state), request).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_unknown_post_gets_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        fs::create_dir_all(&state.blog.public_dir).unwrap();

        let (status, body) = get(state, "/post/not-yet-built/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Carregando..."));
    }

    #[tokio::test]
    async fn test_generated_post_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let post_dir = state.blog.public_dir.join("post").join("hello-world");
        fs::create_dir_all(&post_dir).unwrap();
        fs::write(post_dir.join("index.html"), "<h1>Hello World</h1>").unwrap();

        let (status, body) = get(state.clone(), "/post/hello-world/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello World"));
        assert!(!body.contains("Carregando"));

        // percent-encoded hrefs resolve to the same page
        let (status, body) = get(state, "/post/hello%2Dworld/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello World"));
        assert!(!body.contains("Carregando"));
    }

    #[tokio::test]
    async fn test_non_post_miss_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        fs::create_dir_all(&state.blog.public_dir).unwrap();

        let (status, _) = get(state, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        fs::create_dir_all(&state.blog.public_dir).unwrap();
        fs::write(state.blog.public_dir.join("index.html"), "<p>home</p>").unwrap();

        let (status, body) = get(state, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("home"));
    }
}
