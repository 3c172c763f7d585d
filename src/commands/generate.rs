//! Generate the static site from the document store

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cms::{DocumentStore, Ordering, Predicate, QueryOptions};
use crate::comments::CommentWidget;
use crate::content::PostDetail;
use crate::pagination::Paginator;
use crate::{navigation, render, Blog};

/// Generate the full site against the real client
pub async fn run(blog: &Blog, preview_ref: Option<&str>) -> Result<()> {
    let store = blog.client(preview_ref)?;
    run_with_store(blog, &store, preview_ref.is_some()).await
}

/// Generate the full site against any document store.
///
/// Any store error aborts the build; partial output is never a success.
pub async fn run_with_store<S: DocumentStore>(blog: &Blog, store: &S, preview: bool) -> Result<()> {
    let start = std::time::Instant::now();
    let config = &blog.config;
    let doc_type = &config.cms.document_type;

    let mut options = QueryOptions::default()
        .page_size(config.cms.page_size)
        .order_by(Ordering::descending("document.first_publication_date"));
    options.fetch = vec![
        format!("{doc_type}.title"),
        format!("{doc_type}.subtitle"),
        format!("{doc_type}.author"),
    ];

    let first_page = store
        .query(&[Predicate::at("document.type", doc_type)], &options)
        .await
        .context("failed to query the post list")?;

    // the home page ships the first page plus its cursor, exactly the
    // state a fresh visitor starts from
    let mut paginator = Paginator::new(store, &first_page);
    let home = render::render_home(config, paginator.posts(), paginator.next_page());
    write_page(&blog.public_dir.join("index.html"), &home)?;

    // remaining pages only contribute uids for the path list
    paginator
        .load_all()
        .await
        .context("failed to page through the post list")?;

    let uids: Vec<String> = paginator
        .posts()
        .iter()
        .filter(|p| !p.uid.is_empty())
        .map(|p| p.uid.clone())
        .collect();

    for uid in &uids {
        generate_post(blog, store, uid, preview)
            .await
            .with_context(|| format!("failed to generate post '{}'", uid))?;
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts in {:.2}s",
        uids.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Generate a single post page. Also used by the server's fallback path
/// to build a page in the background.
pub async fn generate_post<S: DocumentStore>(
    blog: &Blog,
    store: &S,
    uid: &str,
    preview: bool,
) -> Result<()> {
    let config = &blog.config;
    let doc_type = &config.cms.document_type;

    let doc = store.get_by_uid(doc_type, uid).await?;
    let post = PostDetail::from_document(&doc);

    let links = navigation::resolve(
        store,
        doc_type,
        post.first_publication_date.as_deref(),
        preview,
    )
    .await?;

    let widget = CommentWidget::from_config(&config.comments);
    let html = render::render_post(config, &post, &links, preview, widget.as_ref());

    let out = blog.public_dir.join("post").join(uid).join("index.html");
    write_page(&out, &html)?;
    tracing::debug!("Wrote {:?}", out);

    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
