//! Page rendering
//!
//! String-template rendering of the home page, the post detail page and
//! the loading placeholder used for fallback responses.

use crate::comments::CommentWidget;
use crate::config::SiteConfig;
use crate::content::{NavigationLinks, PostDetail, PostSummary};
use crate::helpers::{
    encode_url, estimate_reading_time, format_date, format_date_time, full_url_for, html_escape,
    post_url, url_for,
};

/// Render the home page: post list plus the load-more control while a
/// next page exists
pub fn render_home(config: &SiteConfig, posts: &[PostSummary], next_page: Option<&str>) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            r#"<a class="post-summary" href="{href}">
  <strong>{title}</strong>
  <p>{subtitle}</p>
  <div class="post-info">
    <span class="post-date">{date}</span>
    <span class="post-author">{author}</span>
  </div>
</a>
"#,
            href = post_url(config, &post.uid),
            title = html_escape(&post.title),
            subtitle = html_escape(&post.subtitle),
            date = format_date(post.first_publication_date.as_deref()),
            author = html_escape(&post.author),
        ));
    }

    let load_more = match next_page {
        Some(url) => format!(
            r#"<button type="button" class="load-more" data-next-page="{}">Carregar mais posts</button>"#,
            html_escape(url)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<main class="container">
<div class="posts">
{items}</div>
{load_more}
</main>"#
    );

    layout(config, &config.title, Some(""), &body)
}

/// Render a post detail page
pub fn render_post(
    config: &SiteConfig,
    post: &PostDetail,
    navigation: &NavigationLinks,
    preview: bool,
    comments: Option<&CommentWidget>,
) -> String {
    let reading_time = estimate_reading_time(&post.title, &post.content);

    let edited_note = if post.was_edited() {
        format!(
            r#"<span class="edited-note">* editado em {}</span>"#,
            format_date_time(post.last_publication_date.as_deref())
        )
    } else {
        String::new()
    };

    let mut sections = String::new();
    for section in &post.content {
        let heading = if section.heading.is_empty() {
            String::new()
        } else {
            format!("<h2>{}</h2>\n", html_escape(&section.heading))
        };
        sections.push_str(&format!(
            "<section class=\"post-section\">\n{}{}\n</section>\n",
            heading,
            section.body.as_html()
        ));
    }

    let pagination = render_pagination(config, navigation, preview, comments);

    let body = format!(
        r#"<div class="banner"><img src="{banner}" alt="{title}"></div>
<main class="container">
<article class="post">
<h1>{title}</h1>
<div class="post-info">
  <span class="post-date">{date}</span>
  <span class="post-author">{author}</span>
  <span class="reading-time">{reading_time} min</span>
</div>
{edited_note}
{sections}</article>
{pagination}
</main>"#,
        banner = html_escape(&post.banner_url),
        title = html_escape(&post.title),
        date = format_date(post.first_publication_date.as_deref()),
        author = html_escape(&post.author),
    );

    let canonical_path = format!("post/{}/", encode_url(&post.uid));
    layout(config, &post.title, Some(&canonical_path), &body)
}

/// Render the loading placeholder served for not-yet-generated posts
pub fn render_fallback(config: &SiteConfig) -> String {
    layout(
        config,
        &config.title,
        None,
        r#"<main class="container"><p class="loading">Carregando...</p></main>"#,
    )
}

/// Adjacent post links, comments mount and preview exit
fn render_pagination(
    config: &SiteConfig,
    navigation: &NavigationLinks,
    preview: bool,
    comments: Option<&CommentWidget>,
) -> String {
    let mut out = String::from("<div class=\"pagination\">\n");

    if !preview {
        let mut links = String::new();
        if let Some(previous) = &navigation.previous {
            links.push_str(&format!(
                r#"<li><a href="{}"><span>{}</span><strong>Post anterior</strong></a></li>
"#,
                post_url(config, &previous.uid),
                html_escape(&previous.title),
            ));
        }
        if let Some(next) = &navigation.next {
            links.push_str(&format!(
                r#"<li class="next-post"><a href="{}"><span>{}</span><strong>Próximo Post</strong></a></li>
"#,
                post_url(config, &next.uid),
                html_escape(&next.title),
            ));
        }
        if !links.is_empty() {
            out.push_str(&format!("<ul>\n{links}</ul>\n"));
        }
    }

    out.push_str("<div id=\"comments\">");
    if let Some(widget) = comments {
        out.push_str(&widget.script_tag());
    }
    out.push_str("</div>\n");

    if preview {
        out.push_str(&format!(
            r#"<a class="exit-preview" href="{}"><span>Sair do modo Preview</span></a>
"#,
            url_for(config, "api/exit-preview")
        ));
    }

    out.push_str("</div>");
    out
}

/// Shared page shell with the site header
fn layout(config: &SiteConfig, title: &str, canonical_path: Option<&str>, body: &str) -> String {
    let canonical = match canonical_path {
        Some(path) => format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            html_escape(&full_url_for(config, path))
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{canonical}</head>
<body>
<header class="header">
  <a href="{home}"><img src="{logo}" alt="logo"></a>
</header>
{body}
</body>
</html>
"#,
        title = html_escape(title),
        home = url_for(config, ""),
        logo = url_for(config, "images/logo.svg"),
    )
}
