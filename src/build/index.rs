//! Regeneration of marker-delimited regions: post index, sitemap and now feed.
//!
//! Every updater rebuilds its region from scratch out of the content on disk,
//! so running one twice leaves the document unchanged.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use super::collect::collect_published_posts;
use super::document::Post;
use super::inject::{indent_block, marker_indent, splice_between_markers};
use super::pipeline::PipelineError;
use super::post::{LinkTemplateContext, Now, NowTemplateContext};
use super::render::{RenderError, Renderer};
use crate::config::{Config, IndexFeature, Markers, NowFeature, SitemapFeature};

/// Placeholder written between the post markers when there is nothing to list.
pub const NO_POSTS_PLACEHOLDER: &str = "<!-- No posts yet -->";

/// Placeholder written between the now markers when there is no entry.
pub const NO_NOW_PLACEHOLDER: &str = "<!-- No updates yet -->";

/// Render the link template once per post, newest first.
pub fn render_post_links(
    config: &Config,
    renderer: &Renderer,
    link_template: &Path,
    posts: &[Post],
) -> Result<String, RenderError> {
    if posts.is_empty() {
        return Ok(NO_POSTS_PLACEHOLDER.to_string());
    }

    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.published_date.cmp(&a.published_date));

    let links = sorted
        .into_iter()
        .map(|post| renderer.render_file(link_template, LinkTemplateContext::new(post, config)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(links.join("\n"))
}

/// Replace the region between `markers` in the document at `path`.
///
/// The new entries are indented to the column of the start marker. Text
/// outside the markers is written back untouched.
pub fn update_document(
    path: &Path,
    markers: &Markers,
    entries_html: &str,
) -> Result<(), PipelineError> {
    let document = read_document(path)?;
    let block = indent_block(entries_html, marker_indent(&document, &markers.start));
    let updated = splice_between_markers(&document, &markers.start, &markers.end, &block)?;
    write_document(path, &updated)
}

/// Rewrite the post list of the index document with the posts published
/// as of `today`.
///
/// Returns the number of posts listed.
pub fn update_index(
    config: &Config,
    renderer: &Renderer,
    today: NaiveDate,
) -> Result<usize, PipelineError> {
    let index = index_feature(config)?;
    let posts = collect_published_posts(config, today);
    let links = render_post_links(config, renderer, &index.link_template, &posts)?;
    update_document(&index.document, &index.markers, &links)?;

    log::info!(
        "listed {} post(s) in {}",
        posts.len(),
        index.document.display()
    );
    Ok(posts.len())
}

// =============================================================================
// Sitemap
// =============================================================================

/// `<url>` entries for the site root and every post, newest post first.
pub fn generate_sitemap_urls(config: &Config, posts: &[Post], today: NaiveDate) -> String {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.published_date.cmp(&a.published_date));

    let mut urls = vec![sitemap_url(
        &format!("{}/", config.site.site_url),
        today,
        "weekly",
        "1.0",
    )];
    urls.extend(
        sorted
            .into_iter()
            .map(|post| sitemap_url(&post.full_url(config), post.published_date, "monthly", "0.8")),
    );
    urls.join("\n")
}

fn sitemap_url(loc: &str, lastmod: NaiveDate, changefreq: &str, priority: &str) -> String {
    let loc = loc.replace('&', "&amp;").replace('<', "&lt;");
    format!(
        "    <url>
        <loc>{loc}</loc>
        <lastmod>{}</lastmod>
        <changefreq>{changefreq}</changefreq>
        <priority>{priority}</priority>
    </url>",
        lastmod.format("%Y-%m-%d")
    )
}

/// Rewrite the URL list of the sitemap document.
///
/// The body is spliced as plain text, without reindentation. Returns the
/// number of posts listed.
pub fn update_sitemap(config: &Config, today: NaiveDate) -> Result<usize, PipelineError> {
    let sitemap = sitemap_feature(config)?;
    let posts = collect_published_posts(config, today);
    let urls = generate_sitemap_urls(config, &posts, today);

    let document = read_document(&sitemap.document)?;
    let updated =
        splice_between_markers(&document, &sitemap.markers.start, &sitemap.markers.end, &urls)?;
    write_document(&sitemap.document, &updated)?;

    log::info!(
        "listed {} post(s) in {}",
        posts.len(),
        sitemap.document.display()
    );
    Ok(posts.len())
}

// =============================================================================
// Now feed
// =============================================================================

/// Show the latest now entry in the index, between the now markers.
///
/// `entries` must be sorted newest first, as returned by
/// [`collect_now_entries`](super::collect::collect_now_entries).
pub fn update_now_feed(
    config: &Config,
    renderer: &Renderer,
    entries: &[Now],
) -> Result<(), PipelineError> {
    let now = now_feature(config)?;
    let index = index_feature(config)?;

    let html = match entries.first() {
        Some(latest) => renderer.render_file(&now.entry_template, latest.template_context(config))?,
        None => NO_NOW_PLACEHOLDER.to_string(),
    };
    update_document(&index.document, &now.markers, &html)
}

#[derive(Serialize)]
struct NowPageContext {
    now_posts: Vec<NowTemplateContext>,
}

/// Render every now entry into the standalone now page.
///
/// Returns the path written.
pub fn write_now_page(
    config: &Config,
    renderer: &Renderer,
    entries: &[Now],
) -> Result<PathBuf, PipelineError> {
    let now = now_feature(config)?;
    let context = NowPageContext {
        now_posts: entries
            .iter()
            .map(|entry| entry.template_context(config))
            .collect(),
    };

    let html = renderer.render_file(&now.page_template, context)?;
    write_document(&now.page_output, &html)?;
    Ok(now.page_output.clone())
}

// =============================================================================
// Helpers
// =============================================================================

fn index_feature(config: &Config) -> Result<&IndexFeature, PipelineError> {
    config
        .index
        .enabled()
        .ok_or(PipelineError::Disabled { setting: "index_template" })
}

fn sitemap_feature(config: &Config) -> Result<&SitemapFeature, PipelineError> {
    config
        .sitemap
        .enabled()
        .ok_or(PipelineError::Disabled { setting: "sitemap_template" })
}

fn now_feature(config: &Config) -> Result<&NowFeature, PipelineError> {
    config
        .now
        .enabled()
        .ok_or(PipelineError::Disabled { setting: "now_folder" })
}

fn read_document(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(path: &Path, contents: &str) -> Result<(), PipelineError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    };
    write().map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::inject::InjectError;
    use crate::config::Feature;
    use crate::test_data::{INDEX_HTML, sample_config, write_post_file, write_templates};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn setup() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        write_templates(&config);
        (dir, config)
    }

    #[test]
    fn test_index_lists_posts_newest_first() {
        let (_dir, config) = setup();
        write_post_file(&config, "middle", "Middle", "middle", "2025-06-15", "en");
        write_post_file(&config, "oldest", "Oldest", "oldest", "2025-01-01", "en");
        write_post_file(&config, "newest", "Newest", "newest", "2025-12-31", "fr");

        let count = update_index(&config, &Renderer::new(), today()).unwrap();
        assert_eq!(count, 3);

        let index = config.index.enabled().unwrap();
        let html = std::fs::read_to_string(&index.document).unwrap();
        let newest = html.find("/posts/fr/newest").unwrap();
        let middle = html.find("/posts/en/middle").unwrap();
        let oldest = html.find("/posts/en/oldest").unwrap();
        assert!(newest < middle && middle < oldest);
    }

    #[test]
    fn test_index_update_is_idempotent() {
        let (_dir, config) = setup();
        write_post_file(&config, "first", "First", "first", "2025-03-01", "en");
        write_post_file(&config, "second", "Second", "second", "2025-04-01", "en");
        let renderer = Renderer::new();
        let document = &config.index.enabled().unwrap().document;

        update_index(&config, &renderer, today()).unwrap();
        let once = std::fs::read_to_string(document).unwrap();
        update_index(&config, &renderer, today()).unwrap();
        let twice = std::fs::read_to_string(document).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_index_keeps_text_outside_markers() {
        let (_dir, config) = setup();
        write_post_file(&config, "first", "First", "first", "2025-03-01", "en");
        update_index(&config, &Renderer::new(), today()).unwrap();

        let document = &config.index.enabled().unwrap().document;
        let html = std::fs::read_to_string(document).unwrap();
        let start = "<!-- POSTS_START -->";
        let end = "<!-- POSTS_END -->";
        let prefix = &INDEX_HTML[..INDEX_HTML.find(start).unwrap() + start.len()];
        let suffix = &INDEX_HTML[INDEX_HTML.find(end).unwrap()..];
        assert!(html.starts_with(prefix));
        assert!(html.ends_with(suffix));
        assert!(html.contains("        <!-- POSTS_START -->\n        <li>"));
        assert!(html.contains("</li>\n        <!-- POSTS_END -->"));
    }

    #[test]
    fn test_index_without_posts_has_placeholder() {
        let (_dir, config) = setup();
        let count = update_index(&config, &Renderer::new(), today()).unwrap();
        assert_eq!(count, 0);

        let html = std::fs::read_to_string(&config.index.enabled().unwrap().document).unwrap();
        assert!(html.contains(NO_POSTS_PLACEHOLDER));
    }

    #[test]
    fn test_index_missing_marker() {
        let (_dir, config) = setup();
        let document = &config.index.enabled().unwrap().document;
        std::fs::write(document, "<html><body><!-- POSTS_START --></body></html>").unwrap();

        let result = update_index(&config, &Renderer::new(), today());
        assert!(matches!(
            result,
            Err(PipelineError::Inject(InjectError::MarkerNotFound(_)))
        ));
    }

    #[test]
    fn test_index_disabled() {
        let (_dir, mut config) = setup();
        config.index = Feature::Disabled;
        let result = update_index(&config, &Renderer::new(), today());
        assert!(matches!(result, Err(PipelineError::Disabled { .. })));
    }

    #[test]
    fn test_link_context_variables() {
        let (_dir, config) = setup();
        let link = config.index.enabled().unwrap().link_template.clone();
        std::fs::write(
            &link,
            "{{ lang }}|{{ title }}|{{ relative_url }}|{{ published_datetime_iso }}|{{ published_on_date }}|{{ image_path }}",
        )
        .unwrap();
        let post = crate::test_data::sample_post();

        let html = render_post_links(&config, &Renderer::new(), &link, &[post]).unwrap();
        assert_eq!(
            html,
            "en|My Awesome Post|/posts/en/my-awesome-post|2025-10-23T00:00:00Z|Published on October 23, 2025|assets/logo.png"
        );
    }

    #[test]
    fn test_sitemap_urls() {
        let (_dir, config) = setup();
        let mut older = crate::test_data::sample_post();
        older.slug = "older".to_string();
        older.published_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let newer = crate::test_data::sample_post();

        let xml = generate_sitemap_urls(&config, &[older, newer], today());
        let root = xml.find("<loc>https://example.com/</loc>").unwrap();
        let newer = xml.find("<loc>https://example.com/posts/en/my-awesome-post</loc>").unwrap();
        let older = xml.find("<loc>https://example.com/posts/en/older</loc>").unwrap();
        assert!(root < newer && newer < older);
        assert!(xml.contains("<lastmod>2026-01-01</lastmod>\n        <changefreq>weekly</changefreq>\n        <priority>1.0</priority>"));
        assert!(xml.contains("<lastmod>2025-10-23</lastmod>\n        <changefreq>monthly</changefreq>\n        <priority>0.8</priority>"));
    }

    #[test]
    fn test_update_sitemap_idempotent() {
        let (_dir, config) = setup();
        write_post_file(&config, "first", "First", "first", "2025-03-01", "en");
        let document = &config.sitemap.enabled().unwrap().document;

        assert_eq!(update_sitemap(&config, today()).unwrap(), 1);
        let once = std::fs::read_to_string(document).unwrap();
        update_sitemap(&config, today()).unwrap();
        assert_eq!(once, std::fs::read_to_string(document).unwrap());
        assert!(once.contains("<loc>https://example.com/posts/en/first</loc>"));
        assert!(once.starts_with("<?xml"));
    }

    #[test]
    fn test_now_feed_shows_latest_entry() {
        let (_dir, config) = setup();
        let entries = vec![
            Now {
                post_date: NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
                content: "<p>Latest</p>".to_string(),
            },
            Now {
                post_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                content: "<p>Older</p>".to_string(),
            },
        ];

        update_now_feed(&config, &Renderer::new(), &entries).unwrap();
        let html = std::fs::read_to_string(&config.index.enabled().unwrap().document).unwrap();
        assert!(html.contains(r#"<time datetime="2025-10-28T00:00:00Z">October 28, 2025</time>"#));
        assert!(html.contains("<p>Latest</p>"));
        assert!(!html.contains("<p>Older</p>"));
    }

    #[test]
    fn test_now_page_lists_every_entry() {
        let (_dir, config) = setup();
        let entries = vec![
            Now {
                post_date: NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
                content: "<p>Latest</p>".to_string(),
            },
            Now {
                post_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                content: "<p>Older</p>".to_string(),
            },
        ];

        let path = write_now_page(&config, &Renderer::new(), &entries).unwrap();
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.find("<p>Latest</p>").unwrap() < html.find("<p>Older</p>").unwrap());
        assert!(html.contains("October 1, 2025"));
    }
}
