//! Shared fixtures for unit tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::build::document::Post;
use crate::config::{
    Config, DateFormat, Feature, IndexFeature, Markers, NowFeature, PathsConfig, SiteConfig,
    SitemapFeature, Translations,
};

pub const POST_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
</head>
<body>
    <article>
        <time datetime="{{ published_datetime_iso }}">{{ published_on_date }}</time>
        {{ content }}
    </article>
</body>
</html>
"#;

pub const LINK_HTML: &str =
    r#"<li><a href="{{ relative_url }}">{{ title }}</a> <time datetime="{{ published_datetime_iso }}">{{ published_on_date }}</time></li>"#;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Blog</title>
</head>
<body>
    <section>
        <!-- NOW_START -->
        <!-- NOW_END -->
    </section>
    <ul>
        <!-- POSTS_START -->
        <!-- POSTS_END -->
    </ul>
</body>
</html>
"#;

pub const SITEMAP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <!-- SITEMAP_START -->
    <!-- SITEMAP_END -->
</urlset>
"#;

pub const NOW_HTML: &str = r#"<html><body>
{% for entry in now_posts %}<article><time datetime="{{ entry.published_datetime_iso }}">{{ entry.date_formatted }}</time>{{ entry.content }}</article>
{% endfor %}</body></html>
"#;

pub const NOW_INDEX_HTML: &str =
    r#"<div class="now"><time datetime="{{ published_datetime_iso }}">{{ date_formatted }}</time>{{ content }}</div>"#;

/// A config rooted at `root` with every feature enabled.
pub fn sample_config(root: &Path) -> Config {
    let templates = root.join("templates");
    let mut translations = BTreeMap::new();
    translations.insert(
        "en".to_string(),
        Translations {
            published_on: "Published on".to_string(),
        },
    );
    translations.insert(
        "fr".to_string(),
        Translations {
            published_on: "Publié le".to_string(),
        },
    );

    Config {
        root: root.to_path_buf(),
        paths: PathsConfig {
            template_folder: templates.clone(),
            content_folder: root.join("content"),
            output_folder: "posts".to_string(),
            post_template: templates.join("post.html"),
        },
        site: SiteConfig {
            languages: vec!["en".to_string(), "fr".to_string()],
            site_url: "https://example.com".to_string(),
            logo_path: "assets/logo.png".to_string(),
            date_format: DateFormat::Long,
            translations,
        },
        index: Feature::Enabled(IndexFeature {
            document: root.join("index.html"),
            link_template: templates.join("link.html"),
            markers: markers("POSTS"),
        }),
        sitemap: Feature::Enabled(SitemapFeature {
            document: root.join("sitemap.xml"),
            markers: markers("SITEMAP"),
        }),
        now: Feature::Enabled(NowFeature {
            folder: root.join("now"),
            page_template: templates.join("now.html"),
            entry_template: templates.join("now_index.html"),
            page_output: root.join("now.html"),
            markers: markers("NOW"),
        }),
    }
}

fn markers(name: &str) -> Markers {
    Markers {
        start: format!("<!-- {name}_START -->"),
        end: format!("<!-- {name}_END -->"),
    }
}

/// The post most tests start from.
pub fn sample_post() -> Post {
    Post {
        title: "My Awesome Post".to_string(),
        slug: "my-awesome-post".to_string(),
        published_date: NaiveDate::from_ymd_opt(2025, 10, 23).unwrap(),
        lang: "en".to_string(),
        image_path: None,
    }
}

/// Write the logo, every template, the feature documents and the now folder.
pub fn write_templates(config: &Config) {
    let write = |path: &Path, content: &str| {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    };

    write(&config.logo_file(), "logo");
    write(&config.paths.post_template, POST_HTML);
    if let Some(index) = config.index.enabled() {
        write(&index.link_template, LINK_HTML);
        write(&index.document, INDEX_HTML);
    }
    if let Some(sitemap) = config.sitemap.enabled() {
        write(&sitemap.document, SITEMAP_XML);
    }
    if let Some(now) = config.now.enabled() {
        write(&now.page_template, NOW_HTML);
        write(&now.entry_template, NOW_INDEX_HTML);
        std::fs::create_dir_all(&now.folder).unwrap();
    }
}

/// Write `content/{folder}/{folder}.{lang}.md` with the given front matter.
pub fn write_post_file(
    config: &Config,
    folder: &str,
    title: &str,
    slug: &str,
    date: &str,
    lang: &str,
) -> PathBuf {
    let dir = config.paths.content_folder.join(folder);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{folder}.{lang}.md"));
    std::fs::write(
        &path,
        format!(
            "---\ntitle: {title}\nslug: {slug}\npublished_date: {date}\nlang: {lang}\n---\n\n# {title}\n\nThis is {title}.\n"
        ),
    )
    .unwrap();
    path
}
