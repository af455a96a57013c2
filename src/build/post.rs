//! Generation-time views of posts and now-entries.

use chrono::NaiveDate;
use serde::Serialize;

use super::date::format_date;
use super::document::{Post, iso_datetime};
use super::metadata::{DESCRIPTION_LENGTH, extract_description, resolve_image};
use crate::config::Config;

/// A post plus everything derived while generating its page.
///
/// URL and locale strings are computed from the active configuration when
/// the post is enriched, so templates and tag generators only read fields.
#[derive(Debug, Clone)]
pub struct EnrichedPost {
    pub post: Post,
    pub description: String,
    /// Declared image, first content image, or logo
    pub image_path: String,
    pub content_html: String,
    pub relative_url: String,
    pub full_url: String,
    pub published_on_date: String,
}

impl EnrichedPost {
    /// Enrich a parsed post with its rendered content.
    pub fn new(post: Post, markdown: &str, content_html: String, config: &Config) -> Self {
        Self {
            description: extract_description(markdown, DESCRIPTION_LENGTH),
            image_path: resolve_image(&post, &content_html, config),
            relative_url: post.relative_url(config),
            full_url: post.full_url(config),
            published_on_date: post.published_on_date(config),
            content_html,
            post,
        }
    }

    pub fn published_datetime_iso(&self) -> String {
        self.post.published_datetime_iso()
    }

    /// Variables exposed to the post template.
    pub fn template_context(&self) -> PostTemplateContext<'_> {
        PostTemplateContext {
            lang: &self.post.lang,
            title: &self.post.title,
            slug: &self.post.slug,
            published_date: self.post.published_date.format("%Y-%m-%d").to_string(),
            published_datetime_iso: self.published_datetime_iso(),
            published_on_date: &self.published_on_date,
            content: &self.content_html,
            image_path: &self.image_path,
            description: &self.description,
            relative_url: &self.relative_url,
            full_url: &self.full_url,
        }
    }
}

/// Context passed to the post template.
#[derive(Debug, Serialize)]
pub struct PostTemplateContext<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub slug: &'a str,
    pub published_date: String,
    pub published_datetime_iso: String,
    pub published_on_date: &'a str,
    pub content: &'a str,
    pub image_path: &'a str,
    pub description: &'a str,
    pub relative_url: &'a str,
    pub full_url: &'a str,
}

/// Context passed to the link template for each post of the index.
#[derive(Debug, Serialize)]
pub struct LinkTemplateContext {
    pub lang: String,
    pub title: String,
    pub slug: String,
    pub relative_url: String,
    pub full_url: String,
    pub published_date: String,
    pub published_datetime_iso: String,
    pub published_on_date: String,
    pub image_path: String,
}

impl LinkTemplateContext {
    pub fn new(post: &Post, config: &Config) -> Self {
        Self {
            lang: post.lang.clone(),
            title: post.title.clone(),
            slug: post.slug.clone(),
            relative_url: post.relative_url(config),
            full_url: post.full_url(config),
            published_date: post.published_date.format("%Y-%m-%d").to_string(),
            published_datetime_iso: post.published_datetime_iso(),
            published_on_date: post.published_on_date(config),
            image_path: post.image_path(config),
        }
    }
}

// =============================================================================
// Now entries
// =============================================================================

/// A dated status update from the now folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Now {
    /// Taken from the `YYYY-MM-DD.md` file name
    pub post_date: NaiveDate,
    /// Rendered HTML of the file body
    pub content: String,
}

impl Now {
    pub fn published_datetime_iso(&self) -> String {
        iso_datetime(self.post_date)
    }

    /// The date in the site's first language (English when none is configured).
    pub fn date_formatted(&self, config: &Config) -> String {
        format_date(
            self.post_date,
            config.site.date_format,
            config.default_language(),
        )
    }

    pub fn template_context(&self, config: &Config) -> NowTemplateContext {
        NowTemplateContext {
            post_date: self.post_date.format("%Y-%m-%d").to_string(),
            published_datetime_iso: self.published_datetime_iso(),
            date_formatted: self.date_formatted(config),
            content: self.content.clone(),
        }
    }
}

/// Context of one now entry, used both for the index entry and for each
/// element of `now_posts` on the now page.
#[derive(Debug, Serialize)]
pub struct NowTemplateContext {
    pub post_date: String,
    pub published_datetime_iso: String,
    pub date_formatted: String,
    pub content: String,
}
