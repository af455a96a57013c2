//! Configuration type definitions.
//!
//! `FileConfig` mirrors `boumwave.toml` as written on disk. `Config` is the
//! validated form the generator works with: paths resolved against the
//! project root and optional features collapsed into [`Feature`] variants.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// =============================================================================
// On-disk configuration
// =============================================================================

/// Root of `boumwave.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub paths: PathsSection,
    pub site: SiteSection,
}

/// The `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    /// Folder where HTML templates are stored
    pub template_folder: String,
    /// Folder holding one sub-folder per post
    pub content_folder: String,
    /// Folder where generated posts are written (also used in URLs)
    pub output_folder: String,
    /// Post page template, relative to `template_folder`
    pub post_template: String,
    /// Template rendered once per post in the index list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
    /// Hand-authored index page receiving the post list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_template: Option<String>,
    /// Hand-authored sitemap receiving the URL list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap_template: Option<String>,
    /// Folder of dated status updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now_folder: Option<String>,
    /// Template for the standalone now page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now_template: Option<String>,
    /// Template for the latest now entry shown in the index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now_index_template: Option<String>,
}

/// The `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub languages: Vec<String>,
    pub site_url: String,
    pub logo_path: String,
    pub date_format: DateFormat,
    #[serde(default = "default_posts_start")]
    pub posts_start_marker: String,
    #[serde(default = "default_posts_end")]
    pub posts_end_marker: String,
    #[serde(default = "default_sitemap_start")]
    pub sitemap_start_marker: String,
    #[serde(default = "default_sitemap_end")]
    pub sitemap_end_marker: String,
    #[serde(default = "default_now_start")]
    pub now_start_marker: String,
    #[serde(default = "default_now_end")]
    pub now_end_marker: String,
    #[serde(default)]
    pub translations: BTreeMap<String, Translations>,
}

fn default_posts_start() -> String {
    "<!-- POSTS_START -->".to_string()
}

fn default_posts_end() -> String {
    "<!-- POSTS_END -->".to_string()
}

fn default_sitemap_start() -> String {
    "<!-- SITEMAP_START -->".to_string()
}

fn default_sitemap_end() -> String {
    "<!-- SITEMAP_END -->".to_string()
}

fn default_now_start() -> String {
    "<!-- NOW_START -->".to_string()
}

fn default_now_end() -> String {
    "<!-- NOW_END -->".to_string()
}

/// Per-language strings used in templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    /// Prefix of the publication date, e.g. "Published on"
    pub published_on: String,
}

/// How publication dates are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    Short,
    Medium,
    Long,
    Full,
}

// =============================================================================
// Validated configuration
// =============================================================================

/// An optional part of the site that is either configured or absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature<T> {
    Enabled(T),
    Disabled,
}

impl<T> Feature<T> {
    /// Returns the settings if the feature is enabled.
    pub fn enabled(&self) -> Option<&T> {
        match self {
            Feature::Enabled(settings) => Some(settings),
            Feature::Disabled => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Feature::Enabled(_))
    }
}

/// A pair of literal marker strings delimiting a generated region.
#[derive(Debug, Clone, PartialEq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

/// The post index page.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexFeature {
    /// Document rewritten in place
    pub document: PathBuf,
    /// Template rendered once per post
    pub link_template: PathBuf,
    pub markers: Markers,
}

/// The sitemap document.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapFeature {
    pub document: PathBuf,
    pub markers: Markers,
}

/// The "now" status feed.
#[derive(Debug, Clone, PartialEq)]
pub struct NowFeature {
    /// Folder of `YYYY-MM-DD.md` entries
    pub folder: PathBuf,
    /// Template of the standalone now page
    pub page_template: PathBuf,
    /// Template of the entry shown in the index
    pub entry_template: PathBuf,
    /// Where the now page is written
    pub page_output: PathBuf,
    pub markers: Markers,
}

/// Required folder and template paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
    pub template_folder: PathBuf,
    pub content_folder: PathBuf,
    /// Output folder as written in the config; it doubles as a URL segment.
    pub output_folder: String,
    pub post_template: PathBuf,
}

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub languages: Vec<String>,
    /// Site URL without trailing slash
    pub site_url: String,
    /// Logo path as written in the config, used verbatim in meta tags
    pub logo_path: String,
    pub date_format: DateFormat,
    pub translations: BTreeMap<String, Translations>,
}

/// Validated configuration passed through every generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Project root; relative paths in the config file resolve against it
    pub root: PathBuf,
    pub paths: PathsConfig,
    pub site: SiteConfig,
    pub index: Feature<IndexFeature>,
    pub sitemap: Feature<SitemapFeature>,
    pub now: Feature<NowFeature>,
}

impl Config {
    /// Resolve a path from the config file against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_against(&self.root, path.as_ref())
    }

    /// Directory generated pages are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.paths.output_folder)
    }

    /// The logo path resolved on disk (the configured string is used in URLs).
    pub fn logo_file(&self) -> PathBuf {
        self.resolve(&self.site.logo_path)
    }

    /// Translations for a language; validation guarantees every configured
    /// language has one, posts in other languages get none.
    pub fn translations_for(&self, lang: &str) -> Option<&Translations> {
        self.site.translations.get(lang)
    }

    /// Language used for content that has no language of its own.
    pub fn default_language(&self) -> &str {
        self.site
            .languages
            .first()
            .map(String::as_str)
            .unwrap_or("en")
    }
}

pub(crate) fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}
