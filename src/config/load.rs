//! Configuration loading from files.
//!
//! This module handles reading `boumwave.toml` and turning it into a
//! validated [`Config`].

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::types::{
    Config, Feature, FileConfig, IndexFeature, Markers, NowFeature, PathsConfig, SiteConfig,
    SitemapFeature, resolve_against,
};
use super::ConfigError;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "boumwave.toml";

/// Name of the standalone now page written at the project root.
const NOW_PAGE_NAME: &str = "now.html";

static LANG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("language pattern is valid"));

impl Config {
    /// Load the config from the command line argument, defaulting to `boumwave.toml`
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(CONFIG_FILE_NAME));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file)
    }

    /// Load and validate the config from a file path.
    ///
    /// The directory holding the file becomes the project root.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let file_config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<FileConfig>()?;

        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::from_file_config(root, file_config)
    }

    /// Validate a deserialized config file, collecting every violation.
    pub fn from_file_config(root: PathBuf, file: FileConfig) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();
        let FileConfig { paths, site } = file;

        for lang in &site.languages {
            if !LANG_RE.is_match(lang) {
                errors.push(format!(
                    "Invalid config 'languages': '{lang}' is not a two-letter lowercase code"
                ));
            }
        }

        let missing: Vec<&str> = site
            .languages
            .iter()
            .filter(|lang| !site.translations.contains_key(lang.as_str()))
            .map(String::as_str)
            .collect();
        if let Some(first) = missing.first() {
            errors.push(format!(
                "Missing translations for language(s): {}. Please add [site.translations.{first}] section in boumwave.toml",
                missing.join(", ")
            ));
        }

        let site_url = site.site_url.trim_end_matches('/').to_string();
        if !(site_url.starts_with("http://") || site_url.starts_with("https://"))
            || site_url.split("://").nth(1).is_none_or(str::is_empty)
        {
            errors.push(format!(
                "Invalid config 'site_url': '{}' is not an http(s) URL",
                site.site_url
            ));
        }

        let template_folder = resolve_against(&root, Path::new(&paths.template_folder));

        let index = match (&paths.index_template, &paths.link_template) {
            (Some(index), Some(link)) => Feature::Enabled(IndexFeature {
                document: resolve_against(&root, Path::new(index)),
                link_template: template_folder.join(link),
                markers: Markers {
                    start: site.posts_start_marker.clone(),
                    end: site.posts_end_marker.clone(),
                },
            }),
            (Some(_), None) => {
                errors.push(
                    "Missing required config: link_template (needed by index_template)".to_string(),
                );
                Feature::Disabled
            }
            (None, _) => Feature::Disabled,
        };

        let sitemap = match &paths.sitemap_template {
            Some(sitemap) => Feature::Enabled(SitemapFeature {
                document: resolve_against(&root, Path::new(sitemap)),
                markers: Markers {
                    start: site.sitemap_start_marker.clone(),
                    end: site.sitemap_end_marker.clone(),
                },
            }),
            None => Feature::Disabled,
        };

        let now = match &paths.now_folder {
            Some(folder) => {
                if paths.now_template.is_none() {
                    errors.push(
                        "Missing required config: now_template (needed by now_folder)".to_string(),
                    );
                }
                if paths.now_index_template.is_none() {
                    errors.push(
                        "Missing required config: now_index_template (needed by now_folder)"
                            .to_string(),
                    );
                }
                match (&paths.now_template, &paths.now_index_template) {
                    (Some(page), Some(entry)) => Feature::Enabled(NowFeature {
                        folder: resolve_against(&root, Path::new(folder)),
                        page_template: template_folder.join(page),
                        entry_template: template_folder.join(entry),
                        page_output: root.join(NOW_PAGE_NAME),
                        markers: Markers {
                            start: site.now_start_marker.clone(),
                            end: site.now_end_marker.clone(),
                        },
                    }),
                    _ => Feature::Disabled,
                }
            }
            None => Feature::Disabled,
        };

        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }

        Ok(Config {
            paths: PathsConfig {
                content_folder: resolve_against(&root, Path::new(&paths.content_folder)),
                output_folder: paths.output_folder.trim_matches('/').to_string(),
                post_template: template_folder.join(&paths.post_template),
                template_folder,
            },
            site: SiteConfig {
                languages: site.languages,
                site_url,
                logo_path: site.logo_path,
                date_format: site.date_format,
                translations: site.translations,
            },
            index,
            sitemap,
            now,
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormat;

    const SAMPLE: &str = r#"
[paths]
template_folder = "templates"
content_folder = "content"
output_folder = "posts"
post_template = "post.html"
link_template = "link.html"
index_template = "index.html"

[site]
languages = ["en", "fr"]
site_url = "https://example.com/"
logo_path = "assets/logo.png"
date_format = "long"

[site.translations.en]
published_on = "Published on"

[site.translations.fr]
published_on = "Publié le"
"#;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, SAMPLE).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.site.site_url, "https://example.com");
        assert_eq!(config.site.date_format, DateFormat::Long);
        assert_eq!(config.paths.post_template, dir.path().join("templates/post.html"));

        let index = config.index.enabled().unwrap();
        assert_eq!(index.document, dir.path().join("index.html"));
        assert_eq!(index.markers.start, "<!-- POSTS_START -->");
        assert!(!config.sitemap.is_enabled());
        assert!(!config.now.is_enabled());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(&dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_aggregates_violations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let broken = SAMPLE
            .replace("https://example.com/", "example.com")
            .replace(r#"languages = ["en", "fr"]"#, r#"languages = ["en", "fr", "DE"]"#)
            .replace(r#"link_template = "link.html""#, "");
        std::fs::write(&path, broken).unwrap();

        let Err(ConfigError::Invalid(errors)) = Config::load_from_file(&path) else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("'DE'")));
        assert!(errors.iter().any(|e| e.contains("Missing translations for language(s): DE")));
        assert!(errors.iter().any(|e| e.contains("site_url")));
        assert!(errors.iter().any(|e| e.contains("link_template")));
    }

    #[test]
    fn test_now_feature_requires_templates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let with_now = SAMPLE.replace(
            r#"index_template = "index.html""#,
            "index_template = \"index.html\"\nnow_folder = \"now\"",
        );
        std::fs::write(&path, with_now).unwrap();

        let Err(ConfigError::Invalid(errors)) = Config::load_from_file(&path) else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 2);
    }
}
