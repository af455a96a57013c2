use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::{Config, resolve_against};
use crate::error::Hint;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

static LANG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("language pattern is valid"));

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front matter in '{}'\n  {}", path.display(), format_violations(violations))]
    Invalid {
        path: PathBuf,
        violations: Vec<FieldViolation>,
    },
}

impl Hint for ParseError {
    fn hint(&self) -> Option<String> {
        match self {
            ParseError::Read { .. } => Some("Check that the file exists and is UTF-8".to_string()),
            ParseError::Invalid { .. } => Some(
                "Front matter needs title, slug, published_date and lang between '---' lines"
                    .to_string(),
            ),
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// One rejected front matter field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    Missing,
    Invalid(String),
}

impl FieldViolation {
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::Missing,
        }
    }

    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::Invalid(reason.into()),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "Missing required field: {}", self.field),
            ViolationKind::Invalid(reason) => {
                write!(f, "Invalid field '{}': {}", self.field, reason)
            }
        }
    }
}

// =============================================================================
// Posts
// =============================================================================

/// Validated front matter of one language variant of a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub published_date: NaiveDate,
    pub lang: String,
    /// Declared image as written, relative to the project root; checked to
    /// exist when the post was parsed
    pub image_path: Option<PathBuf>,
}

impl Post {
    /// ISO 8601 datetime at midnight UTC, as used in meta tags.
    pub fn published_datetime_iso(&self) -> String {
        iso_datetime(self.published_date)
    }

    /// `/{output_folder}/{lang}/{slug}`
    pub fn relative_url(&self, config: &Config) -> String {
        format!(
            "/{}/{}/{}",
            config.paths.output_folder, self.lang, self.slug
        )
    }

    pub fn full_url(&self, config: &Config) -> String {
        format!("{}{}", config.site.site_url, self.relative_url(config))
    }

    /// Where the generated page of this post is written.
    pub fn output_path(&self, config: &Config) -> PathBuf {
        config
            .output_dir()
            .join(&self.lang)
            .join(&self.slug)
            .join("index.html")
    }

    /// Translated prefix followed by the localized date, e.g.
    /// "Published on October 23, 2025".
    pub fn published_on_date(&self, config: &Config) -> String {
        let formatted =
            super::date::format_date(self.published_date, config.site.date_format, &self.lang);
        match config.translations_for(&self.lang) {
            Some(translations) => format!("{} {}", translations.published_on, formatted),
            None => formatted,
        }
    }

    /// Declared image, or the site logo.
    pub fn image_path(&self, config: &Config) -> String {
        match &self.image_path {
            Some(path) => path.display().to_string(),
            None => config.site.logo_path.clone(),
        }
    }
}

pub(crate) fn iso_datetime(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

// =============================================================================
// Front matter
// =============================================================================

/// Result of splitting front matter from markdown content.
#[derive(Debug)]
pub struct ParsedContent {
    /// Raw YAML between the delimiters, if the file has a front matter block
    pub front_matter: Option<String>,
    /// The markdown content without the front matter block
    pub content: String,
}

/// Split front matter from markdown content.
///
/// Front matter is a YAML block delimited by `---` at the start of the file:
///
/// ```markdown
/// ---
/// title: My Post
/// slug: my-post
/// published_date: 2025-10-23
/// lang: en
/// ---
///
/// # Content starts here
/// ```
pub fn split_front_matter(content: &str) -> ParsedContent {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let Some(after_opening) = content.strip_prefix("---") else {
        return ParsedContent {
            front_matter: None,
            content: content.to_string(),
        };
    };

    // Find the closing delimiter
    let Some(closing_pos) = after_opening.find("\n---") else {
        return ParsedContent {
            front_matter: None,
            content: content.to_string(),
        };
    };

    let yaml = after_opening[..closing_pos].trim_start_matches(['\r', '\n']);

    // Skip the rest of the closing delimiter line
    let rest = &after_opening[closing_pos + 4..];
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };

    ParsedContent {
        front_matter: Some(yaml.to_string()),
        content: body.trim_start_matches(['\r', '\n']).to_string(),
    }
}

/// Parse a markdown file into its validated post and markdown body.
///
/// A relative `image_path` is looked up under `root`, the project root.
pub fn parse_post_file(path: &Path, root: &Path) -> Result<(Post, String), ParseError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = split_front_matter(&raw);
    let mapping = match parsed.front_matter.as_deref() {
        None => serde_yaml::Mapping::new(),
        Some(yaml) if yaml.trim().is_empty() => serde_yaml::Mapping::new(),
        Some(yaml) => match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
            Ok(serde_yaml::Value::Mapping(mapping)) => mapping,
            Ok(_) => {
                return Err(ParseError::Invalid {
                    path: path.to_path_buf(),
                    violations: vec![FieldViolation::invalid(
                        "front matter",
                        "expected key: value pairs",
                    )],
                });
            }
            Err(e) => {
                return Err(ParseError::Invalid {
                    path: path.to_path_buf(),
                    violations: vec![FieldViolation::invalid(
                        "front matter",
                        format!("not valid YAML: {e}"),
                    )],
                });
            }
        },
    };

    let post = validate_front_matter(&mapping, root).map_err(|violations| ParseError::Invalid {
        path: path.to_path_buf(),
        violations,
    })?;

    Ok((post, parsed.content))
}

/// Check every field of a front matter mapping, collecting all violations.
pub fn validate_front_matter(
    mapping: &serde_yaml::Mapping,
    root: &Path,
) -> Result<Post, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = match string_field(mapping, "title") {
        Field::Value(title) if title.trim().is_empty() => {
            violations.push(FieldViolation::invalid("title", "must not be empty"));
            None
        }
        field => field.into_value("title", &mut violations),
    };

    let slug = string_field(mapping, "slug")
        .into_value("slug", &mut violations)
        .and_then(|slug| {
            if SLUG_RE.is_match(&slug) {
                Some(slug)
            } else {
                violations.push(FieldViolation::invalid(
                    "slug",
                    format!("'{slug}' must be lowercase letters and digits separated by single hyphens"),
                ));
                None
            }
        });

    let published_date = string_field(mapping, "published_date")
        .into_value("published_date", &mut violations)
        .and_then(|date| match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::invalid(
                    "published_date",
                    format!("'{date}' is not a YYYY-MM-DD date"),
                ));
                None
            }
        });

    let lang = string_field(mapping, "lang")
        .into_value("lang", &mut violations)
        .and_then(|lang| {
            if LANG_RE.is_match(&lang) {
                Some(lang)
            } else {
                violations.push(FieldViolation::invalid(
                    "lang",
                    format!("'{lang}' must be exactly two lowercase letters"),
                ));
                None
            }
        });

    let image_path = match string_field(mapping, "image_path") {
        Field::Missing => None,
        Field::WrongType => {
            violations.push(FieldViolation::invalid("image_path", "must be a string"));
            None
        }
        Field::Value(path) => {
            let path = PathBuf::from(path);
            if resolve_against(root, &path).is_file() {
                Some(path)
            } else {
                violations.push(FieldViolation::invalid(
                    "image_path",
                    format!("file '{}' does not exist", path.display()),
                ));
                None
            }
        }
    };

    match (title, slug, published_date, lang) {
        (Some(title), Some(slug), Some(published_date), Some(lang)) if violations.is_empty() => {
            Ok(Post {
                title,
                slug,
                published_date,
                lang,
                image_path,
            })
        }
        _ => Err(violations),
    }
}

enum Field {
    Missing,
    WrongType,
    Value(String),
}

impl Field {
    fn into_value(self, name: &str, violations: &mut Vec<FieldViolation>) -> Option<String> {
        match self {
            Field::Missing => {
                violations.push(FieldViolation::missing(name));
                None
            }
            Field::WrongType => {
                violations.push(FieldViolation::invalid(name, "must be a string"));
                None
            }
            Field::Value(value) => Some(value),
        }
    }
}

/// Read a scalar field as text. Unquoted YAML dates arrive as strings.
fn string_field(mapping: &serde_yaml::Mapping, key: &str) -> Field {
    match mapping.get(key) {
        None | Some(serde_yaml::Value::Null) => Field::Missing,
        Some(serde_yaml::Value::String(s)) => Field::Value(s.clone()),
        Some(_) => Field::WrongType,
    }
}

/// List the markdown files of one post folder, sorted by path.
pub fn find_post_files(post_folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(post_folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_markdown(path))
        .collect();
    files.sort();
    Ok(files)
}

pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("md")
}
