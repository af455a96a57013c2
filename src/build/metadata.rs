//! Metadata derived from rendered post content.

use kuchikiki::traits::*;

use super::document::Post;
use super::markdown::render_markdown;
use crate::config::Config;

/// Default length of SEO descriptions.
pub const DESCRIPTION_LENGTH: usize = 155;

/// Extract a plain-text description from a markdown body.
///
/// Headings are dropped, the remaining text nodes are trimmed and joined with
/// single spaces. Text longer than `max_length` characters is cut at the last
/// space within the limit and gets a trailing `...`.
pub fn extract_description(markdown: &str, max_length: usize) -> String {
    let document = kuchikiki::parse_html().one(render_markdown(markdown));

    let headings: Vec<_> = document
        .select("h1, h2, h3, h4, h5, h6")
        .map(|matches| matches.collect())
        .unwrap_or_default();
    for heading in headings {
        heading.as_node().detach();
    }

    let text = document
        .descendants()
        .text_nodes()
        .map(|node| node.borrow().trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    truncate_at_word(&text, max_length)
}

fn truncate_at_word(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_length)
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    let mut truncated = &text[..cut];
    if let Some(last_space) = truncated.rfind(' ').filter(|&pos| pos > 0) {
        truncated = &truncated[..last_space];
    }

    format!("{truncated}...")
}

/// The `src` of the first `<img>` in an HTML fragment.
pub fn extract_first_image(html: &str) -> Option<String> {
    let document = kuchikiki::parse_html().one(html);
    let img = document.select_first("img").ok()?;
    let attributes = img.attributes.borrow();
    attributes
        .get("src")
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}

/// Pick the image used for social cards: the declared post image if it
/// exists under the project root, then the first image of the content, then
/// the site logo. The declared path is returned as written.
pub fn resolve_image(post: &Post, content_html: &str, config: &Config) -> String {
    if let Some(path) = post
        .image_path
        .as_ref()
        .filter(|path| config.resolve(path).is_file())
    {
        return path.display().to_string();
    }
    extract_first_image(content_html).unwrap_or_else(|| config.site.logo_path.clone())
}
