//! HTML surgery: head injection and marker splicing.

use std::sync::LazyLock;

use kuchikiki::NodeRef;
use kuchikiki::traits::*;
use regex::Regex;

use crate::error::Hint;

/// Indentation of elements inserted into `<head>`.
const HEAD_INDENT: &str = "    ";

static HEAD_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(\s[^>]*)?>").expect("head pattern is valid"));

/// Comments and raw-text elements, where a `<head>` is not a tag.
static NON_MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("non-markup pattern is valid")
});

#[derive(thiserror::Error, Debug)]
pub enum InjectError {
    #[error("no head tag found in template")]
    NoHead,

    #[error("marker not found: {0}")]
    MarkerNotFound(String),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] std::io::Error),
}

impl Hint for InjectError {
    fn hint(&self) -> Option<String> {
        match self {
            InjectError::NoHead => Some("Add a <head> element to the post template".to_string()),
            InjectError::MarkerNotFound(marker) => Some(format!(
                "Add {marker} where the generated content should go"
            )),
            InjectError::Serialize(_) => None,
        }
    }
}

/// Insert a canonical link and SEO tags into the `<head>` of a document.
///
/// The canonical link goes right after `<meta charset>` when present,
/// otherwise it becomes the first child of `<head>`. Every element of
/// `meta_tags_html` is appended to the end of `<head>`; comments and text of
/// the fragment are dropped.
pub fn inject_meta_tags_and_canonical(
    html: &str,
    meta_tags_html: &str,
    canonical_url: &str,
) -> Result<String, InjectError> {
    // The HTML parser synthesizes a head, so check the source itself
    if !has_head_tag(html) {
        return Err(InjectError::NoHead);
    }

    let document = kuchikiki::parse_html().one(html);
    let head = document
        .select_first("head")
        .map_err(|_| InjectError::NoHead)?;
    let head = head.as_node();

    let canonical = canonical_link(canonical_url).ok_or(InjectError::NoHead)?;
    if let Ok(charset) = head.select_first("meta[charset]") {
        charset.as_node().insert_after(canonical);
        charset.as_node().insert_after(indent_node());
    } else {
        head.prepend(canonical);
        head.prepend(indent_node());
    }

    for element in fragment_head_elements(meta_tags_html) {
        head.append(indent_node());
        head.append(element);
    }
    head.append(NodeRef::new_text("\n"));

    let mut out = Vec::new();
    document.serialize(&mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn has_head_tag(html: &str) -> bool {
    HEAD_TAG_RE.is_match(&NON_MARKUP_RE.replace_all(html, ""))
}

fn indent_node() -> NodeRef {
    NodeRef::new_text(format!("\n{HEAD_INDENT}"))
}

/// Build a detached `<link rel="canonical">` node.
fn canonical_link(url: &str) -> Option<NodeRef> {
    let escaped = url.replace('&', "&amp;").replace('"', "&quot;");
    let html = format!(r#"<link rel="canonical" href="{escaped}">"#);
    fragment_head_elements(&html).into_iter().next()
}

/// Parse head-level markup (meta, link, script) and detach its elements.
fn fragment_head_elements(markup: &str) -> Vec<NodeRef> {
    let fragment = kuchikiki::parse_html().one(markup);
    let Ok(head) = fragment.select_first("head") else {
        return Vec::new();
    };
    let elements: Vec<NodeRef> = head
        .as_node()
        .children()
        .filter(|node| node.as_element().is_some())
        .collect();
    for element in &elements {
        element.detach();
    }
    elements
}

/// Replace the text strictly between two markers.
///
/// The replacement is surrounded by newlines. Everything up to and including
/// `start_marker`, and from `end_marker` on, is kept byte for byte. The end
/// marker is searched after the start marker. When the end marker opens its
/// own line, its indentation is kept.
pub fn splice_between_markers(
    document: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String, InjectError> {
    let start = document
        .find(start_marker)
        .ok_or_else(|| InjectError::MarkerNotFound(start_marker.to_string()))?;
    let content_start = start + start_marker.len();
    let end = document[content_start..]
        .find(end_marker)
        .map(|offset| content_start + offset)
        .ok_or_else(|| InjectError::MarkerNotFound(end_marker.to_string()))?;

    let end_indent = document[content_start..end]
        .rfind('\n')
        .map(|newline| &document[content_start + newline + 1..end])
        .filter(|indent| indent.trim().is_empty())
        .unwrap_or("");

    let mut out = String::with_capacity(document.len() + replacement.len() + 2);
    out.push_str(&document[..content_start]);
    out.push('\n');
    out.push_str(replacement);
    out.push('\n');
    out.push_str(end_indent);
    out.push_str(&document[end..]);
    Ok(out)
}

/// Leading whitespace of the line holding `marker`.
pub fn marker_indent<'a>(document: &'a str, marker: &str) -> &'a str {
    let Some(pos) = document.find(marker) else {
        return "";
    };
    let line_start = document[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &document[line_start..pos];
    let indent_len = line.len() - line.trim_start().len();
    &line[..indent_len]
}

/// Indent every non-empty line of a block.
pub fn indent_block(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
