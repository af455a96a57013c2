//! Shared utility functions.

use std::sync::LazyLock;

use regex::Regex;

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("separator pattern is valid"));
static SLUG_INVALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("slug pattern is valid"));
static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

static FILE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("separator pattern is valid"));
static FILE_INVALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|]"#).expect("file name pattern is valid"));
static REPEATED_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore pattern is valid"));

/// Convert a title to a URL slug.
///
/// "Hello World!" -> "hello-world"
/// "Café au lait" -> "caf-au-lait"
pub fn slugify(s: &str) -> String {
    let s = s.to_lowercase();
    let s = SLUG_SEPARATORS.replace_all(&s, "-");
    let s = SLUG_INVALID.replace_all(&s, "");
    let s = REPEATED_HYPHENS.replace_all(&s, "-");
    s.trim_matches('-').to_string()
}

/// Convert a title to a folder/file name, keeping accented letters.
///
/// "Café au lait" -> "café_au_lait"
pub fn filesify(s: &str) -> String {
    let s = s.to_lowercase();
    let s = FILE_SEPARATORS.replace_all(&s, "_");
    let s = FILE_INVALID.replace_all(&s, "");
    let s = REPEATED_UNDERSCORES.replace_all(&s, "_");
    s.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Awesome Post"), "my-awesome-post");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("snake_case title"), "snake-case-title");
        assert_eq!(slugify("  --Spaces--  "), "spaces");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_filesify() {
        assert_eq!(filesify("My Awesome Post"), "my_awesome_post");
        assert_eq!(filesify("Café au lait"), "café_au_lait");
        assert_eq!(filesify("What? A/B: test"), "what_ab_test");
        assert_eq!(filesify("well-known - title"), "well_known_title");
        assert_eq!(filesify("///"), "");
    }
}
