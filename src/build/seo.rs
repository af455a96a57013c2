//! SEO and social meta tags.

use serde_json::json;

use super::post::EnrichedPost;

/// Build the meta tags and JSON-LD block injected into a post's `<head>`.
pub fn generate_seo_tags(post: &EnrichedPost) -> String {
    format!("{}\n\n{}", generate_meta_tags(post), generate_json_ld(post))
}

/// Description, Open Graph and Twitter card tags.
pub fn generate_meta_tags(post: &EnrichedPost) -> String {
    let title = attr(&post.post.title);
    let description = attr(&post.description);
    let url = attr(&post.full_url);
    let image = attr(&post.image_path);
    let lang = attr(&post.post.lang);
    let published = post.published_datetime_iso();

    format!(
        r#"<!-- SEO -->
<meta name="description" content="{description}">

<!-- Open Graph / Facebook -->
<meta property="og:type" content="article">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{url}">
<meta property="og:image" content="{image}">
<meta property="og:locale" content="{lang}">
<meta property="article:published_time" content="{published}">

<!-- Twitter Card -->
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
<meta name="twitter:image" content="{image}">"#
    )
}

/// Structured data describing the post as a schema.org `BlogPosting`.
pub fn generate_json_ld(post: &EnrichedPost) -> String {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.post.title,
        "description": post.description,
        "image": post.image_path,
        "url": post.full_url,
        "inLanguage": post.post.lang,
        "datePublished": post.published_datetime_iso(),
    });

    // `</` would close the script element early
    let body = serde_json::to_string_pretty(&data)
        .unwrap_or_default()
        .replace("</", "<\\/");

    format!("<script type=\"application/ld+json\">\n{body}\n</script>")
}

/// Encode the characters that would end a double-quoted attribute, so the
/// parsed attribute holds exactly the field value.
fn attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
