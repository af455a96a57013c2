//! Markdown rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML fragment.
///
/// Standard CommonMark block and inline rules, plus tables and
/// strikethrough. Empty input renders to an empty string.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("# Hello\n\nWorld with *emphasis* and [a link](https://example.com)");

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains(
            "<p>World with <em>emphasis</em> and <a href=\"https://example.com\">a link</a></p>"
        ));
    }

    #[test]
    fn test_render_code_block() {
        let html = render_markdown("```rust\nlet x = 1;\n```");

        assert!(html.contains("<pre><code class=\"language-rust\">let x = 1;"));
    }

    #[test]
    fn test_render_image_and_list() {
        let html = render_markdown("- one\n- two\n\n![alt text](hero.jpg)");

        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<img src=\"hero.jpg\" alt=\"alt text\" />"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
