use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use super::post::EnrichedPost;
use crate::error::Hint;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("error loading template '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error rendering template '{}': {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },
}

impl Hint for RenderError {
    fn hint(&self) -> Option<String> {
        match self {
            RenderError::NotFound(_) => Some("Run 'bw scaffold' to create it".to_string()),
            RenderError::Read { .. } => None,
            RenderError::Render { .. } => Some(
                "Check the template syntax and that all required variables are available"
                    .to_string(),
            ),
        }
    }
}

/// The template renderer, wrapping MiniJinja.
///
/// Templates are read from disk on every call, there is no cache. Output is
/// never auto-escaped (`content` holds rendered HTML) and undefined
/// variables, including attribute lookups on them, render as empty strings.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        Self { env }
    }

    /// Render the template at `path` with a serializable context.
    pub fn render_file<S: Serialize>(&self, path: &Path, context: S) -> Result<String, RenderError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(RenderError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.env
            .render_str(&source, context)
            .map_err(|source| RenderError::Render {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Render a post page template.
    pub fn render_post(&self, path: &Path, post: &EnrichedPost) -> Result<String, RenderError> {
        self.render_file(path, post.template_context())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::{sample_config, sample_post};

    fn enriched(config: &crate::config::Config) -> EnrichedPost {
        EnrichedPost::new(
            sample_post(),
            "This is the content.",
            "<h1>My Awesome Post</h1><p>This is the content.</p>".to_string(),
            config,
        )
    }

    #[test]
    fn test_render_post_variables() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        let template = dir.path().join("post.html");
        std::fs::write(
            &template,
            r#"<html lang="{{ lang }}"><title>{{ title }}</title>
<time datetime="{{ published_datetime_iso }}">{{ published_on_date }}</time>
<p>{{ published_date }}</p><img src="{{ image_path }}">
<div>{{ content }}</div></html>"#,
        )
        .unwrap();

        let html = Renderer::new()
            .render_post(&template, &enriched(&config))
            .unwrap();
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>My Awesome Post</title>"));
        assert!(html.contains(
            r#"<time datetime="2025-10-23T00:00:00Z">Published on October 23, 2025</time>"#
        ));
        assert!(html.contains("<p>2025-10-23</p>"));
        assert!(html.contains(r#"<img src="assets/logo.png">"#));
        assert!(html.contains("<div><h1>My Awesome Post</h1><p>This is the content.</p></div>"));
    }

    #[test]
    fn test_undefined_renders_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        let template = dir.path().join("post.html");
        std::fs::write(&template, "[{{ missing }}][{{ missing.deeper }}][{{ title }}]").unwrap();

        let html = Renderer::new()
            .render_post(&template, &enriched(&config))
            .unwrap();
        assert_eq!(html, "[][][My Awesome Post]");
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        let result = Renderer::new().render_post(&dir.path().join("nope.html"), &enriched(&config));
        assert!(matches!(result, Err(RenderError::NotFound(_))));
    }

    #[test]
    fn test_invalid_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        let template = dir.path().join("post.html");
        std::fs::write(&template, "{% if title %}unclosed").unwrap();

        let result = Renderer::new().render_post(&template, &enriched(&config));
        assert!(matches!(result, Err(RenderError::Render { .. })));
    }
}
