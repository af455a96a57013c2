//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};

/// Stage that renders each markdown body to an HTML fragment.
///
/// After this stage, `post.content_html` holds the rendered body.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            post.content_html = render_markdown(&post.markdown);
        }

        Ok(())
    }
}
