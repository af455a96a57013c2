//! Post template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};

/// Stage that renders the post page template around each enriched post.
///
/// After this stage, `post.output_html` contains the complete page, still
/// without SEO tags.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            let enriched = post.enriched.as_ref().ok_or_else(|| {
                PipelineError::stage(
                    "template",
                    format!("'{}' has no metadata (was metadata stage run?)", post.name()),
                )
            })?;

            let html = ctx
                .renderer
                .render_post(&ctx.config.paths.post_template, enriched)?;
            post.output_html = Some(html);
        }

        Ok(())
    }
}
