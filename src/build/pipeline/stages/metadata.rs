//! Metadata stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};
use crate::build::post::EnrichedPost;

/// Stage that turns parsed posts into [`EnrichedPost`]s: description, social
/// image, URLs and localized date.
pub struct MetadataStage;

impl Stage for MetadataStage {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            let parsed = post.post.take().ok_or_else(|| {
                PipelineError::stage(
                    "metadata",
                    format!("'{}' was not parsed (was parse stage run?)", post.name()),
                )
            })?;

            let content_html = std::mem::take(&mut post.content_html);
            post.enriched = Some(EnrichedPost::new(
                parsed,
                &post.markdown,
                content_html,
                ctx.config,
            ));
        }

        Ok(())
    }
}
