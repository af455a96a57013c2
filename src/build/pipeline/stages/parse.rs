//! Front matter parsing stage.

use crate::build::document::parse_post_file;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};

/// Stage that reads each file and validates its front matter.
///
/// After this stage, `post.post` holds the validated metadata and
/// `post.markdown` the body. The first invalid file aborts the run.
pub struct ParseStage;

impl Stage for ParseStage {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            let (parsed, markdown) = parse_post_file(&post.source_path, &ctx.config.root)?;
            log::debug!("parsed {} ({}/{})", post.name(), parsed.lang, parsed.slug);
            post.post = Some(parsed);
            post.markdown = markdown;
        }

        Ok(())
    }
}
