//! SEO injection stage.

use crate::build::inject::inject_meta_tags_and_canonical;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};
use crate::build::seo::generate_seo_tags;

/// Stage that adds the canonical link, meta tags and JSON-LD to the `<head>`
/// of each rendered page.
pub struct SeoStage;

impl Stage for SeoStage {
    fn name(&self) -> &'static str {
        "seo"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            let name = post.name();
            let (Some(enriched), Some(html)) = (&post.enriched, &mut post.output_html) else {
                return Err(PipelineError::stage(
                    "seo",
                    format!("'{name}' has no output HTML (was template stage run?)"),
                ));
            };

            let tags = generate_seo_tags(enriched);
            *html = inject_meta_tags_and_canonical(html.as_str(), &tags, &enriched.full_url)?;
        }

        Ok(())
    }
}
