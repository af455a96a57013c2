//! Site-wide stages run after every post is written.

use crate::build::index::{update_index, update_sitemap};
use crate::build::pipeline::{FinalizeStage, PipelineContext, PipelineError};

/// Rebuild the post list of the index page.
pub struct IndexStage;

impl FinalizeStage for IndexStage {
    fn name(&self) -> &'static str {
        "index"
    }

    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        update_index(ctx.config, ctx.renderer, ctx.today)?;
        Ok(())
    }
}

/// Rebuild the URL list of the sitemap.
pub struct SitemapStage;

impl FinalizeStage for SitemapStage {
    fn name(&self) -> &'static str {
        "sitemap"
    }

    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        update_sitemap(ctx.config, ctx.today)?;
        Ok(())
    }
}
