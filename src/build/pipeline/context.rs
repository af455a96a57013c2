//! Pipeline context for sharing state across stages.

use chrono::NaiveDate;

use crate::build::render::Renderer;
use crate::config::Config;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    pub config: &'a Config,

    /// Template renderer
    pub renderer: &'a Renderer,

    /// Date posts are published as of; later posts stay out of the index
    /// and the sitemap
    pub today: NaiveDate,
}

impl<'a> PipelineContext<'a> {
    pub fn new(config: &'a Config, renderer: &'a Renderer, today: NaiveDate) -> Self {
        Self {
            config,
            renderer,
            today,
        }
    }
}
