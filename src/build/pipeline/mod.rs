//! Generation pipeline for posts.
//!
//! The pipeline transforms the language files of a post through a series of
//! stages:
//! 1. Parse (front matter validation)
//! 2. Markdown rendering
//! 3. Metadata (description, image, URLs)
//! 4. Template rendering (post page template)
//! 5. SEO (canonical link and meta tags injected into `<head>`)
//! 6. File writing
//!
//! Each stage handles every file before the next one starts, so an invalid
//! translation stops generation before anything is written. Finalize stages
//! run once after all posts are written.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingPost;
pub use error::PipelineError;

use stages::{
    IndexStage, MarkdownStage, MetadataStage, ParseStage, SeoStage, SitemapStage, TemplateStage,
    WriteStage,
};

use crate::config::Config;

/// A stage in the post processing pipeline.
///
/// Stages transform posts sequentially. Each stage receives all posts and
/// can modify them in place before passing to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process posts through this stage.
    fn process(&self, posts: &mut [ProcessingPost], ctx: &PipelineContext)
    -> Result<(), PipelineError>;
}

/// A stage that runs once after all posts are processed.
///
/// Used for site-wide documents rebuilt from the whole content folder: the
/// post index and the sitemap.
pub trait FinalizeStage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Run finalization after all posts are processed and written.
    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError>;
}

/// The post generation pipeline.
///
/// The default pipeline includes: parse → markdown → metadata → template →
/// seo → write, followed by the finalize stages of every enabled feature.
pub struct Pipeline {
    /// Post processing stages (run for each post batch)
    stages: Vec<Box<dyn Stage>>,
    /// Site-wide stages (run once after all posts)
    finalize_stages: Vec<Box<dyn FinalizeStage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            finalize_stages: Vec::new(),
        }
    }

    /// Create the default pipeline for a configuration.
    ///
    /// Index and sitemap stages are only added when the feature is enabled.
    pub fn for_config(config: &Config) -> Self {
        let mut pipeline = Self::new();
        pipeline
            .add_stage(ParseStage)
            .add_stage(MarkdownStage)
            .add_stage(MetadataStage)
            .add_stage(TemplateStage)
            .add_stage(SeoStage)
            .add_stage(WriteStage);

        if config.index.is_enabled() {
            pipeline.add_finalize_stage(IndexStage);
        }
        if config.sitemap.is_enabled() {
            pipeline.add_finalize_stage(SitemapStage);
        }
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Add a finalize stage (runs after all posts are processed).
    pub fn add_finalize_stage<S: FinalizeStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.finalize_stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a set of posts.
    pub fn run(
        &self,
        posts: &mut [ProcessingPost],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            log::debug!("running stage '{}' on {} file(s)", stage.name(), posts.len());
            stage.process(posts, ctx)?;
        }

        for stage in &self.finalize_stages {
            log::debug!("running finalize stage '{}'", stage.name());
            stage.finalize(ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order, finalize stages last.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .map(|s| s.name())
            .chain(self.finalize_stages.iter().map(|s| s.name()))
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Feature;
    use crate::test_data::sample_config;

    #[test]
    fn test_stage_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());

        assert_eq!(
            Pipeline::for_config(&config).stage_names(),
            vec!["parse", "markdown", "metadata", "template", "seo", "write", "index", "sitemap"]
        );
    }

    #[test]
    fn test_disabled_features_have_no_finalize_stage() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sample_config(dir.path());
        config.index = Feature::Disabled;
        config.sitemap = Feature::Disabled;

        let names = Pipeline::for_config(&config).stage_names();
        assert_eq!(names.last(), Some(&"write"));
    }
}
