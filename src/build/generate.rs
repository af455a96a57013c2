//! Generation of one post folder.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::document::find_post_files;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingPost};
use super::render::Renderer;
use super::validate::validate_generate_environment;
use crate::config::Config;

/// Outcome of a successful [`generate_post`] run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Pages written, one per language file
    pub outputs: Vec<PathBuf>,
    /// Whether the index post list was rebuilt
    pub index_updated: bool,
    /// Whether the sitemap was rebuilt
    pub sitemap_updated: bool,
}

impl GenerationReport {
    pub fn generated(&self) -> usize {
        self.outputs.len()
    }
}

/// Generate every language file of `content/{post_name}/`, then rebuild the
/// index and sitemap when they are enabled.
pub fn generate_post(config: &Config, post_name: &str) -> Result<GenerationReport, PipelineError> {
    generate_post_as_of(config, post_name, Local::now().date_naive())
}

pub fn generate_post_as_of(
    config: &Config,
    post_name: &str,
    today: NaiveDate,
) -> Result<GenerationReport, PipelineError> {
    validate_generate_environment(config, post_name)?;

    let folder = config.paths.content_folder.join(post_name);
    let files = find_post_files(&folder).map_err(|source| PipelineError::Read {
        path: folder.clone(),
        source,
    })?;
    if files.is_empty() {
        return Err(PipelineError::NoPostFiles(folder));
    }
    log::info!("generating {} file(s) from {}", files.len(), folder.display());

    let mut posts: Vec<ProcessingPost> = files.into_iter().map(ProcessingPost::new).collect();
    let renderer = Renderer::new();
    let ctx = PipelineContext::new(config, &renderer, today);
    let pipeline = Pipeline::for_config(config);
    log::debug!("pipeline stages: {}", pipeline.stage_names().join(" → "));
    pipeline.run(&mut posts, &ctx)?;

    Ok(GenerationReport {
        outputs: posts.into_iter().filter_map(|post| post.output_path).collect(),
        index_updated: config.index.is_enabled(),
        sitemap_updated: config.sitemap.is_enabled(),
    })
}
