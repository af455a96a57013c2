//! File writing stage.
//!
//! Writes the final HTML output to the filesystem.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingPost, Stage};

/// Stage that writes each page to `{output}/{lang}/{slug}/index.html`,
/// creating any necessary parent directories.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        posts: &mut [ProcessingPost],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for post in posts {
            let name = post.name();
            let (Some(enriched), Some(html)) = (&post.enriched, &post.output_html) else {
                return Err(PipelineError::stage(
                    "write",
                    format!("'{name}' has no output HTML (was template stage run?)"),
                ));
            };

            let output_path = enriched.post.output_path(ctx.config);
            let write = || -> std::io::Result<()> {
                if let Some(parent) = output_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&output_path, html)
            };
            write().map_err(|source| PipelineError::Write {
                path: output_path.clone(),
                source,
            })?;

            log::info!("wrote {}", output_path.display());
            post.output_path = Some(output_path);
        }

        Ok(())
    }
}
