//! Pipeline error types.

use std::path::PathBuf;

use crate::build::document::ParseError;
use crate::build::inject::InjectError;
use crate::build::render::RenderError;
use crate::build::validate::EnvironmentError;
use crate::error::Hint;

/// Errors that can occur during pipeline processing.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feature not enabled: '{setting}' is not set")]
    Disabled { setting: &'static str },

    #[error("no markdown files in {}", .0.display())]
    NoPostFiles(PathBuf),

    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

impl Hint for PipelineError {
    fn hint(&self) -> Option<String> {
        match self {
            PipelineError::Environment(e) => e.hint(),
            PipelineError::Parse(e) => e.hint(),
            PipelineError::Render(e) => e.hint(),
            PipelineError::Inject(e) => e.hint(),
            PipelineError::Read { .. } => None,
            PipelineError::Write { .. } => {
                Some("Check file permissions and disk space".to_string())
            }
            PipelineError::Disabled { setting } => {
                Some(format!("Set '{setting}' in boumwave.toml"))
            }
            PipelineError::NoPostFiles(_) => {
                Some("Add a '{name}.{lang}.md' file to the post folder".to_string())
            }
            PipelineError::Stage { .. } => None,
        }
    }
}
