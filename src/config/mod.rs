//! Configuration loading and types for boumwave.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading and validating configs from files (`load`)

mod load;
mod types;

use std::path::PathBuf;

use crate::error::Hint;

// Re-export the types used across the crate
pub use load::CONFIG_FILE_NAME;
pub use types::{Config, DateFormat, Feature, IndexFeature, Markers, NowFeature, SitemapFeature};
pub(crate) use types::resolve_against;

#[cfg(test)]
pub use types::{PathsConfig, SiteConfig, Translations};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("invalid configuration:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}

impl Hint for ConfigError {
    fn hint(&self) -> Option<String> {
        match self {
            ConfigError::NotFound(_) => {
                Some("Run 'bw init' first to create the configuration file.".to_string())
            }
            ConfigError::Deserialize(_) | ConfigError::Invalid(_) => {
                Some(format!("Fix the reported fields in {CONFIG_FILE_NAME}"))
            }
            ConfigError::EncodePath(_) | ConfigError::CwdFailure(_) => None,
        }
    }
}
