pub mod generate;
pub mod init;
pub mod new_post;
pub mod now;
pub mod scaffold;
pub mod sitemap;

use std::path::{Path, PathBuf};

use crate::error::Hint;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("could not generate a valid {what} from the title '{title}'")]
    InvalidTitle { what: &'static str, title: String },

    #[error("the now feature is not enabled")]
    NowDisabled,

    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Hint for CommandError {
    fn hint(&self) -> Option<String> {
        match self {
            CommandError::AlreadyExists(path) if path.extension().is_some_and(|e| e == "toml") => {
                Some("Remove it first if you want to reinitialize.".to_string())
            }
            CommandError::AlreadyExists(_) => {
                Some("Edit the existing file or pick another name".to_string())
            }
            CommandError::InvalidTitle { .. } => {
                Some("Use a title with at least one letter or digit".to_string())
            }
            CommandError::NowDisabled => Some(
                "Set now_folder, now_template and now_index_template in boumwave.toml".to_string(),
            ),
            CommandError::Write { .. } => {
                Some("Check file permissions and disk space".to_string())
            }
        }
    }
}

/// Create `path` with `contents`, refusing to overwrite an existing file.
pub(crate) fn create_file(path: &Path, contents: &str) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::AlreadyExists(path.to_path_buf()));
    }
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    };
    write().map_err(|source| CommandError::Write {
        path: path.to_path_buf(),
        source,
    })
}
