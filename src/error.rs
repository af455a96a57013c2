//! Error reporting shared by all commands.
//!
//! Each module owns its error enum. Errors that can suggest a fix implement
//! [`Hint`], and [`report`] prints both halves to stderr.

use crate::build::pipeline::PipelineError;
use crate::build::{EnvironmentError, InjectError, ParseError, RenderError};
use crate::commands::CommandError;
use crate::config::ConfigError;

/// An actionable suggestion attached to an error.
pub trait Hint {
    fn hint(&self) -> Option<String>;
}

/// Find the hint of the first error in the chain that carries one.
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<PipelineError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<EnvironmentError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<ParseError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<RenderError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<InjectError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<CommandError>() {
            e.hint()
        } else {
            None
        }
    })
}

/// Print an error and its hint to stderr.
pub fn report(err: &anyhow::Error) {
    eprintln!("Error: {err}");
    if let Some(hint) = hint_for(err) {
        eprintln!("Hint: {hint}");
    }
}
