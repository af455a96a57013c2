pub mod collect;
mod date;
pub mod document;
pub mod generate;
pub mod index;
pub mod inject;
pub mod markdown;
pub mod metadata;
pub mod pipeline;
pub mod post;
pub mod render;
pub mod seo;
pub mod validate;

pub use document::ParseError;
pub use generate::generate_post;
pub use inject::InjectError;
pub use render::{RenderError, Renderer};
pub use validate::EnvironmentError;
