//! Default pipeline stages.
//!
//! The standard post pipeline consists of:
//!
//! 1. **ParseStage** - Read and validate front matter
//! 2. **MarkdownStage** - Convert the markdown body to HTML
//! 3. **MetadataStage** - Derive description, image and URLs
//! 4. **TemplateStage** - Render the post page template
//! 5. **SeoStage** - Inject the canonical link and SEO tags
//! 6. **WriteStage** - Write final HTML to the output directory
//!
//! Followed by the finalize stages **IndexStage** and **SitemapStage**.

mod finalize;
mod markdown;
mod metadata;
mod parse;
mod seo;
mod template;
mod write;

pub use finalize::{IndexStage, SitemapStage};
pub use markdown::MarkdownStage;
pub use metadata::MetadataStage;
pub use parse::ParseStage;
pub use seo::SeoStage;
pub use template::TemplateStage;
pub use write::WriteStage;
