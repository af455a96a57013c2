//! Post state carried through the pipeline.

use std::path::PathBuf;

use crate::build::document::Post;
use crate::build::post::EnrichedPost;

/// One language file of a post being processed through the pipeline.
///
/// Fields fill in as stages run:
///
/// 1. After parse: `post` and `markdown` are set
/// 2. After markdown: `content_html` holds the rendered body
/// 3. After metadata: `post` has moved into `enriched`
/// 4. After template: `output_html` holds the rendered page
/// 5. After seo: `output_html` carries the canonical link and SEO tags
/// 6. After write: `output_path` is where the page was written
#[derive(Debug)]
pub struct ProcessingPost {
    /// The markdown file this post comes from
    pub source_path: PathBuf,

    pub post: Option<Post>,

    /// Markdown body without front matter
    pub markdown: String,

    pub content_html: String,

    pub enriched: Option<EnrichedPost>,

    pub output_html: Option<String>,

    pub output_path: Option<PathBuf>,
}

impl ProcessingPost {
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            source_path,
            post: None,
            markdown: String::new(),
            content_html: String::new(),
            enriched: None,
            output_html: None,
            output_path: None,
        }
    }

    /// File name used in log and error messages.
    pub fn name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}
