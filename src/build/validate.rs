//! Pre-flight checks run before a command touches any file.
//!
//! Each check collects every problem it finds so a single run reports all of
//! them.

use std::path::Path;

use super::collect::collect_now_entries;
use crate::config::{Config, Markers};
use crate::error::Hint;

#[derive(thiserror::Error, Debug)]
#[error("{context}\n\n{}", .errors.join("\n"))]
pub struct EnvironmentError {
    pub context: &'static str,
    pub errors: Vec<String>,
}

impl Hint for EnvironmentError {
    fn hint(&self) -> Option<String> {
        Some("Fix the above issues and run the command again".to_string())
    }
}

fn finish(context: &'static str, errors: Vec<String>) -> Result<(), EnvironmentError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EnvironmentError { context, errors })
    }
}

/// Check everything `generate` needs: logo, templates, enabled feature
/// documents with their markers, and the post folder.
pub fn validate_generate_environment(config: &Config, post_name: &str) -> Result<(), EnvironmentError> {
    let mut errors = Vec::new();

    let logo = config.logo_file();
    if !logo.exists() {
        errors.push(format!("Logo file not found: {}", logo.display()));
        errors.push("  Check 'logo_path' in boumwave.toml".to_string());
    }

    let template_folder = &config.paths.template_folder;
    if !template_folder.exists() {
        errors.push(format!(
            "Template folder not found: {}",
            template_folder.display()
        ));
        errors.push("  Run 'bw scaffold' to create it".to_string());
    }

    check_template(&mut errors, "Post template", &config.paths.post_template);

    if let Some(index) = config.index.enabled() {
        check_template(&mut errors, "Link template", &index.link_template);
        check_document(&mut errors, "Index", &index.document, &index.markers);
    }

    if let Some(sitemap) = config.sitemap.enabled() {
        check_document(&mut errors, "Sitemap", &sitemap.document, &sitemap.markers);
    }

    let post_folder = config.paths.content_folder.join(post_name);
    if !post_folder.exists() {
        errors.push(format!("Post folder not found: {}", post_folder.display()));
        errors.push(format!("  Run 'bw new-post \"{post_name}\"' to create it"));
    } else if !post_folder.is_dir() {
        errors.push(format!("Not a directory: {}", post_folder.display()));
    }

    finish("Environment validation failed", errors)
}

/// Check the sitemap document and its markers.
pub fn validate_sitemap_environment(config: &Config) -> Result<(), EnvironmentError> {
    let mut errors = Vec::new();
    match config.sitemap.enabled() {
        Some(sitemap) => {
            check_document(&mut errors, "Sitemap", &sitemap.document, &sitemap.markers)
        }
        None => errors.push("Sitemap is not configured: set 'sitemap_template' in boumwave.toml".to_string()),
    }
    finish("Sitemap environment validation failed", errors)
}

/// Check the now folder, both now templates and the now markers of the index.
pub fn validate_now_environment(config: &Config) -> Result<(), EnvironmentError> {
    let mut errors = Vec::new();
    let Some(now) = config.now.enabled() else {
        errors.push("Now feature is not configured: set 'now_folder' in boumwave.toml".to_string());
        return finish("Now environment validation failed", errors);
    };

    if !now.folder.is_dir() {
        errors.push(format!("Now folder not found: {}", now.folder.display()));
        errors.push("  Run 'bw scaffold' to create it".to_string());
    } else if collect_now_entries(&now.folder).is_empty() {
        errors.push(format!("No now entries found in {}", now.folder.display()));
        errors.push("  Run 'bw new-now' to create one".to_string());
    }
    check_template(&mut errors, "Now template", &now.page_template);
    check_template(&mut errors, "Now index template", &now.entry_template);

    match config.index.enabled() {
        Some(index) => check_document(&mut errors, "Index", &index.document, &now.markers),
        None => errors.push(
            "Now feed needs the index page: set 'index_template' in boumwave.toml".to_string(),
        ),
    }

    finish("Now environment validation failed", errors)
}

fn check_template(errors: &mut Vec<String>, label: &str, path: &Path) {
    if !path.is_file() {
        errors.push(format!("{label} not found: {}", path.display()));
        errors.push("  Run 'bw scaffold' to create it".to_string());
    }
}

fn check_document(errors: &mut Vec<String>, label: &str, path: &Path, markers: &Markers) {
    if !path.exists() {
        errors.push(format!("{label} file not found: {}", path.display()));
        errors.push("  Run 'bw scaffold' to create it".to_string());
        return;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            errors.push(format!("Could not read {}: {e}", path.display()));
            return;
        }
    };

    // The splice looks for the end marker after the start marker
    match content.find(markers.start.as_str()) {
        None => {
            errors.push(format!("Start marker not found in {}", path.display()));
            errors.push(format!("  Expected: {}", markers.start));
            if !content.contains(markers.end.as_str()) {
                errors.push(format!("End marker not found in {}", path.display()));
                errors.push(format!("  Expected: {}", markers.end));
            }
        }
        Some(start) => {
            let after_start = &content[start + markers.start.len()..];
            if !after_start.contains(markers.end.as_str()) {
                errors.push(format!(
                    "End marker not found after start marker in {}",
                    path.display()
                ));
                errors.push(format!("  Expected: {}", markers.end));
            }
        }
    }
}
