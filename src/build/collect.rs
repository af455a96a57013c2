//! Discovery of published posts and now entries.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::{Post, find_post_files, is_markdown, parse_post_file};
use super::markdown::render_markdown;
use super::post::Now;
use crate::config::Config;

/// Every valid post of every post folder dated on or before `today`.
///
/// Folders are walked one level deep in path order. Files that fail to parse
/// are logged and skipped so one broken draft never hides the rest of the
/// site. A missing content folder yields no posts.
pub fn collect_published_posts(config: &Config, today: NaiveDate) -> Vec<Post> {
    let content_folder = &config.paths.content_folder;
    let folders = match sorted_entries(content_folder) {
        Ok(entries) => entries.into_iter().filter(|path| path.is_dir()),
        Err(e) => {
            log::debug!(
                "no posts collected, cannot read {}: {e}",
                content_folder.display()
            );
            return Vec::new();
        }
    };

    let mut posts = Vec::new();
    for folder in folders {
        let files = match find_post_files(&folder) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("skipping post folder {}: {e}", folder.display());
                continue;
            }
        };

        for file in files {
            match parse_post_file(&file, &config.root) {
                Ok((post, _)) if post.published_date > today => {
                    log::debug!(
                        "skipping {} scheduled for {}",
                        file.display(),
                        post.published_date
                    );
                }
                Ok((post, _)) => posts.push(post),
                Err(e) => log::warn!("skipping {e}"),
            }
        }
    }

    log::debug!("collected {} post(s)", posts.len());
    posts
}

/// Now entries of a folder, newest first.
///
/// Only files named `YYYY-MM-DD.md` are entries; their whole content is
/// rendered as markdown. A missing folder yields no entries.
pub fn collect_now_entries(now_dir: &Path) -> Vec<Now> {
    let files = match sorted_entries(now_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("no now entries, cannot read {}: {e}", now_dir.display());
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for path in files.into_iter().filter(|path| path.is_file() && is_markdown(path)) {
        let Some(post_date) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok())
        else {
            log::warn!(
                "skipping {}: now entries are named YYYY-MM-DD.md",
                path.display()
            );
            continue;
        };

        match std::fs::read_to_string(&path) {
            Ok(markdown) => entries.push(Now {
                post_date,
                content: render_markdown(&markdown),
            }),
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }

    entries.sort_by(|a, b| b.post_date.cmp(&a.post_date));
    entries
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();
    Ok(paths)
}
