use std::path::Path;

use super::create_file;
use crate::config::Config;

const POST_TEMPLATE: &str = include_str!("../../defaults/templates/post.html");
const LINK_TEMPLATE: &str = include_str!("../../defaults/templates/link.html");
const INDEX_DOCUMENT: &str = include_str!("../../defaults/templates/index.html");
const SITEMAP_DOCUMENT: &str = include_str!("../../defaults/templates/sitemap.xml");
const NOW_TEMPLATE: &str = include_str!("../../defaults/templates/now.html");
const NOW_INDEX_TEMPLATE: &str = include_str!("../../defaults/templates/now_index.html");

pub fn run(config_file: &Path) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;
    let created = scaffold(&config)?;

    println!();
    if created == 0 {
        println!("Scaffold completed! Everything already exists.");
    } else {
        println!("Scaffold completed! Your project structure is ready.");
    }
    Ok(())
}

/// Create every missing folder and default template. Existing files are
/// left alone. Returns how many entries were created.
pub fn scaffold(config: &Config) -> Result<usize, anyhow::Error> {
    let mut folders = vec![
        ("template", config.paths.template_folder.clone()),
        ("content", config.paths.content_folder.clone()),
        ("output", config.output_dir()),
    ];
    if let Some(now) = config.now.enabled() {
        folders.push(("now", now.folder.clone()));
    }

    let mut files = vec![(config.paths.post_template.clone(), POST_TEMPLATE)];
    if let Some(index) = config.index.enabled() {
        files.push((index.link_template.clone(), LINK_TEMPLATE));
        files.push((index.document.clone(), INDEX_DOCUMENT));
    }
    if let Some(sitemap) = config.sitemap.enabled() {
        files.push((sitemap.document.clone(), SITEMAP_DOCUMENT));
    }
    if let Some(now) = config.now.enabled() {
        files.push((now.page_template.clone(), NOW_TEMPLATE));
        files.push((now.entry_template.clone(), NOW_INDEX_TEMPLATE));
    }

    let mut created = 0;
    for (kind, folder) in folders {
        if folder.exists() {
            println!("⚠ Warning: '{}' already exists, skipping creation.", folder.display());
        } else {
            std::fs::create_dir_all(&folder)?;
            println!("✓ Created {kind} folder: {}", folder.display());
            created += 1;
        }
    }

    for (path, contents) in files {
        if path.exists() {
            println!("⚠ Warning: '{}' already exists, skipping creation.", path.display());
        } else {
            create_file(&path, contents)?;
            println!("✓ Created {}", path.display());
            created += 1;
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::validate::{validate_now_environment, validate_sitemap_environment};
    use crate::test_data::sample_config;

    #[test]
    fn test_scaffold_creates_everything_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());

        assert_eq!(scaffold(&config).unwrap(), 10);
        assert!(config.paths.post_template.is_file());
        assert!(config.output_dir().is_dir());
        assert!(dir.path().join("index.html").is_file());
        assert!(validate_sitemap_environment(&config).is_ok());

        assert_eq!(scaffold(&config).unwrap(), 0);
    }

    #[test]
    fn test_scaffold_keeps_existing_templates() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        std::fs::create_dir_all(&config.paths.template_folder).unwrap();
        std::fs::write(&config.paths.post_template, "custom").unwrap();

        scaffold(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(&config.paths.post_template).unwrap(),
            "custom"
        );
    }

    #[test]
    fn test_default_index_carries_now_markers() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(dir.path());
        scaffold(&config).unwrap();

        let now = config.now.enabled().unwrap();
        std::fs::write(now.folder.join("2025-10-28.md"), "Reading").unwrap();
        assert!(validate_now_environment(&config).is_ok());
    }
}
