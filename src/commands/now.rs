use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::{CommandError, create_file};
use crate::build::Renderer;
use crate::build::collect::collect_now_entries;
use crate::build::index::{update_now_feed, write_now_page};
use crate::build::validate::validate_now_environment;
use crate::config::Config;

const NOW_STUB: &str = include_str!("../../defaults/now.md");

/// `bw new-now`
pub fn run_new(config_file: &Path) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;
    let path = create_now_entry(&config, Local::now().date_naive())?;

    println!("✓ Created now entry: {}", path.display());
    println!("Edit it, then run 'bw now' to publish it.");
    Ok(())
}

/// `bw now`
pub fn run(config_file: &Path) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;
    validate_now_environment(&config)?;

    let now = config.now.enabled().ok_or(CommandError::NowDisabled)?;
    let entries = collect_now_entries(&now.folder);
    let renderer = Renderer::new();

    let page = write_now_page(&config, &renderer, &entries)?;
    println!("✓ Generated {} ({} entries)", page.display(), entries.len());
    update_now_feed(&config, &renderer, &entries)?;
    println!("✓ Updated index with the latest entry");

    Ok(())
}

/// Create `{now_folder}/{today}.md` from the default stub.
pub fn create_now_entry(config: &Config, today: NaiveDate) -> Result<PathBuf, CommandError> {
    let now = config.now.enabled().ok_or(CommandError::NowDisabled)?;
    let path = now.folder.join(format!("{}.md", today.format("%Y-%m-%d")));
    create_file(&path, NOW_STUB)?;
    Ok(path)
}
