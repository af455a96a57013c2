use std::path::Path;

use chrono::Local;

use crate::build::index::update_sitemap;
use crate::build::validate::validate_sitemap_environment;
use crate::config::Config;

pub fn run(config_file: &Path) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;
    validate_sitemap_environment(&config)?;

    println!("Generating sitemap...");
    let count = update_sitemap(&config, Local::now().date_naive())?;
    println!("✓ Sitemap updated with {count} post(s)");

    Ok(())
}
