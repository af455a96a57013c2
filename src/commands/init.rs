use std::path::Path;

use super::create_file;

const DEFAULT_CONFIG: &str = include_str!("../../defaults/boumwave.toml");

pub fn run(config_file: &Path) -> Result<(), anyhow::Error> {
    let path = if config_file.is_relative() {
        std::env::current_dir()?.join(config_file)
    } else {
        config_file.to_path_buf()
    };

    create_file(&path, DEFAULT_CONFIG)?;

    println!("✓ Configuration file '{}' created successfully!", path.display());
    println!();
    println!("You can now edit this file to customize your settings.");
    println!("After configuration, run 'bw scaffold' to create the folder structure.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::config::Config;

    #[test]
    fn test_default_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boumwave.toml");
        run(&path).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert!(config.index.is_enabled());
        assert!(config.sitemap.is_enabled());
        assert!(config.now.is_enabled());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boumwave.toml");
        std::fs::write(&path, "mine").unwrap();

        let err = run(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommandError>(),
            Some(CommandError::AlreadyExists(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mine");
    }
}
