use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::{CommandError, create_file};
use crate::NewPostArgs;
use crate::config::Config;
use crate::util::{filesify, slugify};

const POST_STUB: &str = include_str!("../../defaults/post.md");

pub fn run(config_file: &Path, args: &NewPostArgs) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;
    let (post_dir, files) = create_post(&config, &args.title, Local::now().date_naive())?;

    let name = post_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("✓ Created new post: {name}");
    println!("  Location: {}", post_dir.display());
    println!("  Files created:");
    for file in &files {
        if let Some(file_name) = file.file_name() {
            println!("    - {}", file_name.to_string_lossy());
        }
    }
    println!();
    println!("You can now edit these files to write your post in different languages.");
    if config.site.languages.len() > 1 {
        println!("Tip: You can delete any language file if you don't need that translation.");
    }
    println!("When ready, run 'bw generate {name}'.");

    Ok(())
}

/// Create `{content}/{name}/{name}.{lang}.md` for every configured language.
///
/// The folder name keeps accents (`filesify`), the slug written in the front
/// matter does not (`slugify`). Returns the post folder and the files created.
pub fn create_post(
    config: &Config,
    title: &str,
    today: NaiveDate,
) -> Result<(PathBuf, Vec<PathBuf>), CommandError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(CommandError::InvalidTitle {
            what: "slug",
            title: title.to_string(),
        });
    }
    let fs_name = filesify(title);
    if fs_name.is_empty() {
        return Err(CommandError::InvalidTitle {
            what: "file name",
            title: title.to_string(),
        });
    }

    let post_dir = config.paths.content_folder.join(&fs_name);
    if post_dir.exists() {
        return Err(CommandError::AlreadyExists(post_dir));
    }

    let date = today.format("%Y-%m-%d").to_string();
    let quoted_title = title.replace('\\', "\\\\").replace('"', "\\\"");
    let mut files = Vec::new();
    for lang in &config.site.languages {
        let path = post_dir.join(format!("{fs_name}.{lang}.md"));
        let contents = POST_STUB
            .replace("\"{title}\"", &format!("\"{quoted_title}\""))
            .replace("{title}", title)
            .replace("{slug}", &slug)
            .replace("{date}", &date)
            .replace("{lang}", lang)
            .replace("{output_folder}", &config.paths.output_folder);
        create_file(&path, &contents)?;
        files.push(path);
    }

    Ok((post_dir, files))
}
