use std::path::Path;

use crate::GenerateArgs;
use crate::build::generate_post;
use crate::config::Config;

pub fn run(config_file: &Path, args: &GenerateArgs) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(Some(config_file))?;

    println!("Generating '{}'...", args.post_name);
    let report = generate_post(&config, &args.post_name)?;

    for output in &report.outputs {
        println!("  ✓ Generated: {}", output.display());
    }
    println!(
        "\n✓ Successfully generated {} post(s) for '{}'",
        report.generated(),
        args.post_name
    );
    if report.index_updated {
        println!("✓ Updated index with post list");
    }
    if report.sitemap_updated {
        println!("✓ Updated sitemap");
    }

    Ok(())
}
