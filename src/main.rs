use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

mod build;
mod commands;
mod config;
mod error;
#[cfg(test)]
mod test_data;
mod util;

#[derive(Parser)]
#[command(name = "bw", version, about = "Easy static blog generator")]
struct Args {
    /// The path to the configuration file
    #[arg(short, long, global = true, default_value = config::CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Show more output (-v for progress, -vv for every stage)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// The command to execute
    #[command(subcommand)]
    command: BoumwaveCommand,
}

#[derive(Parser)]
struct NewPostArgs {
    /// Title of the new post
    title: String,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Name of the post folder inside the content folder
    post_name: String,
}

#[derive(Subcommand)]
enum BoumwaveCommand {
    /// Create the configuration file
    Init,

    /// Create folders and default templates from the configuration
    Scaffold,

    /// Create a new post with one file per language
    NewPost(NewPostArgs),

    /// Generate the HTML pages of a post and update the index
    Generate(GenerateArgs),

    /// Regenerate the sitemap
    Sitemap,

    /// Create today's now entry
    NewNow,

    /// Generate the now page and show the latest entry in the index
    Now,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
    {
        eprintln!("failed to initialize logging: {e}");
    }

    let result = match &args.command {
        BoumwaveCommand::Init => commands::init::run(&args.config),
        BoumwaveCommand::Scaffold => commands::scaffold::run(&args.config),
        BoumwaveCommand::NewPost(new_post) => commands::new_post::run(&args.config, new_post),
        BoumwaveCommand::Generate(generate) => commands::generate::run(&args.config, generate),
        BoumwaveCommand::Sitemap => commands::sitemap::run(&args.config),
        BoumwaveCommand::NewNow => commands::now::run_new(&args.config),
        BoumwaveCommand::Now => commands::now::run(&args.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error::report(&err);
            ExitCode::FAILURE
        }
    }
}
