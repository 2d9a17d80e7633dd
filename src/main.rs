use clap::{Arg, Command};
use std::path::PathBuf;
use std::process;

use page2md::batch::{self, OverwritePolicy};
use page2md::config::Settings;

fn main() {
    env_logger::init();

    let matches = Command::new("page2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a directory of HTML pages to Markdown files")
        .arg(
            Arg::new("input")
                .help("Directory containing the .html files")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Directory for the converted .md files"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .value_name("MODE")
                .help("What to do when an output file exists: overwrite, skip or fail"),
        )
        .get_matches();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            process::exit(1);
        }
    };

    let overwrite = match matches
        .get_one::<String>("overwrite")
        .map(|mode| mode.parse::<OverwritePolicy>())
        .transpose()
    {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let options = settings.into_options(
        matches.get_one::<String>("input").map(PathBuf::from),
        matches.get_one::<String>("output").map(PathBuf::from),
        overwrite,
    );

    match batch::run(&options) {
        Ok(summary) => {
            for failure in &summary.failed {
                eprintln!("Error: {}: {}", failure.path.display(), failure.error);
            }
            println!(
                "Converted {} file(s) from {} to {}",
                summary.converted.len(),
                options.input_dir.display(),
                options.output_dir.display()
            );
            if !summary.skipped.is_empty() {
                println!("Skipped {} existing file(s)", summary.skipped.len());
            }
            if !summary.is_success() {
                eprintln!("{} file(s) failed to convert", summary.failed.len());
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
