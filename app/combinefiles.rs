//! Command-line interface for combinefiles.
//!
//! Scans a directory and writes the contents of matching files into a single
//! file inside it, then prints a summary.

use clap::Parser;
use combinefiles::{
    CombineBuilder, CombineOptions, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT, RunResult, combine,
};
use std::io;
use std::path::PathBuf;
use std::process::exit;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Combine file contents from a directory into a single file.
#[derive(Parser)]
#[command(name = "combinefiles", version, about, long_about = None)]
struct Cli {
    /// The directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// File extensions to include
    #[arg(short, long, num_args = 1.., default_values = DEFAULT_EXTENSIONS)]
    extensions: Vec<String>,

    /// File names to exclude from combining
    #[arg(short = 'x', long, num_args = 0..)]
    exclude_files: Vec<String>,

    /// Directory names to exclude from scanning, relative to the directory
    #[arg(short = 'X', long, num_args = 0..)]
    exclude_dirs: Vec<PathBuf>,

    /// Skip files and directories matched by the directory's .gitignore
    #[arg(short, long)]
    gitignore: bool,

    /// Name of the output file, created inside the scanned directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_options(self) -> (CombineOptions, bool) {
        let options = CombineBuilder::new(self.directory)
            .extensions(self.extensions)
            .exclude_files(self.exclude_files)
            .exclude_dirs(self.exclude_dirs)
            .use_gitignore(self.gitignore)
            .output(self.output)
            .build();
        (options, self.json)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, json) = cli.into_options();
    init_tracing(json);

    match combine(options) {
        Ok(result) => print_summary(&result, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

/// Progress lines go to stdout, or to stderr when stdout carries JSON.
/// Warnings and errors always go to stderr.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false);
    if json {
        builder.with_writer(io::stderr).init();
    } else {
        builder
            .with_writer(io::stderr.with_max_level(Level::WARN).or_else(io::stdout))
            .init();
    }
}

fn print_summary(result: &RunResult, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(result).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
        return;
    }
    println!(
        "\nCombined files successfully written to `{}`",
        result.output.display()
    );
    println!("Total files combined: {}", result.combined);
    println!("Total files skipped: {}", result.skipped);
}
