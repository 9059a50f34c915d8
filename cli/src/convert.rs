//! styledown-convert - blanket style-to-Markdown conversion.
//!
//! Converts a Word document to Markdown: heading styles become `#`
//! headings, list styles become bullets, and bold/italic runs become
//! emphasis markers.

mod console;

use clap::Parser;
use colored::*;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use styledown::render::{render_document, write_flat};
use styledown::DocxLoader;

/// Convert Word documents to Markdown format
#[derive(Parser)]
#[command(
    name = "styledown-convert",
    author = "iyulab",
    version,
    about = "Convert Word documents to Markdown format"
)]
struct Cli {
    /// Path to the input Word document
    input_file: PathBuf,

    /// Path for the output Markdown file (default: input file with .md extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    console::init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!(
                "{} Converted to Markdown: {}",
                "✓".green().bold(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error converting document: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> styledown::Result<PathBuf> {
    let Cli { input_file, output } = cli;
    let output = output.unwrap_or_else(|| input_file.with_extension("md"));

    let pb = console::create_spinner("Parsing document...");
    let document = DocxLoader::open(&input_file)?.load();

    pb.set_message("Rendering to Markdown...");
    let markdown = render_document(&document)?;
    pb.finish_and_clear();

    write_flat(&markdown, &output)?;
    info!(
        "Successfully converted {} to {}",
        input_file.display(),
        output.display()
    );

    Ok(output)
}
