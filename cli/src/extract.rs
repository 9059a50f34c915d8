//! styledown-extract - style inventory and style-filtered extraction.
//!
//! Lists the paragraph styles present in a Word document, or extracts
//! every paragraph matching a set of style names into a section-grouped
//! Markdown file.

mod console;

use clap::Parser;
use colored::*;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use styledown::render::write_grouped;
use styledown::style::{render_inventory_report, truncate_sample};
use styledown::{extract_styled, style_inventory, DocxLoader, Document, ExtractedEntry};

/// Extract paragraphs with specific styles from a Word document
#[derive(Parser)]
#[command(
    name = "styledown-extract",
    author = "iyulab",
    version,
    about = "Extract paragraphs with specific styles from a Word document"
)]
struct Cli {
    /// Path to the input Word document
    input_file: Option<PathBuf>,

    /// Comma-separated list of style names to extract (e.g., ".Head 1,.Head 2")
    #[arg(short, long)]
    styles: Option<String>,

    /// Path for the output markdown file
    #[arg(short, long, default_value = "extracted_content.md")]
    output: PathBuf,

    /// List all styles in the document and exit
    #[arg(long)]
    list_styles: bool,
}

fn main() -> ExitCode {
    console::init_logging();
    ExitCode::from(run(Cli::parse()))
}

/// Run the extraction tool, returning the process exit code.
fn run(cli: Cli) -> u8 {
    let Some(input) = cli.input_file else {
        show_usage();
        return 1;
    };

    if !input.exists() {
        error!("Error: Document '{}' not found!", input.display());
        show_usage();
        return 1;
    }

    info!("Processing Word document: {}", input.display());

    if cli.list_styles {
        return match load(&input) {
            Ok(document) => {
                let samples = style_inventory(&document);
                print!("{}", render_inventory_report(&samples));
                0
            }
            Err(err) => {
                error!("Error processing Word document: {}", err);
                1
            }
        };
    }

    let Some(styles) = cli.styles else {
        error!("No styles specified. Use --styles or --list-styles to see available styles");
        show_usage();
        return 1;
    };

    let targets: Vec<String> = styles.split(',').map(|s| s.trim().to_string()).collect();

    let document = match load(&input) {
        Ok(document) => document,
        Err(err) => {
            error!("Error processing Word document: {}", err);
            show_usage();
            return 1;
        }
    };

    let entries = extract_styled(&document, &targets);

    if entries.is_empty() {
        warn!("No paragraphs found with styles: {}", targets.join(", "));
        return 1;
    }

    echo_entries(&entries);

    if let Err(err) = write_grouped(&entries, &cli.output) {
        error!("Error writing markdown file: {}", err);
        return 1;
    }

    0
}

fn load(input: &Path) -> styledown::Result<Document> {
    let pb = console::create_spinner("Parsing document...");
    let result = DocxLoader::open(input).map(|loader| loader.load());
    pb.finish_and_clear();
    result
}

/// Echo matched entries to the console, truncated to the sample budget.
fn echo_entries(entries: &[ExtractedEntry]) {
    println!("\n{}", "Extracted Content:".cyan().bold());
    println!("{}", "-".repeat(20));

    let mut current_style: Option<&str> = None;
    for entry in entries {
        if current_style != Some(entry.style_name.as_str()) {
            println!("\n{}:", entry.style_name.bold());
            current_style = Some(entry.style_name.as_str());
        }
        println!("  {}", truncate_sample(&entry.text));
    }
}

fn show_usage() {
    println!(
        r#"
Usage Instructions:
------------------
1. To list all styles in a document:
   styledown-extract <document_name.docx> --list-styles

2. To extract specific heading styles:
   styledown-extract <document_name.docx> --styles ".Head 1,.Head 2,.Head 3"

Examples:
---------
styledown-extract mydoc.docx --list-styles
styledown-extract mydoc.docx --styles ".Head 1,.Head 2"

Note: The document name is required. If you don't provide it, this help message will be shown.
"#
    );
}
