//! Markdown formatting for styled paragraphs.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Run};

/// Style-name prefix that marks heading paragraphs.
const HEADING_PREFIX: &str = "Heading";

/// Style-name prefix that marks list paragraphs. All "List*" styles
/// flatten to a single bullet level.
const LIST_PREFIX: &str = "List";

/// Render one paragraph to a Markdown block.
///
/// Returns `None` for whitespace-only paragraphs. Heading styles must end
/// in a digit 1-9; any other trailing character ("Heading 10", "Heading A")
/// is rejected with [`Error::InvalidHeadingStyle`].
pub fn render_paragraph(para: &Paragraph) -> Result<Option<String>> {
    if para.is_blank() {
        return Ok(None);
    }

    let style = para.style_name.as_str();

    let block = if style.starts_with(HEADING_PREFIX) {
        let level = heading_level(style)?;
        format!("{} {}", "#".repeat(level as usize), para.plain_text())
    } else if style.starts_with(LIST_PREFIX) {
        format!("* {}", para.plain_text())
    } else {
        // Each run is wrapped independently; adjacent same-format runs
        // are intentionally not merged.
        para.runs.iter().map(wrap_run).collect()
    };

    Ok(Some(block))
}

/// Render a whole document, one Markdown block per non-blank paragraph.
pub fn render_document(document: &Document) -> Result<String> {
    let mut blocks = Vec::new();

    for para in &document.paragraphs {
        if let Some(block) = render_paragraph(para)? {
            blocks.push(block);
        }
    }

    Ok(join_blocks(&blocks))
}

/// Join Markdown blocks with one blank-line separator and a trailing
/// newline.
pub fn join_blocks(blocks: &[String]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

/// Write a rendered Markdown document to a file in one write.
pub fn write_flat(markdown: &str, output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    fs::write(path, markdown)?;
    info!("Markdown written to {}", path.display());
    Ok(())
}

/// Derive the heading depth from a "Heading"-prefixed style name.
fn heading_level(style: &str) -> Result<u8> {
    match style.chars().last() {
        Some(c @ '1'..='9') => Ok(c as u8 - b'0'),
        _ => Err(Error::InvalidHeadingStyle(style.to_string())),
    }
}

/// Wrap one run's text in its emphasis markers.
fn wrap_run(run: &Run) -> String {
    match (run.bold, run.italic) {
        (true, true) => format!("***{}***", run.text),
        (true, false) => format!("**{}**", run.text),
        (false, true) => format!("*{}*", run.text),
        (false, false) => run.text.clone(),
    }
}
