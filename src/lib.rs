//! # styledown
//!
//! Style-driven extraction and Markdown conversion for Word documents.
//!
//! This library reads `.docx` files through the `docx_rs` document model
//! and exposes three passes over the resulting paragraph sequence: a style
//! inventory, a style-filtered extraction, and a blanket style-to-Markdown
//! conversion for headings, lists, and bold/italic runs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use styledown::{extract_styled, load_document, to_markdown};
//!
//! // Blanket conversion
//! let markdown = to_markdown("document.docx")?;
//! std::fs::write("document.md", markdown)?;
//!
//! // Style-filtered extraction
//! let doc = load_document("document.docx")?;
//! let entries = extract_styled(&doc, &["Heading 1".to_string()]);
//! for entry in &entries {
//!     println!("{}: {}", entry.style_name, entry.text);
//! }
//! # Ok::<(), styledown::Error>(())
//! ```

pub mod docx;
pub mod error;
pub mod model;
pub mod render;
pub mod style;

// Re-exports
pub use docx::{DocxLoader, DEFAULT_STYLE_NAME};
pub use error::{Error, Result};
pub use model::{Document, Paragraph, Run};
pub use style::{extract_styled, style_inventory, ExtractedEntry, StyleSample};

use std::path::Path;

/// Load a `.docx` file into the paragraph model.
///
/// # Example
///
/// ```no_run
/// use styledown::load_document;
///
/// let doc = load_document("document.docx")?;
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// # Ok::<(), styledown::Error>(())
/// ```
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    Ok(DocxLoader::open(path)?.load())
}

/// Load a document from raw `.docx` bytes.
pub fn load_document_bytes(data: &[u8]) -> Result<Document> {
    Ok(DocxLoader::from_bytes(data)?.load())
}

/// Convert a `.docx` file to Markdown.
///
/// # Example
///
/// ```no_run
/// use styledown::to_markdown;
///
/// let markdown = to_markdown("document.docx")?;
/// std::fs::write("document.md", markdown)?;
/// # Ok::<(), styledown::Error>(())
/// ```
pub fn to_markdown(path: impl AsRef<Path>) -> Result<String> {
    let doc = load_document(path)?;
    render::render_document(&doc)
}
