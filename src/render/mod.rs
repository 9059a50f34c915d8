//! Output rendering for styled documents.
//!
//! Two writers share the Markdown vocabulary but not the matching policy:
//! the flat converter maps style-name prefixes ("Heading", "List") and
//! run formatting to Markdown syntax, while the section-grouped writer
//! lays out already-extracted entries under `##` style headers.
//!
//! # Example
//!
//! ```no_run
//! use styledown::{load_document, render};
//!
//! let doc = load_document("document.docx")?;
//! let markdown = render::render_document(&doc)?;
//! render::write_flat(&markdown, "document.md")?;
//! # Ok::<(), styledown::Error>(())
//! ```

mod markdown;
mod sections;

pub use markdown::{join_blocks, render_document, render_paragraph, write_flat};
pub use sections::{render_grouped, write_grouped};
