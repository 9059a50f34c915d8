//! Document model types.
//!
//! Plain immutable records describing a loaded document: ordered
//! paragraphs, each tagged with one style name and holding ordered
//! formatted runs. The records carry no reference back to the DOCX
//! reader's object shapes.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::{Paragraph, Run};
