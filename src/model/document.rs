//! Document model structures.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// An ordered sequence of paragraphs from one source document.
///
/// Paragraph order always equals source order; nothing in this crate
/// reorders or sorts the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in source order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph, preserving source order.
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get the plain text of all paragraphs, one per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Paragraph> for Document {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Self {
            paragraphs: iter.into_iter().collect(),
        }
    }
}
