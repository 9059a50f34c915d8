//! Paragraph and text run models.

use serde::{Deserialize, Serialize};

/// A contiguous span of text within a paragraph sharing one formatting state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Bold formatting applied directly to the run
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic formatting applied directly to the run
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
}

impl Run {
    /// Create a plain run with no formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a run with explicit bold/italic flags.
    pub fn styled(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// Check if this run has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph: ordered runs tagged with exactly one style name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Display name of the paragraph style (e.g., "Heading 1")
    pub style_name: String,

    /// Text runs in source order
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph with the given style name.
    pub fn new(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            runs: Vec::new(),
        }
    }

    /// Create a paragraph holding a single plain run.
    pub fn with_text(style_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            runs: vec![Run::plain(text)],
        }
    }

    /// Add a run to this paragraph.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get the plain text content (run concatenation, no separators).
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}
