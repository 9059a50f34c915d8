//! Paragraph style name resolution.
//!
//! DOCX paragraphs reference styles by ID ("Heading1"); everything in this
//! crate matches and reports on display names ("Heading 1"). This module
//! builds the ID-to-name table out of the reader's style definitions.

use std::collections::HashMap;

/// Display name used when a paragraph carries no style reference.
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// Map from paragraph style IDs to their display names.
#[derive(Debug, Clone, Default)]
pub struct StyleNames {
    names: HashMap<String, String>,
}

impl StyleNames {
    /// Collect paragraph style names from a parsed document.
    pub fn from_docx(docx: &docx_rs::Docx) -> Self {
        let mut names = HashMap::new();

        for style in &docx.styles.styles {
            if matches!(style.style_type, docx_rs::StyleType::Paragraph) {
                // `docx_rs::Name` keeps its string private; its `Serialize`
                // impl emits it verbatim as a bare string.
                if let Ok(serde_json::Value::String(name)) = serde_json::to_value(&style.name) {
                    names.insert(style.style_id.clone(), name);
                }
            }
        }

        Self { names }
    }

    /// Resolve a style reference to a display name.
    ///
    /// An ID absent from the style table falls back to the raw ID; a
    /// missing reference resolves to the default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => self
                .names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            None => DEFAULT_STYLE_NAME.to_string(),
        }
    }
}
