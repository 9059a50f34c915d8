//! Style inventory and style-filtered extraction.
//!
//! Two selection passes over a loaded document: collecting the distinct
//! style names seen (inventory mode) and selecting paragraphs whose style
//! name matches a caller-supplied allow-list (extraction mode). Matching
//! here is case-insensitive and exact; the prefix-based matching used for
//! Markdown conversion lives in [`crate::render`] and is a separate policy.

use log::info;
use serde::{Deserialize, Serialize};

use crate::model::Document;

/// Character budget for sample and preview text.
const SAMPLE_LEN: usize = 50;

/// One distinct style paired with a sample of the first paragraph using it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSample {
    /// Style display name
    pub name: String,
    /// First paragraph text for this style, truncated to the sample budget
    pub sample: String,
}

/// A (style, text) pair selected by the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntry {
    /// Display name of the matched style
    pub style_name: String,
    /// Trimmed paragraph text
    pub text: String,
}

/// Collect the distinct style names in first-seen order.
///
/// Each name is paired with the text of the first paragraph using it,
/// truncated to 50 characters with an ellipsis marker when truncation
/// occurred. The input is not mutated.
pub fn style_inventory(document: &Document) -> Vec<StyleSample> {
    let mut seen: Vec<StyleSample> = Vec::new();

    for para in &document.paragraphs {
        if seen.iter().any(|s| s.name == para.style_name) {
            continue;
        }

        seen.push(StyleSample {
            name: para.style_name.clone(),
            sample: truncate_sample(&para.plain_text()),
        });
    }

    seen
}

/// Render the inventory as the human-readable `--list-styles` report.
pub fn render_inventory_report(samples: &[StyleSample]) -> String {
    let mut out = String::new();

    out.push_str("\nAll Styles in Document:\n");
    out.push_str(&"-".repeat(SAMPLE_LEN));
    out.push('\n');

    for sample in samples {
        out.push_str(&format!("\nStyle: {}\n", sample.name));
        out.push_str(&format!("Sample text: {}\n", sample.sample));
    }

    out.push_str(&format!("\nTotal unique styles found: {}\n", samples.len()));
    out
}

/// Select every non-blank paragraph whose style name case-insensitively
/// equals one of the target names, in source order.
///
/// Duplicate or case-variant targets collapse to the same matching set;
/// each paragraph is visited once, so no duplicate entries result.
pub fn extract_styled(document: &Document, target_styles: &[String]) -> Vec<ExtractedEntry> {
    let targets: Vec<String> = target_styles.iter().map(|s| s.to_lowercase()).collect();
    let mut extracted = Vec::new();

    for para in &document.paragraphs {
        let text = para.plain_text();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        if targets.contains(&para.style_name.to_lowercase()) {
            info!(
                "Found matching style '{}': {}",
                para.style_name,
                truncate_sample(text)
            );
            extracted.push(ExtractedEntry {
                style_name: para.style_name.clone(),
                text: text.to_string(),
            });
        }
    }

    extracted
}

/// Truncate text to the sample budget, marking truncation with an ellipsis.
pub fn truncate_sample(text: &str) -> String {
    if text.chars().count() > SAMPLE_LEN {
        let cut: String = text.chars().take(SAMPLE_LEN).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn sample_document() -> Document {
        [
            ("Heading 1", "Introduction"),
            ("Normal", "Body text one."),
            ("Normal", "   "),
            ("Heading 1", "Background"),
            ("List Bullet", "first item"),
        ]
        .iter()
        .map(|(style, text)| Paragraph::with_text(*style, *text))
        .collect()
    }

    #[test]
    fn test_inventory_first_seen_order() {
        let samples = style_inventory(&sample_document());
        let names: Vec<&str> = samples.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Heading 1", "Normal", "List Bullet"]);
        assert_eq!(samples[0].sample, "Introduction");
    }

    #[test]
    fn test_inventory_report() {
        let samples = style_inventory(&sample_document());
        let report = render_inventory_report(&samples);
        assert!(report.contains("All Styles in Document:"));
        assert!(report.contains("Style: Heading 1"));
        assert!(report.contains("Sample text: Introduction"));
        assert!(report.contains("Total unique styles found: 3"));
    }

    #[test]
    fn test_extract_case_insensitive() {
        let doc = sample_document();
        let lower = extract_styled(&doc, &["heading 1".to_string()]);
        let upper = extract_styled(&doc, &["HEADING 1".to_string()]);
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
        assert_eq!(lower[0].text, "Introduction");
        assert_eq!(lower[1].text, "Background");
    }

    #[test]
    fn test_extract_preserves_source_order() {
        let doc = sample_document();
        let entries = extract_styled(
            &doc,
            &["List Bullet".to_string(), "Heading 1".to_string()],
        );
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["Introduction", "Background", "first item"]);
    }

    #[test]
    fn test_extract_skips_blank_paragraphs() {
        let doc = sample_document();
        let entries = extract_styled(&doc, &["Normal".to_string()]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Body text one.");
    }

    #[test]
    fn test_extract_duplicate_targets_collapse() {
        let doc = sample_document();
        let entries = extract_styled(
            &doc,
            &["Heading 1".to_string(), "HEADING 1".to_string()],
        );
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_extract_exact_match_only() {
        let doc = sample_document();
        // "Heading" is a prefix of "Heading 1" but must not match here
        let entries = extract_styled(&doc, &["Heading".to_string()]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_truncate_sample() {
        let short = "a".repeat(50);
        assert_eq!(truncate_sample(&short), short);

        let long = "b".repeat(51);
        let truncated = truncate_sample(&long);
        assert_eq!(truncated.len(), 53);
        assert!(truncated.ends_with("..."));
    }
}
