//! Section-grouped Markdown writing for extracted entries.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::style::ExtractedEntry;

/// Render extracted entries grouped under `##` style headers.
///
/// A header is emitted whenever the style changes relative to the previous
/// entry; consecutive same-style entries share one header. Entry order is
/// never changed, so interleaved styles produce repeated headers.
pub fn render_grouped(entries: &[ExtractedEntry]) -> String {
    let mut out = String::new();
    let mut current_style: Option<&str> = None;

    for entry in entries {
        if current_style != Some(entry.style_name.as_str()) {
            out.push_str(&format!("\n## {}\n\n", entry.style_name));
            current_style = Some(entry.style_name.as_str());
        }

        out.push_str(&format!("{}\n\n", entry.text));
    }

    out
}

/// Write the grouped rendering to a file.
pub fn write_grouped(entries: &[ExtractedEntry], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    fs::write(path, render_grouped(entries))?;
    info!("Content saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(style: &str, text: &str) -> ExtractedEntry {
        ExtractedEntry {
            style_name: style.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_consecutive_styles_share_header() {
        let entries = [entry("A", "one"), entry("A", "two"), entry("B", "three")];
        let out = render_grouped(&entries);

        assert_eq!(out.matches("## A").count(), 1);
        assert_eq!(out.matches("## B").count(), 1);
        assert_eq!(out, "\n## A\n\none\n\ntwo\n\n\n## B\n\nthree\n\n");
    }

    #[test]
    fn test_interleaved_styles_repeat_headers() {
        let entries = [entry("A", "one"), entry("B", "two"), entry("A", "three")];
        let out = render_grouped(&entries);
        assert_eq!(out.matches("## A").count(), 2);
    }

    #[test]
    fn test_empty_entries_render_nothing() {
        assert_eq!(render_grouped(&[]), "");
    }

    #[test]
    fn test_write_grouped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted.md");

        write_grouped(&[entry("Heading 1", "Intro")], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\n## Heading 1\n\nIntro\n\n");
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // Writing to a directory path fails with an I/O error
        let err = write_grouped(&[entry("A", "x")], dir.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
