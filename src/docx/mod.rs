//! DOCX loading.
//!
//! OOXML decoding is delegated entirely to the `docx_rs` crate; this module
//! only flattens its object tree into the plain records in [`crate::model`].
//! Tables, images, headers/footers, and numbering are not carried over.

mod styles;

pub use styles::{StyleNames, DEFAULT_STYLE_NAME};

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Run};

/// Loader that turns a `.docx` file into a [`Document`].
///
/// # Example
///
/// ```no_run
/// use styledown::docx::DocxLoader;
///
/// let doc = DocxLoader::open("report.docx")?.load();
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// # Ok::<(), styledown::Error>(())
/// ```
#[derive(Debug)]
pub struct DocxLoader {
    docx: docx_rs::Docx,
}

impl DocxLoader {
    /// Open a document from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a document from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let docx = docx_rs::read_docx(data)?;
        Ok(Self { docx })
    }

    /// Flatten the parsed document into ordered paragraph records.
    pub fn load(&self) -> Document {
        let styles = StyleNames::from_docx(&self.docx);
        let mut document = Document::new();

        for child in &self.docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(para) = child {
                document.push(convert_paragraph(para, &styles));
            }
        }

        document
    }
}

fn convert_paragraph(para: &docx_rs::Paragraph, styles: &StyleNames) -> Paragraph {
    let style_id = para.property.style.as_ref().map(|s| s.val.as_str());
    let mut out = Paragraph::new(styles.resolve(style_id));

    collect_runs(&para.children, &mut out);
    out
}

fn collect_runs(children: &[docx_rs::ParagraphChild], out: &mut Paragraph) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => out.add_run(convert_run(run)),
            // Hyperlink text keeps its run-level formatting
            docx_rs::ParagraphChild::Hyperlink(link) => collect_runs(&link.children, out),
            _ => {}
        }
    }
}

/// Convert one run, reading only formatting applied directly to it.
fn convert_run(run: &docx_rs::Run) -> Run {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }

    Run::styled(
        text,
        run.run_property.bold.as_ref().is_some_and(flag_is_set),
        run.run_property.italic.as_ref().is_some_and(flag_is_set),
    )
}

/// `docx_rs::Bold`/`Italic` keep their `val` private; their `Serialize`
/// impls emit it as a bare bool.
fn flag_is_set<T: serde::Serialize>(flag: &T) -> bool {
    serde_json::to_value(flag).is_ok_and(|v| v == true)
}
