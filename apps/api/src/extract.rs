//! Text extraction for uploaded documents.
//!
//! Dispatches on the filename suffix (case-insensitive): `.pdf` goes through
//! pdf-extract, `.doc`/`.docx` through docx-rs. No OCR, no structure
//! preservation — the result is a trimmed plain-text blob for prompting.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Error extracting {kind}: {cause}")]
    Extraction { kind: &'static str, cause: String },
}

/// Extracts plain text from a document based on its filename extension.
pub fn extract_text(content: &[u8], filename: &str) -> Result<String, ExtractError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        extract_text_from_pdf(content)
    } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
        extract_text_from_docx(content)
    } else {
        Err(ExtractError::UnsupportedFormat(filename.to_string()))
    }
}

/// Per-page text in page order, newline-separated, trimmed.
fn extract_text_from_pdf(content: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(content).map_err(|e| ExtractError::Extraction {
        kind: "PDF",
        cause: e.to_string(),
    })?;
    Ok(text.trim().to_string())
}

/// Paragraph text in document order, newline-separated, trimmed.
fn extract_text_from_docx(content: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(content).map_err(|e| ExtractError::Extraction {
        kind: "DOCX",
        cause: e.to_string(),
    })?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text.trim().to_string())
}
