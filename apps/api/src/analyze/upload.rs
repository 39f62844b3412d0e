//! Upload admission gate. Rejections happen here, before any network call —
//! a disallowed media type or oversize file never reaches the completion
//! service.

#![allow(dead_code)]

use thiserror::Error;

use crate::analyze::analyzer::AnalysisResult;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

/// Why an upload was refused. Display strings are the exact texts the
/// widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Please upload a PDF or DOCX file")]
    UnsupportedMediaType,
    #[error("File size must be less than 5MB")]
    TooLarge,
}

/// Checks declared media type and size. Type is checked first.
pub fn admit(media_type: &str, size: usize) -> Result<DocumentKind, AdmissionError> {
    let kind = match media_type {
        MEDIA_TYPE_PDF => DocumentKind::Pdf,
        MEDIA_TYPE_DOCX => DocumentKind::Docx,
        _ => return Err(AdmissionError::UnsupportedMediaType),
    };
    if size > MAX_UPLOAD_BYTES {
        return Err(AdmissionError::TooLarge);
    }
    Ok(kind)
}

/// A file accepted by the gate and held for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDocument {
    pub filename: String,
    pub kind: DocumentKind,
    pub size: usize,
}

/// The widget's staging state: exactly one file at a time. Successfully
/// staging a new file clears any previous result and error; a rejected file
/// records the error and leaves the slot as it was.
#[derive(Debug, Default)]
pub struct UploadSlot {
    staged: Option<StagedDocument>,
    error: Option<String>,
    analysis: Option<AnalysisResult>,
}

impl UploadSlot {
    pub fn stage(
        &mut self,
        filename: &str,
        media_type: &str,
        size: usize,
    ) -> Result<(), AdmissionError> {
        match admit(media_type, size) {
            Ok(kind) => {
                self.staged = Some(StagedDocument {
                    filename: filename.to_string(),
                    kind,
                    size,
                });
                self.error = None;
                self.analysis = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_analysis(&mut self, analysis: AnalysisResult) {
        self.analysis = Some(analysis);
    }

    pub fn staged(&self) -> Option<&StagedDocument> {
        self.staged.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }
}
