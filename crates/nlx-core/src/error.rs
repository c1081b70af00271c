//! Error types for the nlx-core library.

use thiserror::Error;

/// Main error type for the nlx library.
#[derive(Error, Debug)]
pub enum NlxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Strict extraction error (edited-text path).
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
///
/// These are fatal preconditions: without extractable text there is no
/// document to parse. Missing *fields* inside extracted text are never a
/// `PdfError` (the raw-document parser is best-effort).
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors raised by the strict edited-text parser.
///
/// This path runs immediately before an irreversible external action, so an
/// incomplete record is rejected rather than patched up. The human fixes the
/// editable text and resubmits.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Field validation failed.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// No line items could be parsed.
    #[error("no line items found")]
    NoItems,
}

/// Result type for the nlx library.
pub type Result<T> = std::result::Result<T, NlxError>;
