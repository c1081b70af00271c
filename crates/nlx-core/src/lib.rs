//! Core library for NL (Notificação de Lançamento) tax notice processing.
//!
//! This crate provides:
//! - PDF text extraction (per page, newline separated)
//! - Repair of number tokens corrupted by PDF text extraction
//! - Header field and classified line-item extraction
//! - A lossless round-trip through a human-editable text form

pub mod error;
pub mod models;
pub mod notice;
pub mod pdf;

pub use error::{ExtractionError, NlxError, PdfError, Result};
pub use models::config::NlxConfig;
pub use models::notice::{Notice, NoticeItem, TaxLineKind};
pub use notice::{ExtractionResult, NoticeParser, parse_edited};
pub use pdf::{PdfExtractor, PdfProcessor};
