//! Notice parser: composes repair, window, header and item extraction.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::notice::Notice;
use crate::pdf::{PdfExtractor, PdfProcessor};

use super::rules::amounts::AmountExtractor;
use super::rules::{FieldExtractor, extract_header, extract_items, extract_window, repair_numbers};

/// Result of a best-effort extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted notice data.
    pub notice: Notice,
    /// Repaired source text.
    pub text: String,
    /// Extraction warnings. Gaps are never errors on this path.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Best-effort notice parser.
///
/// The source document varies, so missing header fields and an empty item
/// list are reported as warnings; this path never fails on document
/// content. The strict counterpart is [`super::parse_edited`].
pub struct NoticeParser {
    repair_numbers: bool,
}

impl NoticeParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self { repair_numbers: true }
    }

    /// Toggle number-corruption repair (on by default).
    pub fn with_number_repair(mut self, repair: bool) -> Self {
        self.repair_numbers = repair;
        self
    }

    /// Parse a notice from extracted document text.
    pub fn parse(&self, raw_text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing notice from {} characters of text", raw_text.len());

        let text = if self.repair_numbers {
            repair_numbers(raw_text)
        } else {
            raw_text.to_string()
        };

        let header = extract_header(&text);
        for (field, value) in [
            ("origin process id", &header.origin_process_id),
            ("notice number", &header.notice_number),
            ("subject CGM", &header.subject_id),
            ("property registration id", &header.property_registration_id),
        ] {
            if value.is_empty() {
                warnings.push(format!("could not extract {}", field));
            }
        }

        let window = extract_window(&text);
        if window.len() == text.len() {
            warnings.push("window anchors not found, scanning the whole document".to_string());
        }

        let items = extract_items(window);
        if items.is_empty() {
            warnings.push("no recognized line items".to_string());
        } else {
            let monetary = AmountExtractor::new().extract_all(window).len();
            if monetary > items.len() {
                debug!(
                    monetary,
                    kept = items.len(),
                    "monetary lines discarded by classification"
                );
            }
        }

        let notice = Notice {
            origin_process_id: header.origin_process_id,
            notice_number: header.notice_number,
            subject_id: header.subject_id,
            property_registration_id: header.property_registration_id,
            items,
        };

        debug!(
            items = notice.items.len(),
            notice = %notice.notice_number,
            "extraction finished"
        );

        ExtractionResult {
            notice,
            text,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Parse a notice straight from PDF bytes.
    ///
    /// Only PDF-layer failures are fatal; document content never is.
    pub fn parse_pdf(&self, data: &[u8]) -> Result<ExtractionResult> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;
        let text = extractor.extract_text()?;
        Ok(self.parse(&text))
    }
}

impl Default for NoticeParser {
    fn default() -> Self {
        Self::new()
    }
}
