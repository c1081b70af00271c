//! Notice field extraction module.

mod edited;
mod parser;
pub mod procedure;
pub mod rules;

pub use edited::parse_edited;
pub use parser::{ExtractionResult, NoticeParser};

use crate::error::ExtractionError;

/// Result type for strict extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
