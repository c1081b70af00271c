//! Strict parser for the human-edited text form.

use regex::Regex;
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::notice::{Notice, NoticeItem};

use super::Result;
use super::rules::patterns::{
    EDITED_CGM, EDITED_ITEM, EDITED_NOTICE, EDITED_PROCESS, EDITED_REGISTRATION,
};

/// Parse the canonical editable text back into a notice.
///
/// This path sits immediately before an irreversible external action, so it
/// is strict: process id, notice number, subject id and at least one item
/// are mandatory. The property registration id may be empty (it is carried
/// but not keyed on downstream).
pub fn parse_edited(text: &str) -> Result<Notice> {
    let origin_process_id = capture(&EDITED_PROCESS, text);
    let notice_number = capture(&EDITED_NOTICE, text);
    let subject_id: String = capture(&EDITED_CGM, text)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let property_registration_id = capture(&EDITED_REGISTRATION, text);

    let mut items = Vec::new();
    for line in text.lines() {
        if let Some(caps) = EDITED_ITEM.captures(line.trim()) {
            items.push(NoticeItem {
                description: caps["desc"].trim().to_string(),
                amount_currency: format!("R$ {}", &caps["rs"]),
                amount_units: format!("{} UFIMA(s)", caps["uf"].replace('.', ",")),
            });
        }
    }

    if origin_process_id.is_empty() {
        return Err(ExtractionError::MissingField("Processo de Origem".to_string()));
    }
    if notice_number.is_empty() {
        return Err(ExtractionError::MissingField("NL".to_string()));
    }
    if subject_id.is_empty() {
        return Err(ExtractionError::MissingField("CGM do Sujeito Passivo".to_string()));
    }
    if items.is_empty() {
        return Err(ExtractionError::NoItems);
    }

    debug!(items = items.len(), "edited text parsed");

    Ok(Notice {
        origin_process_id,
        notice_number,
        subject_id,
        property_registration_id,
        items,
    })
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}
