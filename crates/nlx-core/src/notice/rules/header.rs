//! Header field extraction.

use super::patterns::{
    CGM_DIGITS, CGM_LABEL, NOTICE_NUMBER, PROCESS_ID, PROCESS_ID_ALT, REGISTRATION_DIGITS,
    REGISTRATION_LABEL,
};

/// The four identifying header fields. Missing fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeHeader {
    pub origin_process_id: String,
    pub notice_number: String,
    pub subject_id: String,
    pub property_registration_id: String,
}

/// Extract the header fields from the full repaired text.
///
/// Best-effort: each field is searched independently and a field whose
/// label or value is absent stays empty. This function never fails.
pub fn extract_header(text: &str) -> NoticeHeader {
    let mut header = NoticeHeader::default();

    let process = PROCESS_ID
        .captures(text)
        .or_else(|| PROCESS_ID_ALT.captures(text));
    if let Some(caps) = process {
        header.origin_process_id = caps[1].trim().to_string();
    }

    if let Some(caps) = NOTICE_NUMBER.captures(text) {
        header.notice_number = caps[1].trim().to_string();
    }

    // A code fragment can sit between the label and the real id, so the
    // last digit run inside the label window wins.
    if let Some(m) = CGM_LABEL.find(text) {
        let window = char_window(text, m.end(), 120);
        if let Some(digits) = CGM_DIGITS.find_iter(window).last() {
            header.subject_id = digits.as_str().to_string();
        }
    }

    if let Some(m) = REGISTRATION_LABEL.find(text) {
        let window = char_window(text, m.end(), 100);
        if let Some(line) = window.lines().map(str::trim).find(|l| !l.is_empty()) {
            if let Some(digits) = REGISTRATION_DIGITS.find_iter(line).last() {
                header.property_registration_id = digits.as_str().to_string();
            }
        }
    }

    header
}

/// A window of up to `max_chars` characters starting at byte offset `start`.
fn char_window(text: &str, start: usize, max_chars: usize) -> &str {
    let tail = &text[start..];
    match tail.char_indices().nth(max_chars) {
        Some((end, _)) => &tail[..end],
        None => tail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_primary_label() {
        let header = extract_header("Processo de Origem: 12.345,00 restante");
        assert_eq!(header.origin_process_id, "12.345,00");
    }

    #[test]
    fn test_process_id_alternate_label() {
        let header = extract_header("PROCESSO ADMINISTRATIVO: 9.876 em curso");
        assert_eq!(header.origin_process_id, "9.876");
    }

    #[test]
    fn test_notice_number() {
        let header = extract_header("Notificação Nº 123/2024 emitida");
        assert_eq!(header.notice_number, "123/2024");
    }

    #[test]
    fn test_cgm_takes_last_digit_run() {
        // "2024" is a code fragment before the real id
        let header = extract_header("CGM: 2024 98765432");
        assert_eq!(header.subject_id, "98765432");
    }

    #[test]
    fn test_cgm_window_is_bounded() {
        let padding = "x".repeat(200);
        let text = format!("CGM: {}12345678", padding);
        let header = extract_header(&text);
        assert_eq!(header.subject_id, "");
    }

    #[test]
    fn test_registration_from_first_line() {
        let header = extract_header("MATRICULA IMÓVEL:\n  Lote 12 - 34567\n  89\n");
        assert_eq!(header.property_registration_id, "34567");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let header = extract_header("documento sem rótulos");
        assert_eq!(header, NoticeHeader::default());
    }
}
