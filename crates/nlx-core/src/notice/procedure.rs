//! Launch-policy helpers: procedure codes, due dates and form-entry
//! normalization for the downstream launch system.
//!
//! The engine itself never launches anything; these helpers let a caller
//! turn a parsed [`crate::Notice`] into a launch plan. The current date
//! enters at the caller's boundary, keeping this module pure.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Description prefix -> procedure code, in priority order. The first
/// matching key wins.
pub const PROCEDURE_MAP: &[(&str, &str)] = &[
    ("ISS - Mão de Obra", "24"),
    ("ISS - Demolição", "24"),
    ("ISS - Reforma", "24"),
    ("ISS - Responsável Técnico", "36"),
    ("Taxa de Obras - Vistoria Residencial", "103"),
    ("Taxa de Obras - Vistoria Comercial", "103"),
    ("Taxas de Obras", "28"),
    ("Taxas de Obras - Renovação de Alvará", "28"),
];

/// The ISS procedure code; it carries the longer payment deadline.
pub const ISS_CODE: &str = "24";

/// Resolve the procedure code for a tax-line description.
///
/// Prefix match first, then coarse fallbacks (any `iss`, substring match,
/// any `taxa`). `None` means no code could be determined, which is fatal
/// for the launch collaborator.
pub fn procedure_code(description: &str) -> Option<&'static str> {
    let desc = description.trim().to_lowercase();

    for (key, code) in PROCEDURE_MAP {
        if desc.starts_with(&key.to_lowercase()) {
            return Some(code);
        }
    }

    if desc.contains("iss") {
        return Some(ISS_CODE);
    }

    for (key, code) in PROCEDURE_MAP {
        if desc.contains(&key.to_lowercase()) {
            return Some(code);
        }
    }

    if desc.contains("taxa") {
        return Some("28");
    }

    None
}

/// Days until payment is due for a given procedure code.
pub fn due_offset_days(code: &str) -> i64 {
    if code == ISS_CODE { 30 } else { 20 }
}

/// Due date from a base date: fixed offset per procedure code, weekend
/// targets rolled forward to the next business day.
pub fn due_date(base: NaiveDate, code: &str) -> NaiveDate {
    let target = base + Duration::days(due_offset_days(code));
    match target.weekday() {
        Weekday::Sat => target + Duration::days(2),
        Weekday::Sun => target + Duration::days(1),
        _ => target,
    }
}

/// Format a date as `DDMMYYYY`, no separators (target form entry format).
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    format!("{:02}{:02}{:04}", date.day(), date.month(), date.year())
}

/// Normalize a canonical currency amount for form entry:
/// `R$ 17.257,22` -> `17257,22`.
pub fn form_amount(amount_currency: &str) -> String {
    amount_currency.replace("R$", "").trim().replace('.', "")
}
