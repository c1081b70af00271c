//! Common regex patterns for NL notice extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Brazilian currency amount: grouped thousands, comma decimals (`1.234,56`).
pub const REAL: &str = r"\d{1,3}(?:\.\d{3})*,\d{2}";

/// UFIMA unit amount: integer part plus 1-5 fractional digits (`240,0`).
pub const UNITS: &str = r"\d+(?:[.,]\d{1,5})";

lazy_static! {
    // Number repair: each pattern targets one corruption signature that PDF
    // text extraction produces. Digit-adjacency guards live in repair.rs.
    pub static ref GLITCH_SPLIT_CENTS: Regex = Regex::new(
        r"(R\$\s*)(\d)\s(\d,\d{2})"
    ).unwrap();

    pub static ref GLITCH_SPLIT_CENTS_2: Regex = Regex::new(
        r"(R\$\s*)(\d)\s(\d{2},\d{2})"
    ).unwrap();

    pub static ref GLITCH_SPLIT_THOUSANDS: Regex = Regex::new(
        r"(\d)\s(\d{3},\d{2})"
    ).unwrap();

    pub static ref GLITCH_SPLIT_GROUPED: Regex = Regex::new(
        r"(\d)\s(\d\.\d{3},\d{2})"
    ).unwrap();

    pub static ref GLITCH_SPLIT_DOT: Regex = Regex::new(
        r"(\d)\s\.(\d{3},\d{2})"
    ).unwrap();

    pub static ref GLITCH_TRAILING_CURRENCY: Regex = Regex::new(
        &format!(r"({})\s*R\$", REAL)
    ).unwrap();

    pub static ref INTRALINE_WS: Regex = Regex::new(
        r"[ \t]+"
    ).unwrap();

    // Window anchors
    pub static ref WINDOW_START: Regex = Regex::new(
        &format!(r"(?i)Valor da UFIMA Corrente\s*:\s*R\$\s*{}", REAL)
    ).unwrap();

    pub static ref WINDOW_START_ALT: Regex = Regex::new(
        &format!(r"(?i)Valor da UFIMA Corrente\s*:\s*{}\s*R\$", REAL)
    ).unwrap();

    pub static ref WINDOW_END: Regex = Regex::new(
        &format!(r"(?i)Total Geral\s+R\$\s*{}\s+{}\s*UFIMA(?:\(\s*s\s*\))?", REAL, UNITS)
    ).unwrap();

    // Header fields
    pub static ref PROCESS_ID: Regex = Regex::new(
        r"(?i)Processo\s+de\s+Origem[:\s]*([\d.,]+)"
    ).unwrap();

    pub static ref PROCESS_ID_ALT: Regex = Regex::new(
        r"(?i)PROCESSO\s+ADMINISTRATIVO\s*[:\s]*([\d.,]+)"
    ).unwrap();

    pub static ref NOTICE_NUMBER: Regex = Regex::new(
        r"(?i)N[ºo]\s+(\d+/\d{4})"
    ).unwrap();

    pub static ref CGM_LABEL: Regex = Regex::new(
        r"(?i)CGM\s*:*"
    ).unwrap();

    pub static ref CGM_DIGITS: Regex = Regex::new(
        r"\d{4,}"
    ).unwrap();

    pub static ref REGISTRATION_LABEL: Regex = Regex::new(
        r"(?i)MATRICULA\s+IM[ÓO]VEL\s*:*"
    ).unwrap();

    pub static ref REGISTRATION_DIGITS: Regex = Regex::new(
        r"\d{2,}"
    ).unwrap();

    // Line items
    pub static ref BOILERPLATE_TRIBUTOS: Regex = Regex::new(
        r"(?i)Tributos para Lançamento\s+Valor em R\$\s+Valor em UFIMA\(s\)\s*"
    ).unwrap();

    pub static ref BOILERPLATE_OBRAS: Regex = Regex::new(
        r"(?i)Descrição das Taxas de Obras\s+Valor em R\$\s+Valor em UFIMA\(s\)\s*"
    ).unwrap();

    pub static ref ANY_WS: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    pub static ref INNER_WS: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    pub static ref ITEM_LINE: Regex = Regex::new(&format!(
        r"(?i)(?P<desc>(?:ISS\s*-\s*.+?|Taxa(?:s)?\s+de\s+Obras(?:\s*-\s*.+?)?))\s+R\$\s*(?P<rs>{})\s+(?P<uf>{})\s*UFIMA(?:\(\s*s\s*\))?",
        REAL, UNITS
    )).unwrap();

    // Bare currency amounts (diagnostics)
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        &format!(r"R\$\s*({})", REAL)
    ).unwrap();

    // Edited-text form. The free-text values use `[ \t]*` rather than
    // `\s*` so an emptied field stays empty instead of capturing the
    // following label line.
    pub static ref EDITED_PROCESS: Regex = Regex::new(
        r"Processo de Origem:[ \t]*(.+)"
    ).unwrap();

    pub static ref EDITED_NOTICE: Regex = Regex::new(
        r"NL:\s*([0-9]+/[0-9]{4})"
    ).unwrap();

    pub static ref EDITED_CGM: Regex = Regex::new(
        r"CGM do Sujeito Passivo:\s*([0-9.]+)"
    ).unwrap();

    pub static ref EDITED_REGISTRATION: Regex = Regex::new(
        r"Matrícula do Imóvel:[ \t]*(.+)"
    ).unwrap();

    pub static ref EDITED_ITEM: Regex = Regex::new(&format!(
        r"(?i)^(?P<desc>.+?)\s*\|\s*R\$\s*(?P<rs>{})\s*\|\s*(?P<uf>[\d.,]+)\s*UFIMA\(s\)\s*$",
        REAL
    )).unwrap();
}
