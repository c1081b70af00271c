//! Window extraction: the document sub-region holding the line items.

use tracing::debug;

use super::patterns::{WINDOW_END, WINDOW_START, WINDOW_START_ALT};

/// Slice the region between the UFIMA-rate anchor and the grand-total line.
///
/// The start anchor is the first `Valor da UFIMA Corrente` line (currency
/// marker on either side of the number). The end anchor is the **last**
/// `Total Geral` line, because the total phrase may also appear earlier in
/// explanatory text. With either anchor missing there is no safe truncation
/// and the whole input is returned; the item whitelist downstream bounds
/// what can leak in.
pub fn extract_window(text: &str) -> &str {
    let start = WINDOW_START
        .find(text)
        .or_else(|| WINDOW_START_ALT.find(text));
    let end = WINDOW_END.find_iter(text).last();

    match (start, end) {
        (Some(s), Some(e)) => {
            debug!(start = s.end(), end = e.end(), "window anchors found");
            &text[s.end().min(e.end())..e.end()]
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_between_anchors() {
        let text = "cabeçalho\n\
                    Valor da UFIMA Corrente: R$ 5,00\n\
                    ISS - Demolição R$ 1.200,00 240,0 UFIMA(s)\n\
                    Total Geral R$ 1.200,00 240,0 UFIMA(s)\n\
                    rodapé";

        let window = extract_window(text);
        assert!(window.contains("ISS - Demolição"));
        assert!(!window.contains("cabeçalho"));
        assert!(!window.contains("rodapé"));
        assert!(window.ends_with("UFIMA(s)"));
    }

    #[test]
    fn test_number_first_start_anchor() {
        let text = "Valor da UFIMA Corrente: 5,00 R$ meio Total Geral R$ 1,00 1,0 UFIMA(s)";
        assert_eq!(extract_window(text), " meio Total Geral R$ 1,00 1,0 UFIMA(s)");
    }

    #[test]
    fn test_last_end_anchor_wins() {
        let text = "Valor da UFIMA Corrente: R$ 5,00 \
                    Total Geral R$ 1,00 1,0 UFIMA(s) explicação \
                    Total Geral R$ 2,00 2,0 UFIMA(s)";

        let window = extract_window(text);
        assert!(window.contains("explicação"));
        assert!(window.ends_with("2,0 UFIMA(s)"));
    }

    #[test]
    fn test_missing_end_anchor_degenerates() {
        let text = "Valor da UFIMA Corrente: R$ 5,00 e nada mais";
        assert_eq!(extract_window(text), text);
    }

    #[test]
    fn test_missing_both_anchors_degenerates() {
        let text = "documento qualquer";
        assert_eq!(extract_window(text), text);
    }
}
