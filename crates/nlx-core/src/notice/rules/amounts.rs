//! Brazilian currency amount helpers.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::CURRENCY_AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Scans `R$` amounts anywhere in a text.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in CURRENCY_AMOUNT.captures_iter(text) {
            if let Some(amount) = parse_brazilian_amount(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Parse a Brazilian-formatted amount (e.g., `1.234,56` or `240,0`).
pub fn parse_brazilian_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    // Dots group thousands, the comma is the decimal separator
    let normalized = cleaned.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in Brazilian style (`1.234,56`).
pub fn format_brazilian_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brazilian_amount() {
        assert_eq!(
            parse_brazilian_amount("1.234,56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_brazilian_amount("17.257,22"),
            Some(Decimal::from_str("17257.22").unwrap())
        );
        assert_eq!(
            parse_brazilian_amount("240,0"),
            Some(Decimal::from_str("240.0").unwrap())
        );
        assert_eq!(parse_brazilian_amount("sem valor"), None);
    }

    #[test]
    fn test_format_brazilian_amount() {
        let amount = Decimal::from_str("1234.56").unwrap();
        assert_eq!(format_brazilian_amount(amount), "1.234,56");

        let amount = Decimal::from_str("12345678.90").unwrap();
        assert_eq!(format_brazilian_amount(amount), "12.345.678,90");

        let amount = Decimal::from_str("5.00").unwrap();
        assert_eq!(format_brazilian_amount(amount), "5,00");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for s in ["1.234,56", "17.257,22", "100,00"] {
            let parsed = parse_brazilian_amount(s).unwrap();
            assert_eq!(format_brazilian_amount(parsed), s);
        }
    }

    #[test]
    fn test_extract_all_amounts() {
        let extractor = AmountExtractor::new();
        let text = "Custo: R$ 100,00 e total R$ 1.234,56";

        let results = extractor.extract_all(text);
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].value, Decimal::from_str("1234.56").unwrap());
    }
}
