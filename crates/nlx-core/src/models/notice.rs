//! Notice data model for NL (Notificação de Lançamento) documents.

use serde::{Deserialize, Serialize};

/// A single monetary line item on the notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeItem {
    /// Tax line description (member of the recognized set).
    pub description: String,

    /// Amount in currency, canonical form `R$ 1.234,56`.
    pub amount_currency: String,

    /// Amount in fiscal reference units, canonical form `240,0 UFIMA(s)`.
    pub amount_units: String,
}

impl NoticeItem {
    pub fn new(
        description: impl Into<String>,
        amount_currency: impl Into<String>,
        amount_units: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount_currency: amount_currency.into(),
            amount_units: amount_units.into(),
        }
    }

    /// Dedup identity: lowercased description plus currency amount.
    pub fn dedup_key(&self) -> (String, String) {
        (self.description.to_lowercase(), self.amount_currency.clone())
    }
}

/// A parsed assessment notice.
///
/// The raw-document path fills what it can and leaves the rest empty; the
/// edited-text path rejects records with empty mandatory fields before they
/// reach the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Originating administrative process id (digits, dots, commas).
    pub origin_process_id: String,

    /// Notice number in `number/year` form.
    pub notice_number: String,

    /// Taxpayer CGM id (digits only).
    pub subject_id: String,

    /// Property registration id (free text).
    pub property_registration_id: String,

    /// Line items, in document order.
    pub items: Vec<NoticeItem>,
}

impl Notice {
    /// Create a new empty notice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the canonical human-editable text form.
    ///
    /// This is the round-trip wire format: `crate::notice::parse_edited`
    /// accepts exactly this shape back.
    pub fn to_edited_text(&self) -> String {
        let mut out = format!(
            "Processo de Origem: {}\nNL: {}\nCGM do Sujeito Passivo: {}\nMatrícula do Imóvel: {}\n\nLançamentos:\n",
            self.origin_process_id,
            self.notice_number,
            self.subject_id,
            self.property_registration_id,
        );
        for item in &self.items {
            out.push_str(&format!(
                "{} | {} | {}\n",
                item.description, item.amount_currency, item.amount_units
            ));
        }
        out
    }

    /// Validate the notice data and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.origin_process_id.is_empty() {
            issues.push("Missing origin process id".to_string());
        }

        if self.notice_number.is_empty() {
            issues.push("Missing notice number".to_string());
        }

        if self.subject_id.is_empty() {
            issues.push("Missing subject CGM".to_string());
        }

        if self.property_registration_id.is_empty() {
            issues.push("Missing property registration id".to_string());
        }

        if self.items.is_empty() {
            issues.push("No line items".to_string());
        }

        for item in &self.items {
            if TaxLineKind::classify(&item.description).is_none() {
                issues.push(format!("Unrecognized tax line: {}", item.description));
            }
        }

        issues
    }
}

/// The closed set of tax lines this engine is allowed to extract.
///
/// The source document carries many other monetary lines; anything not
/// classified here is dropped, never launched. New kinds are added by
/// extending this enum and its matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxLineKind {
    /// Any `ISS - ...` service line (prefix match).
    Iss,

    /// Plain `Taxas de Obras`.
    ObrasGeneral,

    /// `Taxa de Obras - Vistoria Residencial`.
    VistoriaResidencial,

    /// `Taxa de Obras - Vistoria Comercial`.
    VistoriaComercial,

    /// `Taxas de Obras - Renovação de Alvará`.
    RenovacaoAlvara,
}

impl TaxLineKind {
    /// Classify a normalized description, case-insensitively.
    pub fn classify(description: &str) -> Option<Self> {
        let desc = description.trim().to_lowercase();

        if desc.starts_with("iss -") {
            return Some(TaxLineKind::Iss);
        }

        match desc.as_str() {
            "taxas de obras" => Some(TaxLineKind::ObrasGeneral),
            "taxa de obras - vistoria residencial" => Some(TaxLineKind::VistoriaResidencial),
            "taxa de obras - vistoria comercial" => Some(TaxLineKind::VistoriaComercial),
            "taxas de obras - renovação de alvará" => Some(TaxLineKind::RenovacaoAlvara),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_iss_prefix() {
        assert_eq!(TaxLineKind::classify("ISS - Demolição"), Some(TaxLineKind::Iss));
        assert_eq!(TaxLineKind::classify("iss - mão de obra"), Some(TaxLineKind::Iss));
        assert_eq!(TaxLineKind::classify("ISS sem traço"), None);
    }

    #[test]
    fn test_classify_obras() {
        assert_eq!(TaxLineKind::classify("Taxas de Obras"), Some(TaxLineKind::ObrasGeneral));
        assert_eq!(
            TaxLineKind::classify("Taxa de Obras - Vistoria Residencial"),
            Some(TaxLineKind::VistoriaResidencial)
        );
        assert_eq!(
            TaxLineKind::classify("TAXAS DE OBRAS - RENOVAÇÃO DE ALVARÁ"),
            Some(TaxLineKind::RenovacaoAlvara)
        );
        assert_eq!(TaxLineKind::classify("Taxa de Obras - Limpeza"), None);
        assert_eq!(TaxLineKind::classify("Outra Taxa"), None);
    }

    #[test]
    fn test_to_edited_text() {
        let notice = Notice {
            origin_process_id: "12.345/2024".to_string(),
            notice_number: "77/2024".to_string(),
            subject_id: "98765".to_string(),
            property_registration_id: "4321".to_string(),
            items: vec![NoticeItem::new("ISS - Demolição", "R$ 1.200,00", "240,0 UFIMA(s)")],
        };

        assert_eq!(
            notice.to_edited_text(),
            "Processo de Origem: 12.345/2024\n\
             NL: 77/2024\n\
             CGM do Sujeito Passivo: 98765\n\
             Matrícula do Imóvel: 4321\n\
             \n\
             Lançamentos:\n\
             ISS - Demolição | R$ 1.200,00 | 240,0 UFIMA(s)\n"
        );
    }

    #[test]
    fn test_validate_empty_notice() {
        let issues = Notice::new().validate();
        assert!(issues.contains(&"Missing origin process id".to_string()));
        assert!(issues.contains(&"No line items".to_string()));
    }

    #[test]
    fn test_validate_unrecognized_item() {
        let notice = Notice {
            origin_process_id: "1".to_string(),
            notice_number: "1/2024".to_string(),
            subject_id: "12345".to_string(),
            property_registration_id: "99".to_string(),
            items: vec![NoticeItem::new("Taxa Desconhecida", "R$ 1,00", "1,0 UFIMA(s)")],
        };

        let issues = notice.validate();
        assert_eq!(issues, vec!["Unrecognized tax line: Taxa Desconhecida".to_string()]);
    }
}
