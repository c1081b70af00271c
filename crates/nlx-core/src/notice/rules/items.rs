//! Line-item extraction: find, classify, deduplicate and order the monetary
//! entries inside the document window.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::models::notice::{NoticeItem, TaxLineKind};

use super::patterns::{
    ANY_WS, BOILERPLATE_OBRAS, BOILERPLATE_TRIBUTOS, GLITCH_SPLIT_THOUSANDS, INNER_WS, ITEM_LINE,
};
use super::repair::repair_numbers;

/// One raw pattern match, before dedup.
#[derive(Debug, Clone)]
struct ItemMatch {
    item: NoticeItem,
    position: usize,
}

/// Extract the recognized tax-line items from the window text.
///
/// Only descriptions classified by [`TaxLineKind`] survive: the notice
/// carries many other monetary lines that must never be launched, so this
/// is a whitelist, not a blacklist.
pub fn extract_items(window: &str) -> Vec<NoticeItem> {
    let stripped = BOILERPLATE_TRIBUTOS.replace_all(window, "");
    let stripped = BOILERPLATE_OBRAS.replace_all(&stripped, "");
    let repaired = repair_numbers(&stripped);
    let flat = ANY_WS.replace_all(&repaired, " ");

    let mut matches = Vec::new();
    for caps in ITEM_LINE.captures_iter(&flat) {
        let description = normalize_description(&caps["desc"]);

        if TaxLineKind::classify(&description).is_none() {
            trace!(%description, "monetary line outside the allow-list, dropped");
            continue;
        }

        matches.push(ItemMatch {
            item: NoticeItem {
                description,
                amount_currency: canonical_currency(&caps["rs"]),
                amount_units: canonical_units(&caps["uf"]),
            },
            position: caps.get(0).unwrap().start(),
        });
    }

    dedup_and_order(matches)
}

/// Collapse inner whitespace and strip surrounding dashes and spaces.
fn normalize_description(raw: &str) -> String {
    let collapsed = INNER_WS.replace_all(raw, " ");
    collapsed
        .trim_matches(|c| c == ' ' || c == '-')
        .to_string()
}

/// Canonical currency form: thousands separator reinserted if repair missed
/// a `d ddd,dd` split, then the leading `R$` marker.
fn canonical_currency(raw: &str) -> String {
    let regrouped = GLITCH_SPLIT_THOUSANDS.replace_all(raw, "${1}.${2}");
    format!("R$ {}", regrouped.replace(' ', ""))
}

/// Canonical units form: comma decimals plus the `UFIMA(s)` suffix.
fn canonical_units(raw: &str) -> String {
    format!("{} UFIMA(s)", raw.replace('.', ","))
}

/// Group by `(lowercased description, currency amount)`; the longest units
/// string wins within a group (more precision), with the earliest
/// occurrence kept on a tie. Final order is by each group's first
/// occurrence, independent of which occurrence was kept.
fn dedup_and_order(matches: Vec<ItemMatch>) -> Vec<NoticeItem> {
    let mut by_key: HashMap<(String, String), (ItemMatch, usize)> = HashMap::new();

    for m in matches {
        let key = m.item.dedup_key();
        match by_key.get_mut(&key) {
            None => {
                let first = m.position;
                by_key.insert(key, (m, first));
            }
            Some((best, _first)) => {
                if m.item.amount_units.len() > best.item.amount_units.len() {
                    *best = m;
                }
            }
        }
    }

    let mut kept: Vec<(usize, NoticeItem)> = by_key
        .into_values()
        .map(|(m, first)| (first, m.item))
        .collect();
    kept.sort_by_key(|(first, _)| *first);

    debug!(items = kept.len(), "deduplicated line items");
    kept.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_iss_item() {
        let window = "ISS - Demolição R$ 1.200,00 240,0 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "ISS - Demolição");
        assert_eq!(items[0].amount_currency, "R$ 1.200,00");
        assert_eq!(items[0].amount_units, "240,0 UFIMA(s)");
    }

    #[test]
    fn test_boilerplate_headers_are_stripped() {
        let window = "Tributos para Lançamento Valor em R$ Valor em UFIMA(s) \
                      Taxas de Obras R$ 500,00 100,0 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Taxas de Obras");
    }

    #[test]
    fn test_allow_list_enforced() {
        let window = "Outra Taxa R$ 100,00 5,0 UFIMA(s) \
                      Taxa de Obras - Limpeza R$ 10,00 2,0 UFIMA(s) \
                      ISS - Reforma R$ 50,00 10,0 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "ISS - Reforma");
    }

    #[test]
    fn test_units_decimal_dot_normalized() {
        let window = "ISS - Reforma R$ 50,00 10.5 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items[0].amount_units, "10,5 UFIMA(s)");
    }

    #[test]
    fn test_dedup_keeps_longest_units() {
        let window = "ISS - Mão de Obra R$ 50,00 1,0 UFIMA(s) \
                      ISS - Mão de Obra R$ 50,00 1,00000 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount_units, "1,00000 UFIMA(s)");
    }

    #[test]
    fn test_dedup_tie_keeps_earliest() {
        let window = "ISS - Mão de Obra R$ 50,00 2,0 UFIMA(s) \
                      ISS - Mão de Obra R$ 50,00 3,0 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount_units, "2,0 UFIMA(s)");
    }

    #[test]
    fn test_order_by_first_occurrence() {
        let window = "ISS - Demolição R$ 10,00 2,0 UFIMA(s) \
                      Taxas de Obras R$ 20,00 4,0 UFIMA(s) \
                      ISS - Demolição R$ 10,00 2,00000 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 2);
        // the ISS group keeps the longer-precision duplicate but stays first
        assert_eq!(items[0].description, "ISS - Demolição");
        assert_eq!(items[0].amount_units, "2,00000 UFIMA(s)");
        assert_eq!(items[1].description, "Taxas de Obras");
    }

    #[test]
    fn test_items_differing_in_amount_both_kept() {
        let window = "ISS - Reforma R$ 50,00 10,0 UFIMA(s) \
                      ISS - Reforma R$ 70,00 14,0 UFIMA(s)";
        let items = extract_items(window);

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_multiline_window_is_flattened() {
        let window = "Descrição das Taxas de Obras Valor em R$ Valor em UFIMA(s)\n\
                      Taxa de Obras - Vistoria Residencial\n\
                      R$ 300,00 60,0 UFIMA(s)\n";
        let items = extract_items(window);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Taxa de Obras - Vistoria Residencial");
        assert_eq!(items[0].amount_currency, "R$ 300,00");
    }
}
