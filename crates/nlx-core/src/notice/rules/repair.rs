//! Number-corruption repair for PDF-extracted text.
//!
//! PDF extraction occasionally splits a currency or UFIMA amount with a
//! stray space or a stray space-and-dot, or moves the `R$` marker behind
//! its amount. Each rewrite below targets one observed corruption
//! signature; anything else passes through untouched. Rule order matters:
//! later rules rely on earlier ones not reintroducing ambiguity.

use regex::{Captures, Regex};

use super::patterns::{
    GLITCH_SPLIT_CENTS, GLITCH_SPLIT_CENTS_2, GLITCH_SPLIT_DOT, GLITCH_SPLIT_GROUPED,
    GLITCH_SPLIT_THOUSANDS, GLITCH_TRAILING_CURRENCY, INTRALINE_WS,
};

/// Repair corrupted number tokens and collapse intra-line whitespace runs.
///
/// Newlines are preserved. Applying this twice yields the same result as
/// applying it once.
pub fn repair_numbers(text: &str) -> String {
    // R$ d d,dd / R$ d dd,dd: reattach the leading digit
    let s = GLITCH_SPLIT_CENTS.replace_all(text, "${1}${2}${3}");
    let s = GLITCH_SPLIT_CENTS_2.replace_all(&s, "${1}${2}${3}");

    // d ddd,dd outside a larger number: recover the thousands separator
    let s = rewrite_guarded(&s, &GLITCH_SPLIT_THOUSANDS, true, true, |c| {
        format!("{}.{}", &c[1], &c[2])
    });

    // d d.ddd,dd / d .ddd,dd: stray space (and dot) inside a grouped amount
    let s = rewrite_guarded(&s, &GLITCH_SPLIT_GROUPED, true, false, |c| {
        format!("{}{}", &c[1], &c[2])
    });
    let s = rewrite_guarded(&s, &GLITCH_SPLIT_DOT, true, false, |c| {
        format!("{}.{}", &c[1], &c[2])
    });

    // amount R$ -> R$ amount
    let s = rewrite_guarded(&s, &GLITCH_TRAILING_CURRENCY, true, false, |c| {
        format!("R$ {}", &c[1])
    });

    INTRALINE_WS.replace_all(&s, " ").into_owned()
}

/// Replace every match whose neighboring characters pass the digit guards.
///
/// The original rewrites used lookaround for the guards; `regex` has none,
/// so they are checked against the bytes surrounding each match instead.
fn rewrite_guarded(
    text: &str,
    re: &Regex,
    no_digit_before: bool,
    no_digit_after: bool,
    apply: impl Fn(&Captures) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let m = caps.get(0).unwrap();
        let prev_is_digit = text[..m.start()]
            .bytes()
            .last()
            .is_some_and(|b| b.is_ascii_digit());
        let next_is_digit = text[m.end()..]
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_digit());

        if (no_digit_before && prev_is_digit) || (no_digit_after && next_is_digit) {
            continue;
        }

        out.push_str(&text[last..m.start()]);
        out.push_str(&apply(&caps));
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}
