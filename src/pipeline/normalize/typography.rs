//! Typographic character normalization.
//!
//! Maps curly quotes, en/em dashes and the ellipsis glyph to their plain
//! ASCII equivalents so downstream consumers never have to match both forms.

use super::StageOutcome;

pub fn normalize(text: &str) -> StageOutcome {
    let mut double_quotes = 0u64;
    let mut single_quotes = 0u64;
    let mut dashes = 0u64;
    let mut ellipses = 0u64;

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' => {
                double_quotes += 1;
                out.push('"');
            }
            '\u{2018}' | '\u{2019}' | '\u{201A}' => {
                single_quotes += 1;
                out.push('\'');
            }
            '\u{2013}' | '\u{2014}' => {
                dashes += 1;
                out.push('-');
            }
            '\u{2026}' => {
                ellipses += 1;
                out.push_str("...");
            }
            _ => out.push(c),
        }
    }

    StageOutcome {
        text: out,
        counters: vec![
            ("double_quotes_normalized", double_quotes),
            ("single_quotes_normalized", single_quotes),
            ("dashes_normalized", dashes),
            ("ellipses_normalized", ellipses),
        ],
    }
}
