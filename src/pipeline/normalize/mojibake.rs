//! Repair of known mis-decoding artifacts.
//!
//! Text that went through a UTF-8-bytes-read-as-Windows-1252 round trip
//! carries recognizable garbled substrings (mojibake). Each rule below is a
//! literal replacement, applied globally before the next rule runs.
//!
//! The rules are an ordered slice, not a map: the bare close-quote artifact
//! `â€` is a prefix of every three-character artifact, so it must run last
//! among the `â€…` family — running it earlier would corrupt the longer
//! patterns before their own rule is reached.

use super::StageOutcome;

/// Ordered repair rules with longest-prefix priority. Do not reorder.
///
/// The dash artifacts end in curly-quote code points that are easy to
/// confuse in source, so their tails are written as escapes.
const REPAIR_RULES: &[(&str, &str)] = &[
    ("â€™", "'"),            // right single quote
    ("â€œ", "\""),           // left double quote
    ("â€\u{201D}", "—"),     // em dash, tail U+201D
    ("â€\u{201C}", "–"),     // en dash, tail U+201C
    ("â€¦", "..."),          // ellipsis
    ("â€", "\""),            // right double quote (bare prefix, keep last)
    ("Â", ""),               // stray non-breaking-space marker
];

pub fn repair(text: &str) -> StageOutcome {
    let mut out = text.to_string();
    let mut fixes = 0u64;

    for (pattern, replacement) in REPAIR_RULES {
        let count = out.matches(pattern).count() as u64;
        if count > 0 {
            fixes += count;
            out = out.replace(pattern, replacement);
        }
    }

    StageOutcome {
        text: out,
        counters: vec![("artifacts_repaired", fixes)],
    }
}
