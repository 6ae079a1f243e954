//! Canonical Unicode normalization (NFC).
//!
//! Clinical exports mix precomposed and decomposed accented characters
//! depending on which system produced them. NFC gives every equivalent
//! sequence one representation so later literal matching works. No
//! characters are dropped here, only recomposed.

use unicode_normalization::UnicodeNormalization;

use super::StageOutcome;

pub fn canonicalize(text: &str) -> StageOutcome {
    let normalized: String = text.nfc().collect();

    let changed = text
        .chars()
        .zip(normalized.chars())
        .filter(|(a, b)| a != b)
        .count() as u64;

    StageOutcome {
        text: normalized,
        counters: vec![("code_points_changed", changed)],
    }
}
