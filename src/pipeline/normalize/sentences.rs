//! Sentence re-segmentation.
//!
//! Discards the newline structure the source formatting left behind (line
//! wrapping, PDF extraction artifacts) and re-derives line breaks purely from
//! sentence-ending punctuation. Lossy and irreversible: the output layout is
//! driven by punctuation, not by how the source document was wrapped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::StageOutcome;

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?:;])\s+").unwrap());
static ABBREVIATION_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Mr|Mrs|Dr|Ms|Prof|vs|etc|i\.e|e\.g)\.\n").unwrap());
static DECIMAL_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.\n(\d)").unwrap());
static BLANKS_BEFORE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r" +\n").unwrap());
static RECORD_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n([A-Z][a-z]+ \d+,)").unwrap());

pub fn resegment(text: &str) -> StageOutcome {
    let source_newlines = text.matches('\n').count() as u64;

    // Flatten to a single line: every newline run, then every remaining
    // whitespace run, becomes one space.
    let flat = NEWLINE_RUNS.replace_all(text, " ");
    let flat = WHITESPACE_RUNS.replace_all(&flat, " ");
    let flat = flat.trim();

    // Break after sentence-ending punctuation followed by whitespace.
    let broken = SENTENCE_END.replace_all(flat, "$1\n");

    // Suppress breaks the punctuation rule got wrong: abbreviation titles
    // keep their sentence, split decimals rejoin.
    let broken = ABBREVIATION_BREAK.replace_all(&broken, "$1. ");
    let broken = DECIMAL_BREAK.replace_all(&broken, "$1.$2");
    let broken = BLANKS_BEFORE_BREAK.replace_all(&broken, "\n");

    let restored = restore_record_paragraphs(&broken);
    let breaks = restored.matches('\n').count() as u64;

    StageOutcome {
        text: restored,
        counters: vec![
            ("source_newlines_discarded", source_newlines),
            ("sentence_breaks_inserted", breaks),
        ],
    }
}

/// Corpus-specific policy rule: restore a coarse paragraph boundary before a
/// line that opens a recognizable record marker ("Day 3," style: capitalized
/// word, digits, comma). Replaceable, nothing downstream depends on it.
fn restore_record_paragraphs(text: &str) -> String {
    RECORD_MARKER.replace_all(text, "\n\n$1").into_owned()
}
