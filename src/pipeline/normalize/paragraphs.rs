//! Newline-run collapsing.
//!
//! With paragraph preservation on, runs of three or more newlines shrink to
//! exactly two (one blank line marks the paragraph boundary). With it off,
//! any run of two or more shrinks to a single line break.

use once_cell::sync::Lazy;
use regex::Regex;

use super::StageOutcome;

static THREE_OR_MORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static TWO_OR_MORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

pub fn collapse(text: &str, preserve_paragraphs: bool) -> StageOutcome {
    let (pattern, replacement) = if preserve_paragraphs {
        (&*THREE_OR_MORE, "\n\n")
    } else {
        (&*TWO_OR_MORE, "\n")
    };

    let runs = pattern.find_iter(text).count() as u64;
    StageOutcome {
        text: pattern.replace_all(text, replacement).into_owned(),
        counters: vec![("newline_runs_collapsed", runs)],
    }
}
