//! Horizontal whitespace and line-ending normalization.
//!
//! Collapses space/tab runs to a single space, rewrites every line-ending
//! variant to `\n`, and strips trailing blanks from each line. Newline runs
//! themselves are left alone; bounding those is the next stage's job.

use once_cell::sync::Lazy;
use regex::Regex;

use super::StageOutcome;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static MULTI_SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static LINE_ENDINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());
static TRAILING_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

pub fn normalize(text: &str) -> StageOutcome {
    let multi_runs = MULTI_SPACE_RUNS.find_iter(text).count() as u64;
    let collapsed = SPACE_RUNS.replace_all(text, " ");

    let crlf = collapsed.matches("\r\n").count() as u64;
    let bare_cr = collapsed.matches('\r').count() as u64 - crlf;
    let unix = LINE_ENDINGS.replace_all(&collapsed, "\n");

    let trailing = TRAILING_BLANKS.find_iter(&unix).count() as u64;
    let out = TRAILING_BLANKS.replace_all(&unix, "");

    StageOutcome {
        text: out.into_owned(),
        counters: vec![
            ("space_runs_collapsed", multi_runs),
            ("crlf_normalized", crlf),
            ("cr_normalized", bare_cr),
            ("trailing_blanks_stripped", trailing),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_space_and_tab_runs() {
        let outcome = normalize("a   b\t\tc \t d");
        assert_eq!(outcome.text, "a b c d");
        assert_eq!(outcome.counters[0].1, 3);
    }

    #[test]
    fn single_tab_becomes_space() {
        assert_eq!(normalize("a\tb").text, "a b");
    }

    #[test]
    fn crlf_and_bare_cr_become_newline() {
        let outcome = normalize("one\r\ntwo\rthree\n");
        assert_eq!(outcome.text, "one\ntwo\nthree\n");
        assert_eq!(outcome.counters[1].1, 1);
        assert_eq!(outcome.counters[2].1, 1);
    }

    #[test]
    fn strips_trailing_blanks_per_line() {
        let outcome = normalize("one  \ntwo\t\nthree  ");
        assert_eq!(outcome.text, "one\ntwo\nthree");
        assert_eq!(outcome.counters[3].1, 3);
    }

    #[test]
    fn newline_runs_left_alone() {
        assert_eq!(normalize("a\n\n\nb").text, "a\n\n\nb");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize("").text, "");
    }
}
