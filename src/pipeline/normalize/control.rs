//! Control-character stripping.
//!
//! Removes C0 controls except `\t` `\n` `\r`, the DEL character, and the C1
//! range (U+0080–U+009F). Printable characters, including extended Unicode,
//! pass through untouched.

use super::StageOutcome;

fn is_stripped(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'..='\u{9F}'
    )
}

pub fn strip(text: &str) -> StageOutcome {
    let mut removed = 0u64;
    let kept: String = text
        .chars()
        .filter(|&c| {
            if is_stripped(c) {
                removed += 1;
                false
            } else {
                true
            }
        })
        .collect();

    StageOutcome {
        text: kept,
        counters: vec![("control_chars_removed", removed)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_and_c0() {
        let outcome = strip("Dose: 500mg\x00\x01\x02 daily");
        assert_eq!(outcome.text, "Dose: 500mg daily");
        assert_eq!(outcome.counters[0].1, 3);
    }

    #[test]
    fn keeps_tab_newline_carriage_return() {
        let outcome = strip("a\tb\nc\rd");
        assert_eq!(outcome.text, "a\tb\nc\rd");
        assert_eq!(outcome.counters[0].1, 0);
    }

    #[test]
    fn strips_del_and_c1_range() {
        let outcome = strip("x\u{7F}y\u{85}z\u{9F}");
        assert_eq!(outcome.text, "xyz");
        assert_eq!(outcome.counters[0].1, 3);
    }

    #[test]
    fn keeps_extended_unicode() {
        let outcome = strip("37.5°C µg/L «résultat»");
        assert_eq!(outcome.text, "37.5°C µg/L «résultat»");
    }

    #[test]
    fn only_controls_becomes_empty() {
        assert_eq!(strip("\x00\x01\x02").text, "");
    }
}
