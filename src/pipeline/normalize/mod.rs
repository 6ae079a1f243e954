//! Deterministic clinical-text normalization.
//!
//! An ordered pipeline of pure text transforms that cleans raw clinical text
//! for downstream consumption. Each stage is a function of the text (and the
//! run options) returning a new string; nothing is mutated in place and no
//! stage can fail. The stage order is a contract: later stages assume the
//! earlier ones already ran.
//!
//! Pipeline flow:
//! 1. `unicode::canonicalize` — NFC so equivalent characters compare equal
//! 2. `control::strip` — drop C0 (except `\t` `\n` `\r`), DEL and C1
//! 3. `mojibake::repair` — fix known double-decoding artifacts
//! 4. `typography::normalize` — smart quotes, dashes, ellipsis to ASCII
//! 5. `whitespace::normalize` — space runs, line endings, trailing blanks
//! 6. `paragraphs::collapse` — bound consecutive newline runs
//! 7. `sentences::resegment` — re-derive line breaks from punctuation
//! 8. `lines::filter` — drop empty and too-short lines
//! 9. final trim of the whole string

pub mod control;
pub mod lines;
pub mod mojibake;
pub mod paragraphs;
pub mod sentences;
pub mod typography;
pub mod unicode;
pub mod whitespace;

/// Options fixed for the lifetime of one normalization run.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Keep double newlines as paragraph boundaries instead of flattening
    /// everything to single line breaks.
    pub preserve_paragraphs: bool,
    /// Minimum trimmed length for a line to survive filtering.
    pub min_line_length: usize,
    /// Log per-stage diagnostics when no observer is injected.
    pub verbose: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            preserve_paragraphs: true,
            min_line_length: 3,
            verbose: false,
        }
    }
}

/// Output of a single stage: the transformed text plus stage-specific counters.
pub struct StageOutcome {
    pub text: String,
    pub counters: Vec<(&'static str, u64)>,
}

/// Diagnostic record for one completed stage.
///
/// `chars_removed` is negative when a stage grows the text (the ellipsis
/// glyph expands to three periods).
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: &'static str,
    pub chars_removed: i64,
    pub lines_removed: i64,
    pub counters: Vec<(&'static str, u64)>,
}

/// Receives one report per stage, after the stage's output string exists.
/// Observation cannot alter the transformation result.
pub trait StageObserver {
    fn stage_complete(&mut self, report: &StageReport);
}

/// Discards all reports.
pub struct NullObserver;

impl StageObserver for NullObserver {
    fn stage_complete(&mut self, _report: &StageReport) {}
}

/// Logs each report through tracing.
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn stage_complete(&mut self, report: &StageReport) {
        tracing::info!(
            stage = report.stage,
            chars_removed = report.chars_removed,
            lines_removed = report.lines_removed,
            counters = ?report.counters,
            "Normalization stage complete"
        );
    }
}

/// Accumulates reports for later inspection.
#[derive(Default)]
pub struct RecordingObserver {
    pub reports: Vec<StageReport>,
}

impl StageObserver for RecordingObserver {
    fn stage_complete(&mut self, report: &StageReport) {
        self.reports.push(report.clone());
    }
}

/// The normalization pipeline. Stateless per call: the same input and options
/// always produce the same output.
pub struct TextNormalizer {
    options: NormalizeOptions,
}

impl TextNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Run the full stage sequence. Total over all Unicode strings: the empty
    /// string comes back empty, nothing panics. With `verbose` set, stage
    /// reports go to the log; otherwise they are discarded.
    pub fn normalize(&self, raw: &str) -> String {
        if self.options.verbose {
            self.normalize_observed(raw, &mut LogObserver)
        } else {
            self.normalize_observed(raw, &mut NullObserver)
        }
    }

    /// Run the full stage sequence with an injected observer receiving every
    /// stage report.
    pub fn normalize_observed(&self, raw: &str, observer: &mut dyn StageObserver) -> String {
        let opts = &self.options;
        let mut text = raw.to_string();

        text = run_stage("unicode_nfc", text, observer, |t| unicode::canonicalize(t));
        text = run_stage("strip_control", text, observer, |t| control::strip(t));
        text = run_stage("repair_mojibake", text, observer, |t| mojibake::repair(t));
        text = run_stage("normalize_typography", text, observer, |t| {
            typography::normalize(t)
        });
        text = run_stage("normalize_whitespace", text, observer, |t| {
            whitespace::normalize(t)
        });
        text = run_stage("collapse_paragraphs", text, observer, |t| {
            paragraphs::collapse(t, opts.preserve_paragraphs)
        });
        text = run_stage("resegment_sentences", text, observer, |t| {
            sentences::resegment(t)
        });
        text = run_stage("filter_lines", text, observer, |t| {
            lines::filter(t, opts.min_line_length)
        });

        text.trim().to_string()
    }
}

fn run_stage<F>(
    stage: &'static str,
    input: String,
    observer: &mut dyn StageObserver,
    f: F,
) -> String
where
    F: FnOnce(&str) -> StageOutcome,
{
    let outcome = f(&input);
    let report = StageReport {
        stage,
        chars_removed: input.chars().count() as i64 - outcome.text.chars().count() as i64,
        lines_removed: line_count(&input) as i64 - line_count(&outcome.text) as i64,
        counters: outcome.counters,
    };
    observer.stage_complete(&report);
    outcome.text
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        TextNormalizer::new(NormalizeOptions::default()).normalize(text)
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn whitespace_only_input_returns_empty() {
        assert_eq!(normalize("  \t \r\n \n\n  "), "");
    }

    #[test]
    fn idempotent_on_clinical_note() {
        let input = "Patient admitted with chest pain.\r\n\r\n\r\nECG showed \
                     ST elevation. Troponin was 2.3 ng/mL.\nDr. Okafor started \
                     heparin;  aspirin was given.\n";
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn byte_stable_across_runs() {
        let input = "Day 1, admission.\nDay 2, improving…\nDischarged.";
        assert_eq!(normalize(input), normalize(input));
    }

    #[test]
    fn no_trailing_whitespace_on_any_line() {
        let input = "First sentence.   \nSecond one here.\t\t\nThird sentence.  ";
        let output = normalize(input);
        for line in output.split('\n') {
            assert_eq!(line, line.trim_end(), "trailing blank on {line:?}");
        }
    }

    #[test]
    fn no_long_space_runs_in_output() {
        let input = "Vitals   were    stable.  BP\t\t120/80 was recorded.";
        let output = normalize(input);
        assert!(!output.contains("   "));
        assert!(!output.contains('\t'));
    }

    #[test]
    fn paragraph_invariant_preserving() {
        let input = "One sentence here.\n\n\n\n\nAnother sentence here.";
        let output = normalize(input);
        assert!(!output.contains("\n\n\n"));
    }

    #[test]
    fn paragraph_invariant_flattening() {
        let normalizer = TextNormalizer::new(NormalizeOptions {
            preserve_paragraphs: false,
            ..NormalizeOptions::default()
        });
        let output = normalizer.normalize("One sentence here.\n\n\n\nAnother sentence here.");
        assert!(!output.contains("\n\n"));
    }

    #[test]
    fn line_length_invariant_holds() {
        let input = "Chief complaint: fever. X. Patient improving. A B. Discharged home.";
        let output = normalize(input);
        for line in output.split('\n') {
            assert!(
                line.trim().chars().count() >= 3,
                "line below minimum: {line:?}"
            );
        }
    }

    #[test]
    fn decimals_and_titles_survive_resegmentation() {
        let input =
            "Patient presented with fever.\nTemperature was 38.5 C.\nDr. Smith examined the patient.";
        let output = normalize(input);
        assert!(output.contains("38.5"), "decimal split: {output:?}");
        assert!(!output.contains("Dr.\n"), "break after title: {output:?}");
        assert_eq!(
            output,
            "Patient presented with fever.\nTemperature was 38.5 C.\nDr. Smith examined the patient."
        );
    }

    #[test]
    fn mojibake_repair_is_counted() {
        let normalizer = TextNormalizer::new(NormalizeOptions::default());
        let mut observer = RecordingObserver::default();
        let output = normalizer.normalize_observed("The patientâ€™s chart was reviewed.", &mut observer);

        assert!(output.contains("patient's"));
        let repair = observer
            .reports
            .iter()
            .find(|r| r.stage == "repair_mojibake")
            .unwrap();
        let fixed = repair
            .counters
            .iter()
            .find(|(name, _)| *name == "artifacts_repaired")
            .unwrap();
        assert_eq!(fixed.1, 1);
    }

    #[test]
    fn observer_receives_every_stage() {
        let normalizer = TextNormalizer::new(NormalizeOptions::default());
        let mut observer = RecordingObserver::default();
        normalizer.normalize_observed("Some text here.", &mut observer);

        let stages: Vec<&str> = observer.reports.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![
                "unicode_nfc",
                "strip_control",
                "repair_mojibake",
                "normalize_typography",
                "normalize_whitespace",
                "collapse_paragraphs",
                "resegment_sentences",
                "filter_lines",
            ]
        );
    }

    #[test]
    fn observation_does_not_change_output() {
        let normalizer = TextNormalizer::new(NormalizeOptions::default());
        let input = "Admitted for observation.\nStable overnight.";
        let plain = normalizer.normalize(input);
        let observed = normalizer.normalize_observed(input, &mut RecordingObserver::default());
        assert_eq!(plain, observed);
    }

    #[test]
    fn end_to_end_messy_note() {
        let input = "â€œChest painâ€ since morning.\r\n\r\n\r\n\r\nHistory: \
                     hypertension â€\u{201D} treated.\r\nOn exam:   alert,  oriented.\r\n";
        let output = normalize(input);

        assert!(!output.contains('\r'));
        assert!(output.contains("hypertension - treated"));
        assert!(!output.contains('\u{201C}'));
        assert!(!output.contains('\u{201D}'));
        assert!(output.contains('"'));
        assert!(!output.contains("\n\n\n"));
        assert_eq!(output, normalize(&output));
    }
}
