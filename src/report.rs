//! Human-readable console output.
//!
//! Kept out of the pipeline entirely: everything here formats results that
//! already exist, so the pipeline itself stays print-free and testable.

use colored::Colorize;

use crate::pipeline::extraction::DiagnosisList;

/// Summary statistics of a normalized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextSummary {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
            lines: if text.is_empty() {
                0
            } else {
                text.split('\n').count()
            },
        }
    }
}

pub fn print_text_summary(summary: &TextSummary) {
    println!("{}", "Normalized text".bold());
    println!("  characters: {}", summary.chars);
    println!("  words:      {}", summary.words);
    println!("  lines:      {}", summary.lines);
}

pub fn print_diagnosis_report(list: &DiagnosisList) {
    println!();
    println!("{}", "Extracted diagnoses".bold());

    if list.diagnostics.is_empty() {
        println!("  {}", "no diagnoses found in the text".yellow());
        return;
    }

    for (i, diagnosis) in list.diagnostics.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).dimmed(),
            diagnosis.term.green().bold()
        );
        println!("     context:  {}", diagnosis.context);
        println!("     temporal: {}", diagnosis.temporal);
    }

    println!();
    println!("  {} diagnoses found", list.diagnostics.len());
}
