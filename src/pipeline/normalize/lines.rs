//! Short and empty line filtering.
//!
//! Removes orphaned headers, page numbers, and stray punctuation lines: any
//! line whose trimmed length falls below the configured minimum is dropped,
//! as is any line that is empty after trimming.

use super::StageOutcome;

pub fn filter(text: &str, min_line_length: usize) -> StageOutcome {
    let mut dropped = 0u64;
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.chars().count() < min_line_length {
                dropped += 1;
                false
            } else {
                true
            }
        })
        .collect();

    StageOutcome {
        text: kept.join("\n"),
        counters: vec![("lines_dropped", dropped)],
    }
}
