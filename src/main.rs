use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clinsift::config;
use clinsift::pipeline::extraction::{
    write_result_file, DiagnosisExtractor, GeminiClient, DEFAULT_MODEL,
};
use clinsift::pipeline::import::load_document;
use clinsift::pipeline::normalize::{NormalizeOptions, TextNormalizer};
use clinsift::report;

/// Normalize a clinical note and extract structured diagnosis records.
#[derive(Parser, Debug)]
#[command(name = config::APP_NAME, version, about)]
struct Cli {
    /// Path to the clinical note to process.
    input: PathBuf,

    /// Where to write the JSON extraction result.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Minimum trimmed length for a line to survive filtering.
    #[arg(long, default_value_t = 3)]
    min_line_length: usize,

    /// Flatten paragraph boundaries to single line breaks.
    #[arg(long)]
    flatten_paragraphs: bool,

    /// Log per-stage normalization diagnostics.
    #[arg(long)]
    verbose: bool,

    /// Stop after normalization and print the cleaned text.
    #[arg(long)]
    normalize_only: bool,

    /// Generative model used for extraction.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();

    let raw = load_document(&cli.input)
        .with_context(|| format!("Cannot read {}", cli.input.display()))?;

    let normalizer = TextNormalizer::new(NormalizeOptions {
        preserve_paragraphs: !cli.flatten_paragraphs,
        min_line_length: cli.min_line_length,
        verbose: cli.verbose,
    });
    let cleaned = normalizer.normalize(&raw);
    report::print_text_summary(&report::TextSummary::of(&cleaned));

    if cli.normalize_only {
        println!();
        println!("{cleaned}");
        return Ok(());
    }

    let client = GeminiClient::from_env().context("Extraction needs an API key")?;
    let extractor = DiagnosisExtractor::new(Box::new(client), &cli.model);
    let result = extractor
        .extract(&cleaned)
        .context("Diagnosis extraction failed")?;

    let output = cli.output.unwrap_or_else(config::default_output_path);
    write_result_file(&output, &result)
        .with_context(|| format!("Cannot write {}", output.display()))?;

    report::print_diagnosis_report(&result);
    println!("Results saved to {}", output.display());
    Ok(())
}
