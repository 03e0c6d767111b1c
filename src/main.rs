use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use limitation_stats::report::console::print_report;
use limitation_stats::{AnalysisConfig, AnalysisReport, load_dataset};

/// Descriptive statistics over coded research-limitation annotations
#[derive(Parser, Debug)]
#[command(name = "limitation-stats")]
#[command(version)]
struct Args {
    /// CSV file, Parquet file, or directory containing them
    #[arg(short, long, env = "LIMITATION_STATS_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving the `tables/` output
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of codes in the co-occurrence matrix
    #[arg(long)]
    top_n: Option<usize>,

    /// Number of codes and co-occurring pairs printed to the console
    #[arg(long)]
    preview: Option<usize>,

    /// Number of codes followed across publication years
    #[arg(long)]
    trend_top_n: Option<usize>,

    /// Number of topic areas compared
    #[arg(long)]
    topics: Option<usize>,

    /// Percentage-point difference that marks a topic pattern as distinctive
    #[arg(long)]
    threshold: Option<f64>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            input: self.input.unwrap_or(defaults.input),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            code_preview: self.preview.unwrap_or(defaults.code_preview),
            cooccurrence_top_n: self.top_n.unwrap_or(defaults.cooccurrence_top_n),
            trend_top_n: self.trend_top_n.unwrap_or(defaults.trend_top_n),
            topic_count: self.topics.unwrap_or(defaults.topic_count),
            distinctiveness_threshold: self.threshold.unwrap_or(defaults.distinctiveness_threshold),
            show_progress: !self.quiet,
            ..defaults
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    let start = Instant::now();

    let dataset = load_dataset(&config.input, &config.columns)
        .with_context(|| format!("Failed to load dataset from {}", config.input.display()))?;

    let report = AnalysisReport::run(&dataset, &config);
    print_report(&report, &config);

    let tables_dir = config.tables_dir();
    let written = report
        .write_tables(&tables_dir)
        .with_context(|| format!("Failed to write tables to {}", tables_dir.display()))?;

    info!(
        "Analysis complete: {} files written to {} in {:?}",
        written.len(),
        tables_dir.display(),
        start.elapsed()
    );
    Ok(())
}
