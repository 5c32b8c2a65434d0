use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use cantodetect::detector::{CantoneseDetector, DetectorConfig};
use cantodetect::judgement::JudgeStats;
use cantodetect::reader::{LineReader, ReaderConfig};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputMode {
    /// One label per line
    Judgement,
    /// Label, a tab, then the source line
    Full,
}

#[derive(Parser, Debug)]
#[command(name = "cantodetect")]
#[command(about = "Classify lines of Chinese text as Cantonese, SWC, Neutral, or Mixed")]
#[command(version)]
struct Args {
    /// Input text file, one document per line
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Judgement)]
    mode: OutputMode,

    /// Judge quoted speech separately from the narrating matrix
    #[arg(long)]
    quotes: bool,

    /// Split each line into delimiter-bounded segments before judging
    #[arg(long)]
    split: bool,

    /// Write a JSON run summary with per-label tallies to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    input: String,
    bytes_read: u64,
    duration_ms: u64,
    judgements: &'a JudgeStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).json().init();

    let args = Args::parse();
    info!(?args, "parsed CLI arguments");

    // Missing input is an I/O failure, reported distinctly from any judgement
    if !args.input.exists() {
        anyhow::bail!("input file does not exist: {}", args.input.display());
    }

    let detector = CantoneseDetector::new(DetectorConfig {
        split_segments: args.split,
        separate_quotes: args.quotes,
        ..DetectorConfig::default()
    })?;

    let reader = LineReader::new(ReaderConfig::default());
    let (lines, read_stats) = reader.read_lines(&args.input).await?;

    let mut stats = JudgeStats::default();
    for line in &lines {
        let line = line.trim();
        let judgement = detector.judge(line);
        stats.record(judgement);
        match args.mode {
            OutputMode::Judgement => println!("{judgement}"),
            OutputMode::Full => println!("{judgement}\t{line}"),
        }
    }

    if let Some(path) = &args.stats_out {
        let summary = RunSummary {
            input: read_stats.file_path.clone(),
            bytes_read: read_stats.bytes_read,
            duration_ms: read_stats.duration_ms,
            judgements: &stats,
        };
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        info!("wrote run summary to {}", path.display());
    }

    info!(
        lines = stats.lines_judged,
        bytes = read_stats.bytes_read,
        "judgement complete"
    );

    Ok(())
}
