use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use summary_core::limits::MAX_INPUT_BYTES;
use summary_core::persist::{load_reports, save_reports, SummaryReport};
use summary_core::{Limits, Summarizer};
use tracing_subscriber::{EnvFilter, fmt};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "summary")]
#[command(about = "Extractive TF-IDF summaries of text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a file, or every .txt/.md file under a directory
    Summarize {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// 1 -> 1 sentence, 2 -> 3, 3 -> 5, 4 or more -> 10
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        depth: i64,
        /// Report how long the summary took
        #[arg(long, default_value_t = false)]
        time: bool,
        /// Print reports as JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Also save the report(s) to this JSON file
        #[arg(long)]
        output: Option<String>,
        /// Bytes read from each file; the rest is ignored
        #[arg(long, default_value_t = MAX_INPUT_BYTES)]
        max_input_bytes: usize,
    },
    /// Print a saved summary report
    Show {
        #[arg(long)]
        report: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { input, depth, time, json, output, max_input_bytes } => {
            let limits = Limits { max_input_bytes, ..Limits::default() };
            let summarizer = Summarizer::new().with_limits(limits).with_timing(time);
            let reports = summarize_inputs(&summarizer, Path::new(&input), depth)?;
            print_reports(&reports, json)?;
            if let Some(output) = output {
                save_reports(Path::new(&output), &reports)?;
                tracing::info!(output = %output, reports = reports.len(), "saved summary report");
            }
            Ok(())
        }
        Commands::Show { report } => {
            let reports = load_reports(Path::new(&report))?;
            print_reports(&reports, false)
        }
    }
}

fn summarize_inputs(summarizer: &Summarizer, input: &Path, depth: i64) -> Result<Vec<SummaryReport>> {
    let files = collect_inputs(input)?;
    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        let summary = summarizer.summarize_file(&file, depth)?;
        tracing::debug!(file = %file.display(), sentences = summary.sentence_count, selected = summary.len(), "summarized");
        reports.push(SummaryReport::from_summary(file.display().to_string(), &summary, now_rfc3339()));
    }
    Ok(reports)
}

fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "txt" | "md") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input not found: {}", input.display());
    }
    Ok(files)
}

fn print_reports(reports: &[SummaryReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    let show_source = reports.len() > 1;
    for report in reports {
        print!("{}", render_report(report, show_source));
    }
    Ok(())
}

fn render_report(report: &SummaryReport, show_source: bool) -> String {
    let mut out = String::new();
    if show_source {
        out.push_str(&format!("--- {} ---\n", report.source));
    }
    if report.sentences.is_empty() {
        out.push_str("[Summary] (empty or no sentences)\n");
    } else {
        out.push_str(&format!("=== Extractive Summary (depth={}) ===\n\n", report.depth));
        for sentence in &report.sentences {
            out.push_str(&format!("{sentence}\n\n"));
        }
    }
    if let Some(took) = report.took_s {
        out.push_str(&format!("[Timing] summary generated in {took:.4} seconds\n"));
    }
    out
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into())
}
