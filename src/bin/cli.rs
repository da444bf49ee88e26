//! Caseboard CLI
//!
//! Runs the dashboard pipeline in-process, without the API server:
//! - Render a chart artifact to JSON
//! - Preview the cleaned table
//! - Check the dataset's date column
//! - Generate a default config file

use anyhow::Context;
use caseboard::chart::{render, ChartKind, Metric};
use caseboard::config::{generate_default_config, Config};
use caseboard::dataset::{normalize, CaseTable, DatasetLoader, NormalizeReport};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "COVID-19 case dashboard pipeline")]
#[command(
    long_about = "Caseboard loads a daily case CSV, cleans its date column,\nand renders chart artifacts for a selected metric."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the case CSV (default: from config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a chart artifact as JSON
    Render {
        /// Metric: label or snake_case (e.g. "Daily New Cases")
        #[arg(short, long)]
        metric: Metric,
        /// Chart type: label or snake_case (e.g. line, heatmap)
        #[arg(short, long)]
        chart: ChartKind,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the first rows of the cleaned table with column types
    Preview {
        /// Number of rows to show
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// Clean the dataset and report date parse failures
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            metric,
            chart,
            output,
        } => {
            let (table, report) = load_clean(cli.data.as_deref())?;
            print_parse_warning(&report);

            let artifact = render(&table, metric, chart)?;
            let json = serde_json::to_string_pretty(&artifact)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &json)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Chart written to {:?}", path);
                }
                None => {
                    println!("{}", json);
                }
            }
        }

        Commands::Preview { rows } => {
            let (table, report) = load_clean(cli.data.as_deref())?;
            print_parse_warning(&report);
            print_preview(&table, rows);
        }

        Commands::Check => {
            let (table, report) = load_clean(cli.data.as_deref())?;

            println!("Rows read:    {}", report.rows_total);
            println!("Rows kept:    {}", table.len());
            println!("Rows dropped: {}", report.rows_dropped);

            if !report.failure_samples.is_empty() {
                println!();
                println!("Unparseable date samples:");
                for sample in &report.failure_samples {
                    println!("  {:?}", sample);
                }
            }

            if table.is_empty() {
                eprintln!();
                eprintln!("No usable rows: every date failed to parse");
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Resolve the dataset path and run Loader -> Normalizer
fn load_clean(data: Option<&std::path::Path>) -> anyhow::Result<(CaseTable, NormalizeReport)> {
    let path = match data {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(Config::load_default().dataset.path),
    };

    let loader = DatasetLoader::new();
    let raw = loader
        .load(&path)
        .with_context(|| format!("failed to load dataset {:?}", path))?;

    let (table, report) = normalize(&raw)?;
    Ok((table, report))
}

/// Echo the normalizer's warning the way the dashboard banner would
fn print_parse_warning(report: &NormalizeReport) {
    if report.has_failures() {
        eprintln!(
            "warning: {} row(s) had unparseable dates and were dropped",
            report.rows_dropped
        );
    }
}

/// Print the cleaned table the way the preview panel shows it
fn print_preview(table: &CaseTable, rows: usize) {
    let kinds = table.column_kinds();

    // Header with inferred kinds
    for (name, kind) in &kinds {
        print!("{:<24}", format!("{} ({})", name, kind));
    }
    println!();
    println!("{}", "-".repeat(24 * kinds.len()));

    for row in table.rows().iter().take(rows) {
        print!("{:<24}", row.date.format("%Y-%m-%d").to_string());
        for cell in &row.cells {
            print!("{:<24}", cell);
        }
        println!();
    }

    println!();
    println!("{} of {} rows shown", rows.min(table.len()), table.len());
}
