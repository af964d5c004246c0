//! Inspect command implementation
//!
//! Loads every given sounding and prints its metadata, column layout, parse
//! statistics and soil distribution. Broken files are reported and skipped.

use super::shared::{CommandSummary, load_configuration, report_failures, setup_logging, to_json};
use crate::app::models::{ColumnDescriptor, DistributionEntry, FormatRecord, Header, ParseStats};
use crate::app::services::sounding_loader::{LoadFailure, SoundingLoader};
use crate::cli::args::{InspectArgs, ReportFormat};
use crate::{Result, SourceFormat};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Summary of one loaded sounding
#[derive(Debug, Serialize)]
pub struct SoundingSummary<'a> {
    pub name: &'a str,
    pub format: SourceFormat,
    pub header: &'a Header,
    pub columns: &'a [ColumnDescriptor],
    pub rows: usize,
    pub layers: usize,
    pub stats: &'a ParseStats,
    pub distribution: &'a [DistributionEntry],
}

impl<'a> SoundingSummary<'a> {
    pub fn new(record: &'a FormatRecord) -> Self {
        Self {
            name: &record.name,
            format: record.format,
            header: &record.header,
            columns: &record.columns,
            rows: record.data.len(),
            layers: record.layers.len(),
            stats: &record.stats,
            distribution: &record.distribution,
        }
    }
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    soundings: Vec<SoundingSummary<'a>>,
    failures: &'a [LoadFailure],
}

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.global)?;
    info!("Inspecting {} inputs", args.paths.len());
    debug!("Inspect arguments: {:?}", args);

    args.global.validate()?;
    let config = load_configuration(&args.global)?;
    config.validate()?;

    let loader = SoundingLoader::new(&config.classifier);
    let show_progress = args.global.show_progress() && args.format == ReportFormat::Human;
    let outcome = loader.load_batch(&args.paths, show_progress).await;

    match args.format {
        ReportFormat::Human => {
            for record in &outcome.records {
                print_sounding(record);
            }
            report_failures(&outcome.failures);
            if !args.global.quiet {
                println!(
                    "\n{} {} loaded, {} failed",
                    "Summary:".bright_green().bold(),
                    outcome.records.len().to_string().bright_white().bold(),
                    if outcome.failures.is_empty() {
                        "0".bright_white()
                    } else {
                        outcome.failures.len().to_string().bright_red().bold()
                    }
                );
            }
        }
        ReportFormat::Json => {
            let report = InspectReport {
                soundings: outcome.records.iter().map(SoundingSummary::new).collect(),
                failures: &outcome.failures,
            };
            println!("{}", to_json(&report)?);
        }
    }

    Ok(CommandSummary {
        files_loaded: outcome.records.len(),
        files_failed: outcome.failures.len(),
        duration: start_time.elapsed(),
    })
}

fn print_sounding(record: &FormatRecord) {
    println!(
        "\n{} {}",
        record.name.bright_green().bold(),
        format!("({})", record.format).bright_black()
    );

    for (label, value) in record.header.fields() {
        println!("  {} {}", format!("{}:", label).bright_cyan(), value);
    }

    let columns: Vec<String> = record
        .columns
        .iter()
        .map(|c| {
            let marker = if c.computed { "*" } else { "" };
            format!("{}{} [{}]", c.key, marker, c.unit)
        })
        .collect();
    println!("  {} {}", "Columns:".bright_cyan(), columns.join(", "));

    let stats = &record.stats;
    println!(
        "  {} {} of {} ({:.1}%), {} skipped, {} values empty",
        "Rows:".bright_cyan(),
        stats.rows_parsed.to_string().bright_white().bold(),
        stats.total_records,
        stats.success_rate(),
        stats.records_skipped,
        stats.values_nulled
    );

    if record.distribution.is_empty() {
        println!("  {} none", "Soil distribution:".bright_cyan());
        return;
    }
    println!(
        "  {} {} layers",
        "Soil distribution:".bright_cyan(),
        record.layers.len()
    );
    for entry in &record.distribution {
        println!(
            "    {:<32} {:>8.2} m {:>6.1}%",
            entry.zone.to_string(),
            entry.thickness,
            entry.percentage
        );
    }
}
