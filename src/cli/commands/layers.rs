//! Layers command implementation
//!
//! Prints the merged soil layers of one sounding as a table, JSON or CSV.

use super::shared::{CommandSummary, format_depth, load_configuration, setup_logging, to_json};
use crate::app::models::{DistributionEntry, Layer};
use crate::app::services::sounding_loader::SoundingLoader;
use crate::cli::args::{LayersArgs, OutputFormat};
use crate::Result;
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct LayerReport<'a> {
    name: &'a str,
    min_layer_thickness: f64,
    layers: &'a [Layer],
    distribution: &'a [DistributionEntry],
}

/// Layers command runner
pub async fn run_layers(args: LayersArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.global)?;
    debug!("Layers arguments: {:?}", args);
    args.validate()?;

    let mut config = load_configuration(&args.global)?;
    if let Some(thickness) = args.min_thickness {
        config = config.with_min_layer_thickness(thickness);
    }
    config.validate()?;

    let loader = SoundingLoader::new(&config.classifier);
    let record = loader.load_file(&args.path).await?;
    info!(
        "{}: {} layers from {} rows",
        record.name,
        record.layers.len(),
        record.data.len()
    );

    match args.format {
        OutputFormat::Human => print_table(&record.name, &record.layers),
        OutputFormat::Json => {
            let report = LayerReport {
                name: &record.name,
                min_layer_thickness: config.classifier.min_layer_thickness,
                layers: &record.layers,
                distribution: &record.distribution,
            };
            println!("{}", to_json(&report)?);
        }
        OutputFormat::Csv => print!("{}", layers_csv(&record.layers)),
    }

    Ok(CommandSummary {
        files_loaded: 1,
        files_failed: 0,
        duration: start_time.elapsed(),
    })
}

fn print_table(name: &str, layers: &[Layer]) {
    println!("{}", name.bright_green().bold());
    if layers.is_empty() {
        println!("  no classified layers");
        return;
    }

    println!(
        "  {:>10} {:>10} {:>10}  {}",
        "top".bright_cyan(),
        "bottom".bright_cyan(),
        "thickness".bright_cyan(),
        "zone".bright_cyan()
    );
    for layer in layers {
        println!(
            "  {:>10} {:>10} {:>10}  {}",
            format_depth(layer.start_depth),
            format_depth(layer.end_depth),
            format_depth(layer.thickness()),
            layer.zone
        );
    }
}

/// Layer table as CSV with a header line
pub fn layers_csv(layers: &[Layer]) -> String {
    let mut csv = String::from("start_depth,end_depth,thickness,zone_id,zone_name\n");
    for layer in layers {
        csv.push_str(&format!(
            "{:.3},{:.3},{:.3},{},\"{}\"\n",
            layer.start_depth,
            layer.end_depth,
            layer.thickness(),
            layer.zone.id,
            layer.zone.name.replace('"', "\"\"")
        ));
    }
    csv
}
