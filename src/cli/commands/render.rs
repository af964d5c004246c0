//! Render command implementation
//!
//! Loads one sounding, draws its chart into a recording surface and writes
//! the frame as an SVG document.

use super::shared::{CommandSummary, format_depth, load_configuration, setup_logging};
use crate::app::services::chart_renderer::{ChartRenderer, HoverEvent, RenderList};
use crate::app::services::sounding_loader::SoundingLoader;
use crate::cli::args::RenderArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Render command runner
pub async fn run_render(args: RenderArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.global)?;
    debug!("Render arguments: {:?}", args);
    args.validate()?;

    let config = apply_size(load_configuration(&args.global)?, &args);
    config.validate()?;

    let loader = SoundingLoader::new(&config.classifier);
    let record = loader.load_file(&args.path).await?;

    let surface = RenderList::new(config.chart.width, config.chart.height);
    let mut renderer = ChartRenderer::new(surface, config.chart.clone())?;
    renderer.set_record(&record);

    if let (Some(from), Some(to)) = (args.from, args.to) {
        renderer.set_view_range(from, to);
    }
    if let Some(depth) = args.hover_depth {
        renderer.hover_at_depth(depth);
    }
    let hover = renderer.hover_event();

    let svg = renderer.surface().to_svg();
    tokio::fs::write(&args.output, svg)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", args.output.display()), e))?;

    let (view_min, view_max) = renderer.viewport().range();
    info!(
        "Rendered '{}' ({} to {}) to {}",
        record.name,
        format_depth(view_min),
        format_depth(view_max),
        args.output.display()
    );

    if !args.global.quiet {
        println!(
            "{} {} → {}",
            "Rendered".bright_green().bold(),
            record.name,
            args.output.display()
        );
        if let Some(event) = hover {
            print_hover(&event);
        }
    }

    Ok(CommandSummary {
        files_loaded: 1,
        files_failed: 0,
        duration: start_time.elapsed(),
    })
}

fn apply_size(config: Config, args: &RenderArgs) -> Config {
    let width = args.width.unwrap_or(config.chart.width);
    let height = args.height.unwrap_or(config.chart.height);
    config.with_chart_size(width, height)
}

fn print_hover(event: &HoverEvent) {
    println!(
        "  {} {} (sample at {})",
        "Depth:".bright_cyan(),
        format_depth(event.depth),
        format_depth(event.sample_depth)
    );
    for (key, value) in &event.values {
        let value = value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v));
        println!("  {} {}", format!("{}:", key).bright_cyan(), value);
    }
    let zone = event
        .zone
        .map_or_else(|| "unclassified".to_string(), |z| z.to_string());
    println!("  {} {}", "Zone:".bright_cyan(), zone);
}
