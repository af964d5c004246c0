//! Command implementations for the CPT processor CLI
//!
//! Each subcommand lives in its own module:
//! - `inspect`: metadata, columns and soil distribution for many files
//! - `layers`: merged layer table for one sounding
//! - `render`: SVG chart for one sounding

pub mod inspect;
pub mod layers;
pub mod render;
pub mod shared;

pub use shared::CommandSummary;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the subcommand handler
pub async fn run(command: Commands) -> Result<CommandSummary> {
    match command {
        Commands::Inspect(args) => inspect::run_inspect(args).await,
        Commands::Layers(args) => layers::run_layers(args).await,
        Commands::Render(args) => render::run_render(args).await,
    }
}
