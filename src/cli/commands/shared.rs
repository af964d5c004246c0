//! Shared components for CLI commands
//!
//! This module contains the command summary, logging setup, configuration
//! loading and failure reporting used by every subcommand.

use crate::app::services::sounding_loader::LoadFailure;
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one command run
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of soundings loaded successfully
    pub files_loaded: usize,
    /// Number of files that failed to load
    pub files_failed: usize,
    /// Total run time
    pub duration: std::time::Duration,
}

impl CommandSummary {
    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cpt_processor={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_err() {
        debug!("Logging already initialized");
    }
    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configuration file if one was given, defaults otherwise
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    match &args.config_file {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::load(path)
        }
        None => {
            debug!("No configuration file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Pretty-printed JSON for a report
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))
}

/// Print `file: message` lines for failed files on stderr
pub fn report_failures(failures: &[LoadFailure]) {
    for failure in failures {
        eprintln!(
            "{} {}",
            format!("{}:", failure.file).bright_red().bold(),
            failure.message
        );
    }
}

/// Human-readable metres
pub fn format_depth(depth: f64) -> String {
    format!("{:.2} m", depth)
}
