use anyhow::Context;
use clap::Parser;
use cpt_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.get_command() else {
        show_help_and_commands();
        process::exit(0);
    };

    match try_main(command) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Run the command on a fresh runtime; returns the process exit code
fn try_main(command: cpt_processor::cli::args::Commands) -> anyhow::Result<i32> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    let summary = runtime.block_on(commands::run(command))?;
    // Failed files have already been reported by the command
    Ok(if summary.is_success() { 0 } else { 1 })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CPT Processor - Cone Penetration Test Sounding Toolkit");
    println!("======================================================");
    println!();
    println!("Read GEF and BRO-XML CPT soundings, classify soil behaviour types");
    println!("with the Robertson chart and render depth profiles as SVG charts.");
    println!();
    println!("USAGE:");
    println!("    cpt-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Show metadata, columns and soil distribution of soundings");
    println!("    layers      Print the merged soil layer table of one sounding");
    println!("    render      Render the depth chart of one sounding to SVG");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect every sounding below a directory:");
    println!("    cpt-processor inspect ./soundings");
    println!();
    println!("    # Layer table as CSV with a coarser minimum thickness:");
    println!("    cpt-processor layers CPT-001.gef --format csv --min-thickness 0.5");
    println!();
    println!("    # Render the top ten metres with a crosshair at 4.2 m:");
    println!("    cpt-processor render CPT-001.xml -o cpt-001.svg --from 0 --to 10 \\");
    println!("                         --hover-depth 4.2");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cpt-processor <COMMAND> --help");
}
