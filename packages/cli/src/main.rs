#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the address field audit tool.

mod render;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "addr_lint_cli", about = "Address field audit and cleaning tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit raw street names, city names, and postal codes in an extract
    Audit {
        /// Path to the OSM PBF extract
        file: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Clean every field, then audit the cleaned values
    Clean {
        /// Path to the OSM PBF extract
        file: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show element counts, file size, and map bounds for an extract
    Stats {
        /// Path to the OSM PBF extract
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { file, json } => run_audit(&file, json, false),
        Commands::Clean { file, json } => run_audit(&file, json, true),
        Commands::Stats { file } => run_stats(&file),
    }
}

fn run_audit(file: &Path, json: bool, clean: bool) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log::info!(
        "{} address fields in {}",
        if clean { "Cleaning and auditing" } else { "Auditing" },
        file.display()
    );

    let records = addr_lint_source::read_fields(file)?;
    let report = if clean {
        addr_lint_audit::clean_and_audit(records)
    } else {
        addr_lint_audit::audit(records)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }

    log::info!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn run_stats(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let counts = addr_lint_source::element_counts(file)?;
    let size_kb = addr_lint_source::file_size_kb(file)?;
    let bounds = addr_lint_source::map_bounds(file)?;

    render::print_stats(file, &counts, size_kb, bounds.as_ref());

    log::info!("Finished in {:.2?}", start.elapsed());
    Ok(())
}
