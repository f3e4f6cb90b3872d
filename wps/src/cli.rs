// src/cli.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::core::matcher::Ruleset;
use crate::core::report::{
    filter_by_category, print_summary, render_markdown_report, render_tabular_report,
};
use crate::core::scanner::scan_directory;
use crate::models::{Category, OutputFormat};
use crate::utils::project_label;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan
    pub directory: PathBuf,

    /// Output format (md or csv)
    #[arg(long, value_enum, default_value = "md")]
    pub format: OutputFormat,

    /// Output file path (defaults to wp_hooks_analysis.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Restrict the report and summary to one category
    #[arg(long, value_enum)]
    pub category: Option<Category>,
}

/// Scans the requested directory, writes the report file and prints the
/// terminal summary.
///
/// # Errors
///
/// Returns an error if the directory cannot be resolved, the scan root is
/// unusable, or the report file cannot be written. Failures on individual
/// scanned files are warnings, not errors.
pub fn run(args: Args) -> Result<()> {
    let directory = args
        .directory
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", args.directory.display()))?;
    let label = project_label(&directory);

    let rules = Ruleset::new()?;
    let results = scan_directory(&directory, &rules)
        .with_context(|| format!("Failed to scan directory: {}", directory.display()))?;
    let results = match args.category {
        Some(category) => filter_by_category(&results, category),
        None => results,
    };

    let output_file = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("wp_hooks_analysis.{}", args.format.extension())));
    let report = match args.format {
        OutputFormat::Md => render_markdown_report(&results, &label)?,
        OutputFormat::Csv => render_tabular_report(&results, &label)?,
    };
    fs::write(&output_file, report)
        .with_context(|| format!("Failed to write report to {}", output_file.display()))?;

    print_summary(&results, &label, &output_file);
    Ok(())
}
