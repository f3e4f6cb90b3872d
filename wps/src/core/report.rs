// src/core/report.rs
use anyhow::{Result, anyhow};
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::models::{Category, MatchRecord};

/// CSV column order; must match the `MatchRecord` field order.
const CSV_HEADER: [&str; 8] = [
    "category",
    "function",
    "function_type",
    "hook_name",
    "file_path",
    "line_number",
    "original_line",
    "highlighted_line",
];

/// Returns the records of `results` whose category is `category`,
/// preserving their order. Filtering an already-filtered set by the same
/// category is a no-op.
#[must_use]
pub fn filter_by_category(results: &[MatchRecord], category: Category) -> Vec<MatchRecord> {
    results
        .iter()
        .filter(|record| record.category == category)
        .cloned()
        .collect()
}

/// Groups records by function-kind; iteration order is alphabetical.
fn group_by_function<'a>(
    records: &[&'a MatchRecord],
) -> BTreeMap<&'static str, Vec<&'a MatchRecord>> {
    let mut by_function: BTreeMap<&'static str, Vec<&'a MatchRecord>> = BTreeMap::new();
    for &record in records {
        by_function.entry(record.function).or_default().push(record);
    }
    by_function
}

/// Renders the Markdown report.
///
/// One section per category in declaration order, one subsection per
/// function-kind present, alphabetically; the hook line is omitted for
/// calls without an identifier.
///
/// # Errors
///
/// Returns an error if formatting into the output buffer fails.
pub fn render_markdown_report(results: &[MatchRecord], project_label: &str) -> Result<String> {
    let mut report = String::new();
    writeln!(report, "# {project_label}\n")?;
    writeln!(report, "## WordPress Hooks Analysis\n")?;

    for category in Category::ALL {
        let category_records: Vec<&MatchRecord> = results
            .iter()
            .filter(|record| record.category == category)
            .collect();
        if category_records.is_empty() {
            continue;
        }

        writeln!(report, "\n### {}\n", category.heading())?;

        for function_records in group_by_function(&category_records).values() {
            let Some(first) = function_records.first() else {
                continue;
            };
            writeln!(report, "#### {}\n", first.function_type)?;

            for record in function_records {
                writeln!(
                    report,
                    "- **File:** {}:{}",
                    record.file_path, record.line_number
                )?;
                if let Some(hook_name) = &record.hook_name {
                    writeln!(report, "  - **Hook:** {hook_name}")?;
                }
                writeln!(report, "  - **Line:** {}\n", record.highlighted_line)?;
            }
        }
    }

    Ok(report)
}

/// Renders the CSV report: a leading project-label line, the header row,
/// then one row per record in result order.
///
/// # Errors
///
/// Returns an error if a row fails to serialize or the writer fails to
/// flush.
pub fn render_tabular_report(results: &[MatchRecord], project_label: &str) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record([project_label])?;
    writer.write_record(CSV_HEADER)?;
    for record in results {
        writer.serialize(record)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV writer: {err}"))?;
    Ok(String::from_utf8(buffer)?)
}

/// Prints the terminal summary: total occurrences, then per category a
/// count and a per-function breakdown in alphabetical order. Categories
/// with no records are skipped.
pub fn print_summary(results: &[MatchRecord], project_label: &str, output_file: &Path) {
    println!("\nAnalysis complete for {project_label}.");
    println!("Results saved to: {}", output_file.display());
    println!("\nFound {} total occurrences:", results.len());

    for category in Category::ALL {
        let mut function_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for record in results.iter().filter(|record| record.category == category) {
            *function_counts.entry(record.function).or_insert(0) += 1;
        }
        if function_counts.is_empty() {
            continue;
        }

        let total: usize = function_counts.values().sum();
        println!("\n{} ({} total):", category.heading(), total);
        for (function, count) in &function_counts {
            println!("  - {function}: {count}");
        }
    }
}
