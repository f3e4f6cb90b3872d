// src/core/scanner.rs
use anyhow::{Result, bail};
use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::matcher::{Ruleset, highlight_span};
use crate::models::MatchRecord;

/// File extension identifying WordPress source files.
const SOURCE_EXTENSION: &str = "php";

/// Scans a directory tree for recognized hook, filter and shortcode calls.
///
/// Traversal is depth-first and deterministic: entries are visited in
/// lexicographic file-name order within each directory, and symlinks are
/// followed. Every `.php` file is visited. A file that cannot be read or
/// decoded is reported on stderr and contributes zero records; the scan
/// continues with the remaining files.
///
/// # Arguments
///
/// * `dir` - The root directory to scan
/// * `rules` - The compiled rule table
///
/// # Returns
///
/// * `Ok(Vec<MatchRecord>)` - Every match, in file order, then line order,
///   then rule order within a line
///
/// # Errors
///
/// Returns an error if the root directory does not exist or is not a
/// directory. Failures on individual files or subdirectories are warnings,
/// not errors.
#[inline]
pub fn scan_directory(dir: &Path, rules: &Ruleset) -> Result<Vec<MatchRecord>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    if !absolute_dir.is_dir() {
        bail!("Not a directory: {}", absolute_dir.display());
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext == SOURCE_EXTENSION)
        {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => scan_file_content(path, &content, rules, &mut results),
            Err(err) => {
                eprintln!("Warning: failed to read {}: {err}", path.display());
            }
        }
    }

    Ok(results)
}

/// Applies the rule table to every line of one file, appending a record per
/// match. Lines are numbered from 1 and trimmed before matching.
fn scan_file_content(
    path: &Path,
    content: &str,
    rules: &Ruleset,
    results: &mut Vec<MatchRecord>,
) {
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        for found in rules.find_matches(line) {
            results.push(MatchRecord {
                category: found.category,
                function: found.function,
                function_type: found.function_type,
                hook_name: found.hook_name,
                file_path: path.display().to_string(),
                line_number: index.saturating_add(1),
                original_line: line.to_string(),
                highlighted_line: highlight_span(line, found.start, found.end),
            });
        }
    }
}
