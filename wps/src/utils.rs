// src/utils.rs
use std::path::Path;

/// Human-readable label for a scan root: its file name, falling back to
/// the crate name when the root has no representable name (e.g. `/`).
#[must_use]
pub fn project_label(directory: &Path) -> String {
    directory
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_string()
}
