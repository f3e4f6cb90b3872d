// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use core::matcher::{LineMatch, Ruleset, highlight_span};
pub use core::report::{
    filter_by_category, print_summary, render_markdown_report, render_tabular_report,
};
pub use core::scanner::scan_directory;
pub use models::{Category, MatchRecord, OutputFormat};
