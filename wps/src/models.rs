// src/models.rs
use clap::ValueEnum;
use serde::{Serialize, Serializer};
use std::fmt;

/// Top-level grouping for recognized WordPress call idioms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Action,
    Filter,
    Shortcode,
    Hook,
}

impl Category {
    /// Declaration order; report sections and the summary follow it.
    pub const ALL: [Self; 4] = [Self::Action, Self::Filter, Self::Shortcode, Self::Hook];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Filter => "filter",
            Self::Shortcode => "shortcode",
            Self::Hook => "hook",
        }
    }

    /// Section heading used by the Markdown report and the summary.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Action => "Actions",
            Self::Filter => "Filters",
            Self::Shortcode => "Shortcodes",
            Self::Hook => "Hooks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Md,
    Csv,
}

impl OutputFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Csv => "csv",
        }
    }
}

/// One recognized call occurrence in the scanned tree.
///
/// Field order matches the CSV column order. `hook_name` is `None` for
/// calls that take no quoted identifier; the CSV boundary renders that as
/// `N/A`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub category: Category,
    pub function: &'static str,
    pub function_type: &'static str,
    #[serde(serialize_with = "na_if_none")]
    pub hook_name: Option<String>,
    pub file_path: String,
    pub line_number: usize,
    pub original_line: String,
    pub highlighted_line: String,
}

fn na_if_none<S>(hook_name: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(hook_name.as_deref().unwrap_or("N/A"))
}
