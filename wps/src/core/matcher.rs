// src/core/matcher.rs
use anyhow::Result;
use regex::Regex;

use crate::models::Category;

/// The recognized call idioms: (category, function-kind, human label,
/// pattern). Declaration order is contractual — report sections follow the
/// category order, and matches on one line are emitted in rule order.
const RULE_TABLE: &[(Category, &str, &str, &str)] = &[
    (
        Category::Action,
        "add_action",
        "Action Registration",
        r#"add_action\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "do_action",
        "Action Execution",
        r#"do_action\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "has_action",
        "Action Check",
        r#"has_action\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "remove_action",
        "Action Removal",
        r#"remove_action\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "remove_all_actions",
        "All Actions Removal",
        r#"remove_all_actions\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "did_action",
        "Action Execution Check",
        r#"did_action\(['"][\w-]+['"]"#,
    ),
    (
        Category::Action,
        "do_action_ref_array",
        "Action Execution (Reference)",
        r#"do_action_ref_array\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "add_filter",
        "Filter Registration",
        r#"add_filter\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "apply_filters",
        "Filter Application",
        r#"apply_filters\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "has_filter",
        "Filter Check",
        r#"has_filter\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "remove_filter",
        "Filter Removal",
        r#"remove_filter\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "remove_all_filters",
        "All Filters Removal",
        r#"remove_all_filters\(['"][\w-]+['"]"#,
    ),
    (
        Category::Filter,
        "current_filter",
        "Current Filter Check",
        r"current_filter\(",
    ),
    (
        Category::Filter,
        "apply_filters_ref_array",
        "Filter Application (Reference)",
        r#"apply_filters_ref_array\(['"][\w-]+['"]"#,
    ),
    (
        Category::Shortcode,
        "add_shortcode",
        "Shortcode Registration",
        r#"add_shortcode\(['"][\w-]+['"]"#,
    ),
    (
        Category::Shortcode,
        "do_shortcode",
        "Shortcode Execution",
        r#"do_shortcode\(['"][\w-]+['"]"#,
    ),
    (
        Category::Shortcode,
        "has_shortcode",
        "Shortcode Check",
        r#"has_shortcode\(['"][\w-]+['"]"#,
    ),
    (
        Category::Shortcode,
        "remove_shortcode",
        "Shortcode Removal",
        r#"remove_shortcode\(['"][\w-]+['"]"#,
    ),
    (
        Category::Shortcode,
        "remove_all_shortcodes",
        "All Shortcodes Removal",
        r"remove_all_shortcodes\(",
    ),
    (
        Category::Shortcode,
        "shortcode_atts",
        "Shortcode Attributes",
        r"shortcode_atts\(",
    ),
    (
        Category::Hook,
        "wp_hook",
        "Hook Creation",
        r#"wp_hook\(['"][\w-]+['"]"#,
    ),
];

/// Quoted word-or-hyphen token naming the hook a call refers to.
const QUOTED_NAME: &str = r#"['"][\w-]+['"]"#;

/// One rule from the table with its compiled pattern.
#[derive(Debug)]
struct PatternRule {
    category: Category,
    function: &'static str,
    function_type: &'static str,
    regex: Regex,
}

/// The full rule table, compiled once at start-up and passed by reference
/// into the scanner.
#[derive(Debug)]
pub struct Ruleset {
    rules: Vec<PatternRule>,
    quoted_name: Regex,
}

/// One match of a rule against a single line. `start`/`end` are byte
/// offsets of the matched call text within that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub category: Category,
    pub function: &'static str,
    pub function_type: &'static str,
    pub hook_name: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl Ruleset {
    /// Compiles the static rule table.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern in the table fails to compile.
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(RULE_TABLE.len());
        for &(category, function, function_type, pattern) in RULE_TABLE {
            rules.push(PatternRule {
                category,
                function,
                function_type,
                regex: Regex::new(pattern)?,
            });
        }
        let quoted_name = Regex::new(QUOTED_NAME)?;
        Ok(Self { rules, quoted_name })
    }

    /// Finds every recognized call in one line.
    ///
    /// Matches are returned in rule declaration order, then left to right
    /// within a rule. Calls without a quoted identifier yield
    /// `hook_name: None`.
    #[must_use]
    pub fn find_matches(&self, line: &str) -> Vec<LineMatch> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            for found in rule.regex.find_iter(line) {
                let hook_name = self.quoted_name.find(found.as_str()).map(|name| {
                    name.as_str()
                        .trim_matches(|c| c == '\'' || c == '"')
                        .to_string()
                });
                matches.push(LineMatch {
                    category: rule.category,
                    function: rule.function,
                    function_type: rule.function_type,
                    hook_name,
                    start: found.start(),
                    end: found.end(),
                });
            }
        }
        matches
    }
}

/// Wraps the span `[start, end)` of `line` in backtick markers.
///
/// The span must come from a regex match against this same line, so a call
/// text that repeats on the line marks only the occurrence the match
/// reported.
#[must_use]
pub fn highlight_span(line: &str, start: usize, end: usize) -> String {
    let mut highlighted = String::with_capacity(line.len().saturating_add(2));
    highlighted.push_str(&line[..start]);
    highlighted.push('`');
    highlighted.push_str(&line[start..end]);
    highlighted.push('`');
    highlighted.push_str(&line[end..]);
    highlighted
}
