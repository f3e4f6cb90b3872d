// tests/integration_tests/report_test.rs
use super::common::setup_plugin_directory;
use anyhow::Result;
use csv::ReaderBuilder;
use wps::{
    Category, Ruleset, filter_by_category, render_markdown_report, render_tabular_report,
    scan_directory,
};

#[test]
fn test_scanned_tree_renders_structured_markdown() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;
    let results = scan_directory(temp_dir.path(), &rules)?;

    let report = render_markdown_report(&results, "fixture-plugin")?;

    assert!(report.starts_with("# fixture-plugin\n"));
    let actions = report.find("### Actions").expect("Actions section");
    let filters = report.find("### Filters").expect("Filters section");
    let shortcodes = report.find("### Shortcodes").expect("Shortcodes section");
    assert!(actions < filters && filters < shortcodes);

    // Shortcode subsections in function-name order: add_shortcode,
    // do_shortcode, shortcode_atts.
    let registration = report
        .find("#### Shortcode Registration")
        .expect("add_shortcode subsection");
    let execution = report
        .find("#### Shortcode Execution")
        .expect("do_shortcode subsection");
    let attributes = report
        .find("#### Shortcode Attributes")
        .expect("shortcode_atts subsection");
    assert!(registration < execution && execution < attributes);

    assert!(report.contains("- **Hook:** gallery"));
    Ok(())
}

#[test]
fn test_scanned_tree_round_trips_through_csv() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;
    let results = scan_directory(temp_dir.path(), &rules)?;

    let rendered = render_tabular_report(&results, "fixture-plugin")?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rendered.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), results.len() + 2, "Label + header + data rows");
    assert_eq!(&rows[0][0], "fixture-plugin");

    for (row, record) in rows.iter().skip(2).zip(&results) {
        assert_eq!(&row[0], record.category.as_str());
        assert_eq!(&row[1], record.function);
        assert_eq!(&row[3], record.hook_name.as_deref().unwrap_or("N/A"));
        assert_eq!(&row[5], record.line_number.to_string().as_str());
        assert_eq!(&row[6], record.original_line.as_str());
        assert_eq!(&row[7], record.highlighted_line.as_str());
    }
    Ok(())
}

#[test]
fn test_category_filter_then_render_keeps_one_section() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;
    let results = scan_directory(temp_dir.path(), &rules)?;

    let filters_only = filter_by_category(&results, Category::Filter);
    assert_eq!(filters_only.len(), 3);

    let report = render_markdown_report(&filters_only, "fixture-plugin")?;
    assert!(report.contains("### Filters"));
    assert!(!report.contains("### Actions"));
    assert!(!report.contains("### Shortcodes"));
    Ok(())
}
