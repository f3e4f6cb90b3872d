// tests/integration_tests/scanning_test.rs
use super::common::setup_plugin_directory;
use anyhow::Result;
use wps::{Category, Ruleset, scan_directory};

#[test]
fn test_full_scan_finds_every_call() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;

    let results = scan_directory(temp_dir.path(), &rules)?;

    assert_eq!(results.len(), 8, "Should find every call in every PHP file");

    let actions = results
        .iter()
        .filter(|record| record.category == Category::Action)
        .count();
    let filters = results
        .iter()
        .filter(|record| record.category == Category::Filter)
        .count();
    let shortcodes = results
        .iter()
        .filter(|record| record.category == Category::Shortcode)
        .count();
    assert_eq!(actions, 2, "add_action and do_action");
    assert_eq!(filters, 3, "apply_filters, has_filter and current_filter");
    assert_eq!(shortcodes, 3, "add_shortcode, do_shortcode and shortcode_atts");
    Ok(())
}

#[test]
fn test_scan_order_is_file_then_line() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;

    let results = scan_directory(temp_dir.path(), &rules)?;

    // Lexicographic traversal: admin/ before includes/ before plugin.php.
    assert!(results[0].file_path.ends_with("settings.php"));
    assert!(results[2].file_path.ends_with("shortcodes.php"));
    assert!(results[5].file_path.ends_with("plugin.php"));

    let settings: Vec<&str> = results
        .iter()
        .take(2)
        .map(|record| record.function)
        .collect();
    assert_eq!(
        settings,
        vec!["has_filter", "current_filter"],
        "Records within a file should follow line order"
    );
    Ok(())
}

#[test]
fn test_bare_calls_carry_no_identifier() -> Result<()> {
    let temp_dir = setup_plugin_directory()?;
    let rules = Ruleset::new()?;

    let results = scan_directory(temp_dir.path(), &rules)?;

    let current_filter = results
        .iter()
        .find(|record| record.function == "current_filter")
        .expect("current_filter record");
    assert_eq!(current_filter.hook_name, None);
    assert_eq!(current_filter.highlighted_line, "`current_filter(`);");

    let atts = results
        .iter()
        .find(|record| record.function == "shortcode_atts")
        .expect("shortcode_atts record");
    assert_eq!(atts.hook_name, None);
    Ok(())
}
