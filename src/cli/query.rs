//! Query command implementation.
//!
//! Prints the resolved configuration as JSON, the shape the build
//! engine consumes it in.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::{debug, log};

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let resolved = serde_json::to_value(config)?;
    debug!("query"; "resolved {} sections", resolved.as_object().map_or(0, Map::len));

    let output = if let Some(ref fields) = args.fields {
        filter_fields(&resolved, fields, args.filter_empty)
    } else {
        format_config(&resolved, args.filter_empty)
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Format the whole config, optionally filtering empty values
fn format_config(resolved: &JsonValue, filter_empty: bool) -> JsonValue {
    let Some(sections) = resolved.as_object() else {
        return resolved.clone();
    };

    let mut obj = Map::new();
    for (key, value) in sections {
        if !filter_empty || !is_empty_value(value) {
            obj.insert(key.clone(), value.clone());
        }
    }
    JsonValue::Object(obj)
}

/// Check if a JSON value is considered "empty" (null, "", [] or {})
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

/// Filter to specific top-level sections
fn filter_fields(resolved: &JsonValue, fields: &[String], filter_empty: bool) -> JsonValue {
    let mut obj = Map::new();

    if let Some(sections) = resolved.as_object() {
        for field in fields {
            if let Some(value) = sections.get(field) {
                if !filter_empty || !is_empty_value(value) {
                    obj.insert(field.clone(), value.clone());
                }
            } else if !filter_empty {
                // Section explicitly requested but doesn't exist - show null when not filtering
                obj.insert(field.clone(), JsonValue::Null);
            }
        }
    }

    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn resolved() -> JsonValue {
        let config = test_parse_config(
            r#"[theme]
sidebar = ["/1_setup", "/2_initialfile"]

[plugins.back_to_top]
"#,
        );
        serde_json::to_value(&config).unwrap()
    }

    #[test]
    fn test_sections_keep_declaration_order() {
        let value = format_config(&resolved(), false);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["site", "theme", "markdown", "plugins", "head"]);
    }

    #[test]
    fn test_filter_empty_drops_head() {
        let value = format_config(&resolved(), true);
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("head"));
        assert!(obj.contains_key("theme"));
    }

    #[test]
    fn test_sidebar_order_in_output() {
        let value = format_config(&resolved(), false);
        let sidebar = &value["theme"]["sidebar"];
        assert_eq!(
            sidebar.as_array().unwrap().len(),
            2,
        );
        assert_eq!(sidebar[0], "/1_setup");
        assert_eq!(sidebar[1], "/2_initialfile");
    }

    #[test]
    fn test_filter_fields_picks_sections() {
        let value = filter_fields(&resolved(), &["theme".to_string()], false);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("theme"));
    }

    #[test]
    fn test_filter_fields_missing_section_is_null() {
        let value = filter_fields(&resolved(), &["nope".to_string()], false);
        assert_eq!(value["nope"], JsonValue::Null);

        let filtered = filter_fields(&resolved(), &["nope".to_string()], true);
        assert!(filtered.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&JsonValue::Null));
        assert!(is_empty_value(&serde_json::json!("")));
        assert!(is_empty_value(&serde_json::json!([])));
        assert!(is_empty_value(&serde_json::json!({})));
        assert!(!is_empty_value(&serde_json::json!("x")));
        assert!(!is_empty_value(&serde_json::json!(false)));
    }
}
