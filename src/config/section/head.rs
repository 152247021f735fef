//! `[[head]]` tag-injection directives.
//!
//! Each entry is a (tag, attribute map) pair emitted into the document
//! head in declaration order. The attribute map keeps declaration
//! order too (toml `preserve_order`).
//!
//! # Example
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "manifest", href = "/manifest.json" }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field path used for head diagnostics.
const HEAD_FIELD: FieldPath = FieldPath::new("head");

/// One tag to emit into the document head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadEntry {
    /// Element name (e.g., "link", "meta").
    pub tag: String,

    /// Attribute name → value pairs, in declaration order.
    #[serde(default)]
    pub attrs: toml::Table,
}

impl HeadEntry {
    /// Look up a string attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(|v| v.as_str())
    }

    /// True for the web-manifest `<link rel="manifest">` directive.
    pub fn is_manifest_link(&self) -> bool {
        self.tag == "link" && self.attr("rel") == Some("manifest")
    }

    /// Validate a single head entry.
    ///
    /// # Checks
    /// - tag must be a non-empty ASCII-alphanumeric name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.tag.is_empty() {
            diag.error(HEAD_FIELD, "entry has an empty tag name");
        } else if !self.tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            diag.error(
                HEAD_FIELD,
                format!("'{}' is not a valid tag name", self.tag),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_manifest_entry() {
        let config = test_parse_config(
            r#"[[head]]
tag = "link"
attrs = { rel = "manifest", href = "/manifest.json" }
"#,
        );
        assert_eq!(config.head.len(), 1);
        let entry = &config.head[0];
        assert!(entry.is_manifest_link());
        assert_eq!(entry.attr("href"), Some("/manifest.json"));
        assert_eq!(entry.attr("missing"), None);
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let config = test_parse_config(
            r##"[[head]]
tag = "meta"
attrs = { name = "theme-color", content = "#3eaf7c" }

[[head]]
tag = "link"
attrs = { rel = "manifest", href = "/manifest.json" }
"##,
        );
        let tags: Vec<_> = config.head.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["meta", "link"]);
    }

    #[test]
    fn test_empty_tag_rejected() {
        let entry = HeadEntry {
            tag: String::new(),
            attrs: toml::Table::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_bad_tag_name_rejected() {
        let entry = HeadEntry {
            tag: "li nk".into(),
            attrs: toml::Table::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
