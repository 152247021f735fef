//! `[site]` section configuration.
//!
//! Basic site information: the display title and language, plus a
//! free-form `extra` table passed through to the build engine.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "React TS Handson"
//! language = "en"
//!
//! [site.extra]
//! analytics = "UA-000000-1"
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata for the document shell and the build engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title, shown in the browser tab and sidebar header.
    #[config(inline_doc)]
    pub title: String,

    /// Language code (e.g., "en", "ja").
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// Custom fields passed through to the build engine untouched.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            language: "en".into(),
            extra: FxHashMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.site.language, "en");
        assert!(config.site.extra.is_empty());
    }

    #[test]
    fn test_extra_passthrough() {
        let config = test_parse_config("[site.extra]\nanalytics = \"UA-1\"");
        assert_eq!(
            config.site.extra.get("analytics").and_then(|v| v.as_str()),
            Some("UA-1")
        );
    }
}
