//! `[plugins.seo]` configuration.

use serde::{Deserialize, Serialize};

/// SEO metadata options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Site description emitted as a `<meta name="description">` tag.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_description() {
        let config = test_parse_config("[plugins.seo]\ndescription = \"ハンズオン資料\"");
        let seo = config.plugins.seo.as_ref().unwrap();
        assert_eq!(seo.description.as_deref(), Some("ハンズオン資料"));
    }

    #[test]
    fn test_empty_table() {
        let config = test_parse_config("[plugins.seo]");
        assert!(config.plugins.seo.as_ref().unwrap().description.is_none());
    }
}
