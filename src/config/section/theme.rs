//! `[theme]` section configuration.
//!
//! Theme-facing settings: canonical domain, repository link, and the
//! ordered sidebar navigation.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! domain = "https://react-ts-handson.ozaki25.vercel.app"
//! repo = "ozaki25/react-ts-handson"
//! repo_label = "GitHub"
//! sidebar = ["/1_setup", "/2_initialfile", "/3_hello"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme configuration consumed by the rendering engine.
///
/// `sidebar` order is the navigation order; it is preserved exactly as
/// declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Canonical site URL (http or https).
    #[config(inline_doc)]
    pub domain: Option<String>,

    /// Repository identifier ("owner/name") or full URL.
    #[config(inline_doc)]
    pub repo: Option<String>,

    /// Display label for the repository link.
    #[config(default = "GitHub", inline_doc)]
    pub repo_label: String,

    /// Ordered navigation paths, each absolute (starts with '/').
    #[config(hidden)]
    pub sidebar: Vec<String>,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            domain: None,
            repo: None,
            repo_label: "GitHub".into(),
            sidebar: Vec::new(),
        }
    }
}

impl ThemeSectionConfig {
    /// Validate theme configuration.
    ///
    /// # Checks
    /// - `domain` must be a valid http(s) URL with a host
    /// - every `sidebar` entry must start with '/'
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(domain) = &self.domain {
            match url::Url::parse(domain) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.domain,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.domain,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.domain,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        for entry in &self.sidebar {
            if !entry.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.sidebar,
                    format!("entry '{}' is not an absolute path", entry),
                    "sidebar entries must start with '/'",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.domain.is_none());
        assert!(config.theme.repo.is_none());
        assert_eq!(config.theme.repo_label, "GitHub");
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_sidebar_preserves_order() {
        let config = test_parse_config(
            r#"[theme]
sidebar = [
    "/1_setup",
    "/2_initialfile",
    "/3_hello",
    "/4_counter",
    "/5_todolist",
    "/6_routing",
    "/7_communication",
]"#,
        );
        assert_eq!(
            config.theme.sidebar,
            vec![
                "/1_setup",
                "/2_initialfile",
                "/3_hello",
                "/4_counter",
                "/5_todolist",
                "/6_routing",
                "/7_communication",
            ]
        );
    }

    #[test]
    fn test_valid_domain() {
        let theme = ThemeSectionConfig {
            domain: Some("https://react-ts-handson.ozaki25.vercel.app".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_domain_scheme() {
        let theme = ThemeSectionConfig {
            domain: Some("ftp://example.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_unparsable_domain() {
        let theme = ThemeSectionConfig {
            domain: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_relative_sidebar_entry_rejected() {
        let theme = ThemeSectionConfig {
            sidebar: vec!["/ok".into(), "missing_slash".into()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("missing_slash"));
    }
}
