//! `[markdown]` section configuration.
//!
//! Rendering options forwarded to the markdown renderer.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! line_numbers = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Markdown rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Show line numbers in fenced code blocks.
    #[config(inline_doc)]
    pub line_numbers: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_default_off() {
        let config = test_parse_config("");
        assert!(!config.markdown.line_numbers);
    }

    #[test]
    fn test_enable() {
        let config = test_parse_config("[markdown]\nline_numbers = true");
        assert!(config.markdown.line_numbers);
    }
}
