//! Configuration file generation.
//!
//! Creates docpress.toml for new sites.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::config::{
    SiteConfig,
    section::{MarkdownConfig, SiteSectionConfig, ThemeSectionConfig},
};
use crate::log;

/// Sidebar example appended after the generated [theme] section.
const SIDEBAR_TEMPLATE: &str = "\
# Ordered navigation paths, each absolute (starts with '/').
# sidebar = [\"/guide\", \"/reference\"]
";

/// Plugin activation examples.
const PLUGINS_TEMPLATE: &str = "\
# Activate plugins by declaring their tables:
#
# [plugins.last_updated]
#
# [plugins.back_to_top]
#
# [plugins.medium_zoom]
# selector = \".content img\"
#
# [plugins.pwa]
# service_worker = true
# update_popup = true
#
# [plugins.seo]
# description = \"\"
";

/// Head directive example.
const HEAD_TEMPLATE: &str = "\
# Extra head elements, emitted in declaration order:
#
# [[head]]
# tag = \"link\"
# attrs = { rel = \"manifest\", href = \"/manifest.json\" }
";

/// Generate docpress.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docpress configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/docpress-rs/docpress\n\n");

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section (sidebar is hidden from the derive template)
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push_str(SIDEBAR_TEMPLATE);
    out.push('\n');

    // [markdown] section
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');

    // [plugins] and [[head]] examples
    out.push_str(PLUGINS_TEMPLATE);
    out.push('\n');
    out.push_str(HEAD_TEMPLATE);

    out
}

/// Create a new site configuration at the resolved root.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(config.get_root())
        .with_context(|| format!("Failed to create '{}'", config.get_root().display()))?;

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_contains_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site]"));
        assert!(template.contains("[theme]"));
        assert!(template.contains("[markdown]"));
        assert!(template.contains("# [plugins.pwa]"));
        assert!(template.contains("# [[head]]"));
    }

    #[test]
    fn test_template_defaults_parse_back() {
        // The generated template (all examples commented out) must be a
        // valid config
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.site.language, "en");
        assert_eq!(config.theme.repo_label, "GitHub");
    }

    #[test]
    fn test_new_site_writes_config() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.set_root(temp.path());
        config.config_path = temp.path().join("docpress.toml");

        new_site(&config).unwrap();

        let content = fs::read_to_string(&config.config_path).unwrap();
        assert!(content.contains("[site]"));
    }

    #[test]
    fn test_new_site_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.set_root(temp.path());
        config.config_path = temp.path().join("docpress.toml");
        fs::write(&config.config_path, "custom").unwrap();

        assert!(new_site(&config).is_err());
        assert_eq!(fs::read_to_string(&config.config_path).unwrap(), "custom");
    }
}
