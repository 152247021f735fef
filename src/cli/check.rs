//! Check command implementation.
//!
//! Validation happens during config load; this reports a summary of
//! what the build engine will see.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute check command
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let file_name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| config.config_path.to_string_lossy());

    log!("check"; "{} is valid", file_name);

    let title = if config.site.title.is_empty() {
        "(untitled)"
    } else {
        config.site.title.as_str()
    };
    log!("check"; "site: {}", title);

    if let Some(domain) = &config.theme.domain {
        log!("check"; "domain: {}", domain);
    }

    log!("check"; "sidebar: {}", plural_count(config.theme.sidebar.len(), "entry"));

    let active = config.plugins.active();
    if active.is_empty() {
        log!("check"; "plugins: none");
    } else {
        log!("check"; "plugins: {}", active.join(", "));
    }

    log!("check"; "head: {}", plural_count(config.head.len(), "directive"));
    debug!("check"; "head fragment:\n{}", crate::head::render_head(config));

    Ok(())
}
