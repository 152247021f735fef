//! `[plugins]` section configuration.
//!
//! A closed set of typed plugin option records. A plugin is active iff
//! its table is present in the config; keys are unique by construction
//! and activation is declarative, so order among entries carries no
//! meaning.
//!
//! # Example
//!
//! ```toml
//! [plugins.last_updated]
//!
//! [plugins.back_to_top]
//!
//! [plugins.medium_zoom]
//!
//! [plugins.pwa]
//! service_worker = true
//! update_popup = true
//!
//! [plugins.seo]
//! description = "Hands-on material"
//! ```

mod last_updated;
mod pwa;
mod seo;

pub use last_updated::{LastUpdatedConfig, Transformer, format_last_updated};
pub use pwa::PwaConfig;
pub use seo::SeoConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::section::HeadEntry;

/// Plugin activation and options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "plugins")]
pub struct PluginsConfig {
    /// "Last updated" annotation with a timestamp transformer.
    #[config(hidden)]
    pub last_updated: Option<LastUpdatedConfig>,

    /// Back-to-top button. No options.
    #[config(hidden)]
    pub back_to_top: Option<BackToTopConfig>,

    /// Image zoom on click.
    #[config(hidden)]
    pub medium_zoom: Option<MediumZoomConfig>,

    /// Service worker + install support.
    #[config(hidden)]
    pub pwa: Option<PwaConfig>,

    /// SEO metadata injection.
    #[config(hidden)]
    pub seo: Option<SeoConfig>,
}

impl PluginsConfig {
    /// Names of the active plugins, in declaration order of the set.
    pub fn active(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.last_updated.is_some() {
            names.push("last-updated");
        }
        if self.back_to_top.is_some() {
            names.push("back-to-top");
        }
        if self.medium_zoom.is_some() {
            names.push("medium-zoom");
        }
        if self.pwa.is_some() {
            names.push("pwa");
        }
        if self.seo.is_some() {
            names.push("seo");
        }
        names
    }

    /// Check whether a plugin is active by name.
    pub fn is_active(&self, name: &str) -> bool {
        self.active().contains(&name)
    }

    /// Validate plugin configuration against the head directives.
    ///
    /// # Checks
    /// - an active `pwa` plugin requires a `link rel="manifest"` head
    ///   entry, otherwise the service worker has nothing to install
    pub fn validate(&self, head: &[HeadEntry], diag: &mut ConfigDiagnostics) {
        if let Some(pwa) = &self.pwa
            && pwa.service_worker
            && !head.iter().any(HeadEntry::is_manifest_link)
        {
            diag.error_with_hint(
                Self::FIELDS.pwa,
                "service worker is enabled but no web manifest is declared",
                "add a [[head]] entry: tag = \"link\", attrs = { rel = \"manifest\", href = \"/manifest.json\" }",
            );
        }
    }
}

/// Back-to-top button. Presence activates it; there are no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {}

/// Image zoom options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumZoomConfig {
    /// CSS selector limiting which images zoom. Engine default applies
    /// when unset.
    pub selector: Option<String>,
}
