//! `[plugins.pwa]` configuration.

use serde::{Deserialize, Serialize};

/// Progressive web app options.
///
/// Both flags default to on: declaring the plugin opts into offline
/// support, and the update popup is how a cached client learns about
/// new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Register a service worker for offline caching.
    pub service_worker: bool,

    /// Show a refresh popup when new content is available.
    pub update_popup: bool,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            service_worker: true,
            update_popup: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_empty_table_enables_both() {
        let config = test_parse_config("[plugins.pwa]");
        let pwa = config.plugins.pwa.as_ref().unwrap();
        assert!(pwa.service_worker);
        assert!(pwa.update_popup);
    }

    #[test]
    fn test_explicit_overrides() {
        let config = test_parse_config("[plugins.pwa]\nservice_worker = false\nupdate_popup = false");
        let pwa = config.plugins.pwa.as_ref().unwrap();
        assert!(!pwa.service_worker);
        assert!(!pwa.update_popup);
    }
}
