//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is published exactly
//! once at startup via `init_config` and never replaced afterwards; the
//! whole lifecycle is load-at-start with no teardown.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config. Call once at startup.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_read() {
        let mut config = SiteConfig::default();
        config.site.title = "Handle Test".into();

        let published = init_config(config);
        assert_eq!(published.site.title, "Handle Test");
        assert_eq!(cfg().site.title, "Handle Test");
    }
}
