//! `[plugins.last_updated]` configuration.
//!
//! Renders the page's last-modified instant as a display date. The
//! build engine hands us an epoch-millisecond timestamp and the site
//! language; the transformer turns that into the annotation text.

use serde::{Deserialize, Serialize};

use crate::utils::date::DateTimeUtc;

/// Timestamp transformer signature: (epoch milliseconds, language tag).
pub type TransformerFn = fn(i64, &str) -> String;

/// A named pure transformer function carried inside the config value.
///
/// Not serialized; the default is `format_last_updated`.
#[derive(Clone, Copy)]
pub struct Transformer(pub TransformerFn);

impl Default for Transformer {
    fn default() -> Self {
        Self(format_last_updated)
    }
}

impl std::fmt::Debug for Transformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Transformer(fn)")
    }
}

impl PartialEq for Transformer {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

/// "Last updated" annotation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastUpdatedConfig {
    /// Formats the raw timestamp for display.
    #[serde(skip)]
    pub transformer: Transformer,
}

impl LastUpdatedConfig {
    /// Apply the configured transformer.
    pub fn format(&self, timestamp_ms: i64, lang: &str) -> String {
        (self.transformer.0)(timestamp_ms, lang)
    }
}

/// Default transformer: zero-padded `YYYY/MM/DD`, computed in UTC.
///
/// The language tag is accepted for signature compatibility with the
/// engine's callback contract; the output is locale-invariant.
/// Instants outside the displayable year range fall back to the epoch
/// date, the conversion never fails.
pub fn format_last_updated(timestamp_ms: i64, _lang: &str) -> String {
    DateTimeUtc::from_epoch_millis(timestamp_ms)
        .unwrap_or(DateTimeUtc::from_ymd(1970, 1, 1))
        .format_slash()
}
