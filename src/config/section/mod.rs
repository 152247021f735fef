//! Configuration section definitions.
//!
//! | Section      | Purpose                                       |
//! |--------------|-----------------------------------------------|
//! | `[site]`     | Site metadata (title, language, extra)        |
//! | `[theme]`    | Theme settings (domain, repo, sidebar)        |
//! | `[markdown]` | Markdown rendering options                    |
//! | `[plugins]`  | Plugin activation and options                 |
//! | `[[head]]`   | Document head tag-injection directives        |

mod head;
mod markdown;
pub mod plugins;
mod site;
mod theme;

pub use head::HeadEntry;
pub use markdown::MarkdownConfig;
pub use plugins::{
    BackToTopConfig, LastUpdatedConfig, MediumZoomConfig, PluginsConfig, PwaConfig, SeoConfig,
    Transformer, format_last_updated,
};
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
