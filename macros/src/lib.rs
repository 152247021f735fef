//! Proc macros for docpress.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata configuration.
//! pub struct SiteSectionConfig {
//!     /// Site title displayed in browser tab.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS but hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc = "...")]` - Same-line comment in templates
//! - `#[config(sub)]` - Nested Config section (template recurses)
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `MarkdownConfig` → `markdown`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
