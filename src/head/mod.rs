//! Document head fragment rendering.
//!
//! Renders the site-wide `<head>` content the build engine splices into
//! every page shell: the `<title>`, the SEO description meta, then the
//! configured `[[head]]` directives in declaration order.

use std::fmt::Write;

use crate::config::{HeadEntry, SiteConfig};
use crate::utils::html;

/// Render the site-wide head fragment, one element per line.
pub fn render_head(config: &SiteConfig) -> String {
    let mut out = String::new();

    // Title
    if !config.site.title.is_empty() {
        let _ = writeln!(out, "<title>{}</title>", html::escape(&config.site.title));
    }

    // Description meta (SEO plugin)
    if let Some(seo) = &config.plugins.seo
        && let Some(description) = &seo.description
    {
        let _ = writeln!(
            out,
            "<meta name=\"description\" content=\"{}\">",
            html::escape_attr(description)
        );
    }

    // Configured directives, in declaration order
    for entry in &config.head {
        out.push_str(&render_entry(entry));
        out.push('\n');
    }

    out
}

/// Render a single head directive.
///
/// Attributes keep declaration order; non-string values render in their
/// TOML display form. Void elements get no closing tag.
pub fn render_entry(entry: &HeadEntry) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&entry.tag);

    for (name, value) in &entry.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        match value.as_str() {
            Some(s) => out.push_str(&html::escape_attr(s)),
            None => out.push_str(&html::escape_attr(&value.to_string())),
        }
        out.push('"');
    }
    out.push('>');

    if !html::is_void_element(&entry.tag) {
        let _ = write!(out, "</{}>", entry.tag);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_render_manifest_link() {
        let config = test_parse_config(
            r#"[[head]]
tag = "link"
attrs = { rel = "manifest", href = "/manifest.json" }
"#,
        );
        let html = render_head(&config);
        assert!(html.contains("<link rel=\"manifest\" href=\"/manifest.json\">"));
        // Void element: no closing tag
        assert!(!html.contains("</link>"));
    }

    #[test]
    fn test_render_title_and_description_first() {
        let config = test_parse_config(
            r#"[plugins.seo]
description = "Hands-on material"

[[head]]
tag = "link"
attrs = { rel = "manifest", href = "/manifest.json" }
"#,
        );
        let html = render_head(&config);
        let title_pos = html.find("<title>Test</title>").unwrap();
        let desc_pos = html
            .find("<meta name=\"description\" content=\"Hands-on material\">")
            .unwrap();
        let link_pos = html.find("<link").unwrap();
        assert!(title_pos < desc_pos);
        assert!(desc_pos < link_pos);
    }

    #[test]
    fn test_render_entries_in_declaration_order() {
        let config = test_parse_config(
            r##"[[head]]
tag = "meta"
attrs = { name = "theme-color", content = "#3eaf7c" }

[[head]]
tag = "link"
attrs = { rel = "manifest", href = "/manifest.json" }
"##,
        );
        let html = render_head(&config);
        assert!(html.find("<meta name=\"theme-color\"").unwrap() < html.find("<link").unwrap());
    }

    #[test]
    fn test_render_escapes_attr_values() {
        let config = test_parse_config(
            r#"[[head]]
tag = "meta"
attrs = { name = "description", content = "a \"quoted\" <value>" }
"#,
        );
        let html = render_head(&config);
        assert!(html.contains("content=\"a &quot;quoted&quot; &lt;value&gt;\""));
    }

    #[test]
    fn test_render_non_void_element_closes() {
        let config = test_parse_config(
            r#"[[head]]
tag = "script"
attrs = { src = "/register-sw.js" }
"#,
        );
        let html = render_head(&config);
        assert!(html.contains("<script src=\"/register-sw.js\"></script>"));
    }

    #[test]
    fn test_empty_config_renders_nothing_extra() {
        let mut config = test_parse_config("");
        config.site.title = String::new();
        assert_eq!(render_head(&config), "");
    }
}
