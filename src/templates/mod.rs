//! Page shell templates using the Tera template engine
//!
//! The shell (sidebar, overlay, theme toggle, content container, stylesheet
//! and routing script) is embedded in the binary.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::render::fragments::{ERROR, LOADING, NOT_FOUND};
use crate::section::Section;

const CSS: &str = include_str!("shell/style.css");
const SCRIPT: &str = include_str!("shell/router.js");

/// Template renderer with the embedded page shell
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all shell templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Fragments and the stylesheet are already HTML; escaping is opted
        // into per value with the `escape` filter.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("shell/layout.html")),
            (
                "partials/sidebar.html",
                include_str!("shell/partials/sidebar.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the single page that hosts every section
    pub fn render_shell(&self, data: &ShellData) -> Result<String> {
        let context = Context::from_serialize(data)?;
        self.render("layout.html", &context)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ShellData {
    pub site: SiteData,
    pub nav: Vec<NavItem>,
    pub fragments: FixedFragments,
    /// JSON read by the routing script
    pub client_config: String,
    pub css: &'static str,
    pub script: &'static str,
    pub version: &'static str,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedFragments {
    pub loading: &'static str,
    pub not_found: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    sections: Vec<&'static str>,
    default_route: &'a str,
    storage_key: &'a str,
    discard_stale: bool,
}

impl ShellData {
    pub fn new(config: &SiteConfig, generated_at: String) -> Result<Self> {
        let client = ClientConfig {
            sections: Section::ALL.iter().map(|s| s.id()).collect(),
            default_route: &config.default_section,
            storage_key: &config.theme_storage_key,
            discard_stale: config.loader.discard_stale,
        };
        // keep the JSON from closing its <script> element
        let client_config = serde_json::to_string(&client)?.replace("</", "<\\/");

        Ok(Self {
            site: SiteData {
                title: config.title.clone(),
                subtitle: config.subtitle.clone(),
                description: config.description.clone(),
                author: config.author.clone(),
            },
            nav: Section::ALL
                .iter()
                .map(|s| NavItem {
                    id: s.id(),
                    label: s.label(),
                })
                .collect(),
            fragments: FixedFragments {
                loading: LOADING,
                not_found: NOT_FOUND,
                error: ERROR,
            },
            client_config,
            css: CSS,
            script: SCRIPT,
            version: env!("CARGO_PKG_VERSION"),
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(config: &SiteConfig) -> String {
        let data = ShellData::new(config, "2026-01-01 00:00".to_string()).unwrap();
        TemplateRenderer::new().unwrap().render_shell(&data).unwrap()
    }

    #[test]
    fn test_shell_has_chrome() {
        let html = shell(&SiteConfig::default());
        assert!(html.contains(r#"id="main-content""#));
        assert!(html.contains(r#"id="navbar""#));
        assert!(html.contains(r#"id="nav-overlay""#));
        assert!(html.contains(r#"class="theme-icon""#));
        assert!(html.contains("<template id=\"fragment-not-found\">"));
    }

    #[test]
    fn test_shell_links_every_section() {
        let html = shell(&SiteConfig::default());
        for section in Section::ALL {
            let link = format!(r##"<a href="#{}" class="nav-link">{}</a>"##, section.id(), section.label());
            assert!(html.contains(&link), "missing {}", link);
        }
    }

    #[test]
    fn test_shell_escapes_title() {
        let config = SiteConfig {
            title: "CS <101>".to_string(),
            ..SiteConfig::default()
        };
        let html = shell(&config);
        assert!(html.contains("<title>CS &lt;101&gt;</title>"));
    }

    #[test]
    fn test_script_decodes_clicked_links() {
        // clicks and popstate share one decoding path
        assert!(SCRIPT.contains("var route = hrefRoute(link);"));
        assert!(SCRIPT.contains("return decode(link.getAttribute('href')"));
        assert!(SCRIPT.contains("return decode(hash.replace"));
    }

    #[test]
    fn test_client_config() {
        let data = ShellData::new(&SiteConfig::default(), String::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&data.client_config).unwrap();
        assert_eq!(value["defaultRoute"], "about");
        assert_eq!(value["storageKey"], "theme");
        assert_eq!(value["sections"].as_array().unwrap().len(), 9);
    }
}
