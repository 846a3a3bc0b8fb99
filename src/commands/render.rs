//! Render one section to stdout or a file

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::loader::RenderOutcome;
use crate::navigation::route;
use crate::page::HeadlessPage;
use crate::CourseSite;

/// Render a route into a fresh page and return what it shows
pub async fn render(site: &CourseSite, route: &str) -> (RenderOutcome, String) {
    let page = HeadlessPage::with_sections();
    let outcome = site.loader().render(route, &page).await;
    (outcome, page.content())
}

/// Run the render command
///
/// With `fragment`, `target` is read like the address bar (`#labs`, empty
/// for the default section); otherwise it is the section id itself.
pub async fn run(
    site: &CourseSite,
    target: &str,
    fragment: bool,
    output: Option<&Path>,
) -> Result<()> {
    let route = if fragment {
        route::resolve(target, &site.config.default_section)
    } else {
        target.to_string()
    };
    let (outcome, html) = render(site, &route).await;

    match outcome {
        RenderOutcome::Rendered(section) => tracing::debug!("Rendered section {}", section),
        RenderOutcome::NotFound => tracing::warn!("No section named {:?}", route),
        RenderOutcome::Failed(section) => {
            tracing::warn!("Section {} could not be loaded", section)
        }
        RenderOutcome::Stale(section) => tracing::debug!("Section {} went stale", section),
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}
