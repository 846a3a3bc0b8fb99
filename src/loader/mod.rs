//! Content loader - fetches a section's data file and renders it into the page

mod fetch;

pub use fetch::{Fetcher, FsFetcher};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::page::ContentRegion;
use crate::render::fragments::{ERROR, LOADING, NOT_FOUND};
use crate::render::SectionRenderer;
use crate::section::Section;

/// What a call to [`ContentLoader::render`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The section fragment was written
    Rendered(Section),
    /// The id named no section; the not-found fragment was written
    NotFound,
    /// Loading failed; the error fragment was written
    Failed(Section),
    /// A newer render started while this one was in flight; nothing was written
    Stale(Section),
}

/// Loads sections and writes their fragments into a content region
pub struct ContentLoader<F> {
    fetcher: F,
    renderer: SectionRenderer,
    data_path: String,
    discard_stale: bool,
    generation: AtomicU64,
}

impl<F: Fetcher> ContentLoader<F> {
    /// Create a loader that resolves data files under `config.data_dir`
    pub fn new(fetcher: F, config: &SiteConfig) -> Self {
        Self {
            fetcher,
            renderer: SectionRenderer::new(config),
            data_path: config.data_dir.trim_end_matches('/').to_string(),
            discard_stale: config.loader.discard_stale,
            generation: AtomicU64::new(0),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Site-relative path of a section's data file
    pub fn resource_path(&self, section: Section) -> String {
        let file = section.source().file;
        if self.data_path.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.data_path, file)
        }
    }

    /// Fetch and render one section
    pub async fn load(&self, section: Section) -> Result<String, LoadError> {
        let body = self.fetcher.fetch(&self.resource_path(section)).await?;
        self.renderer.render(section, &body)
    }

    /// The final fragment for a route, with failures folded into the error fragment
    pub async fn fragment(&self, id: &str) -> String {
        let Ok(section) = id.parse::<Section>() else {
            return NOT_FOUND.to_string();
        };

        match self.load(section).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Error loading section {}: {}", section, e);
                ERROR.to_string()
            }
        }
    }

    /// Render a route into `region`. Never fails; failures become fragments.
    pub async fn render<R>(&self, id: &str, region: &R) -> RenderOutcome
    where
        R: ContentRegion + ?Sized,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Ok(section) = id.parse::<Section>() else {
            tracing::debug!("No section named {:?}", id);
            region.replace(NOT_FOUND);
            return RenderOutcome::NotFound;
        };

        region.replace(LOADING);

        let (html, outcome) = match self.load(section).await {
            Ok(html) => (html, RenderOutcome::Rendered(section)),
            Err(e) => {
                tracing::error!("Error loading section {}: {}", section, e);
                (ERROR.to_string(), RenderOutcome::Failed(section))
            }
        };

        if self.discard_stale && self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Discarding stale response for section {}", section);
            return RenderOutcome::Stale(section);
        }

        region.replace(&html);
        outcome
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockFetcher;
    use super::*;
    use crate::page::HeadlessPage;
    use std::time::Duration;

    const LABS: &str = r#"{"labs": [{"number": 1, "topic": "Setup"}]}"#;
    const STAFF: &str = r#"{"instructors": [{"name": "Dr. Ada"}], "tas": []}"#;

    fn loader(fetcher: MockFetcher) -> ContentLoader<MockFetcher> {
        ContentLoader::new(fetcher, &SiteConfig::default())
    }

    #[tokio::test]
    async fn test_render_valid_section() {
        let loader = loader(MockFetcher::new().with_file("data/labs.json", LABS));
        let page = HeadlessPage::default();

        let outcome = loader.render("labs", &page).await;

        assert_eq!(outcome, RenderOutcome::Rendered(Section::Labs));
        let snapshot = page.snapshot();
        assert_eq!(snapshot.replacements.len(), 2);
        assert_eq!(snapshot.replacements[0], LOADING);
        assert!(snapshot.content.contains("<h2>Labs</h2>"));
        assert!(snapshot.content.contains("<td>Setup</td>"));
        assert_eq!(loader.fetcher().requested(), vec!["data/labs.json"]);
    }

    #[tokio::test]
    async fn test_unknown_section_skips_fetch() {
        let loader = loader(MockFetcher::new());
        let page = HeadlessPage::default();

        let outcome = loader.render("grades", &page).await;

        assert_eq!(outcome, RenderOutcome::NotFound);
        assert_eq!(loader.fetcher().calls(), 0);
        assert_eq!(page.snapshot().replacements, vec![NOT_FOUND.to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_error() {
        let loader = loader(MockFetcher::new());
        let page = HeadlessPage::default();

        let outcome = loader.render("staff", &page).await;

        assert_eq!(outcome, RenderOutcome::Failed(Section::Staff));
        assert_eq!(page.content(), ERROR);
    }

    #[tokio::test]
    async fn test_malformed_json_shows_error() {
        let loader = loader(MockFetcher::new().with_file("data/labs.json", "<html>"));
        let page = HeadlessPage::default();

        assert_eq!(
            loader.render("labs", &page).await,
            RenderOutcome::Failed(Section::Labs)
        );
        assert_eq!(page.content(), ERROR);
    }

    #[tokio::test]
    async fn test_every_section_fetches_its_own_file() {
        let mut fetcher = MockFetcher::new();
        for section in Section::ALL {
            let path = format!("data/{}", section.source().file);
            fetcher = fetcher.with_file(&path, "{}");
        }
        let loader = loader(fetcher);
        let page = HeadlessPage::default();

        for section in Section::ALL {
            loader.render(section.id(), &page).await;
        }

        assert_eq!(loader.fetcher().calls(), Section::ALL.len());
        assert!(loader
            .fetcher()
            .requested()
            .contains(&"data/policy.md".to_string()));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let fetcher = MockFetcher::new()
            .with_file("data/labs.json", LABS)
            .with_file("data/staff.json", STAFF)
            .with_delay("data/labs.json", Duration::from_millis(50));
        let loader = loader(fetcher);
        let page = HeadlessPage::default();

        let (slow, fast) = tokio::join!(loader.render("labs", &page), loader.render("staff", &page));

        assert_eq!(slow, RenderOutcome::Stale(Section::Labs));
        assert_eq!(fast, RenderOutcome::Rendered(Section::Staff));
        assert!(page.content().contains("Course Staff"));
    }

    #[tokio::test]
    async fn test_stale_guard_can_be_disabled() {
        let fetcher = MockFetcher::new()
            .with_file("data/labs.json", LABS)
            .with_file("data/staff.json", STAFF)
            .with_delay("data/labs.json", Duration::from_millis(50));
        let mut config = SiteConfig::default();
        config.loader.discard_stale = false;
        let loader = ContentLoader::new(fetcher, &config);
        let page = HeadlessPage::default();

        let (slow, _) = tokio::join!(loader.render("labs", &page), loader.render("staff", &page));

        // last writer wins
        assert_eq!(slow, RenderOutcome::Rendered(Section::Labs));
        assert!(page.content().contains("<h2>Labs</h2>"));
    }

    #[tokio::test]
    async fn test_custom_data_dir() {
        let mut config = SiteConfig::default();
        config.data_dir = "content/".to_string();
        let loader = ContentLoader::new(
            MockFetcher::new().with_file("content/about.md", "Hi"),
            &config,
        );

        assert_eq!(loader.resource_path(Section::About), "content/about.md");
        assert!(loader.fragment("about").await.contains("<p>Hi</p>"));
        assert_eq!(loader.fragment("nope").await, NOT_FOUND);
    }
}
