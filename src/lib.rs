//! course-site: a single-page course website renderer
//!
//! Section data lives in Markdown and JSON files. The [`loader`] fetches a
//! section's file and renders it through fixed per-section templates, and the
//! [`navigation`] controller maps link clicks, history changes and chrome
//! toggles onto the page. The CLI pre-renders every fragment into a static
//! site and can serve it locally.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod loader;
pub mod navigation;
pub mod page;
pub mod render;
pub mod section;
pub mod server;
pub mod templates;

pub use section::Section;

use anyhow::Result;
use std::path::{Path, PathBuf};

use loader::{ContentLoader, FsFetcher};
use navigation::FileThemeStore;

/// Site configuration file relative to the site directory
pub const CONFIG_FILE: &str = "_config.yml";

/// Preferences file relative to the site directory
pub const PREFS_FILE: &str = ".course-site/prefs.json";

/// A course site rooted at a directory
#[derive(Clone)]
pub struct CourseSite {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Section data directory
    pub data_dir: PathBuf,
    /// Static assets copied verbatim
    pub assets_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl CourseSite {
    /// Open the site in a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let data_dir = base_dir.join(&config.data_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            data_dir,
            assets_dir,
            public_dir,
        })
    }

    /// A loader reading data files from the site directory
    pub fn loader(&self) -> ContentLoader<FsFetcher> {
        ContentLoader::new(FsFetcher::new(&self.base_dir), &self.config)
    }

    /// The persisted preferences of this site
    pub fn theme_store(&self) -> FileThemeStore {
        FileThemeStore::load(self.base_dir.join(PREFS_FILE))
    }

    /// Whether `path` lies in the generated output, which watchers ignore
    pub fn is_output(&self, path: &Path) -> bool {
        if path.starts_with(&self.public_dir) {
            return true;
        }
        // watchers may report canonical paths
        self.public_dir
            .canonicalize()
            .map(|public| path.starts_with(public))
            .unwrap_or(false)
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RenderOutcome;
    use crate::navigation::{NavEvent, Navigator, Theme, ThemeStore};
    use crate::page::HeadlessPage;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_output() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public/sections")).unwrap();
        let site = CourseSite::new(dir.path()).unwrap();

        assert!(site.is_output(&dir.path().join("public/sections/about.html")));
        let canonical = dir.path().canonicalize().unwrap();
        assert!(site.is_output(&canonical.join("public/index.html")));
        assert!(!site.is_output(&dir.path().join("about.md")));
        assert!(!site.is_output(&dir.path().join("publicity.md")));
    }

    #[tokio::test]
    async fn test_site_flow() {
        let dir = TempDir::new().unwrap();
        let site = CourseSite::new(dir.path()).unwrap();
        site.init().unwrap();

        let site = CourseSite::new(dir.path()).unwrap();
        site.generate().await.unwrap();
        for section in Section::ALL {
            let path = site
                .public_dir
                .join("sections")
                .join(format!("{}.html", section.id()));
            assert!(path.is_file(), "missing {:?}", path);
        }

        let mut nav = Navigator::new(
            site.loader(),
            site.theme_store(),
            HeadlessPage::with_sections(),
            &site.config,
        );
        assert_eq!(
            nav.start("").await,
            Some(RenderOutcome::Rendered(Section::About))
        );

        for section in Section::ALL {
            let outcome = nav
                .dispatch(NavEvent::LinkClicked {
                    href: format!("#{}", section.id()),
                })
                .await;
            assert_eq!(outcome, Some(RenderOutcome::Rendered(section)));

            let pregenerated = fs::read_to_string(
                site.public_dir
                    .join("sections")
                    .join(format!("{}.html", section.id())),
            )
            .unwrap();
            assert_eq!(nav.page().content(), pregenerated);
        }
        assert_eq!(nav.page().snapshot().history.len(), Section::ALL.len());

        nav.dispatch(NavEvent::ToggleTheme).await;
        let stored = site
            .theme_store()
            .get(&site.config.theme_storage_key)
            .unwrap();
        assert_eq!(Theme::from_stored(stored.as_deref()), Theme::Light);

        site.clean().unwrap();
        assert!(!site.public_dir.exists());
    }
}
