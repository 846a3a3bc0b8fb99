//! Navigation controller
//!
//! Turns link clicks, history changes and chrome toggles into page updates
//! and drives the content loader on every route change.

pub mod route;
mod state;
mod theme;

pub use state::{Effect, NavEvent, NavState};
pub use theme::{FileThemeStore, MemoryStore, Theme, ThemeStore};

use crate::config::SiteConfig;
use crate::loader::{ContentLoader, Fetcher, RenderOutcome};
use crate::page::PageChrome;

/// Owns the navigation state and the boundary adapters it acts on
pub struct Navigator<F, S, P> {
    loader: ContentLoader<F>,
    store: S,
    page: P,
    storage_key: String,
    state: NavState,
}

impl<F, S, P> Navigator<F, S, P>
where
    F: Fetcher,
    S: ThemeStore,
    P: PageChrome,
{
    pub fn new(loader: ContentLoader<F>, store: S, page: P, config: &SiteConfig) -> Self {
        Self {
            loader,
            store,
            page,
            storage_key: config.theme_storage_key.clone(),
            state: NavState::new(Theme::Dark, &config.default_section),
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn loader(&self) -> &ContentLoader<F> {
        &self.loader
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted theme and apply it to the page
    pub fn init_theme(&mut self) -> Theme {
        let stored = match self.store.get(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        let theme = Theme::from_stored(stored.as_deref());
        self.state.theme = theme;
        self.page.apply_theme(theme);
        tracing::debug!("Initial theme: {}", theme);
        theme
    }

    /// Page startup: apply the stored theme, then load the fragment's section
    pub async fn start(&mut self, fragment: &str) -> Option<RenderOutcome> {
        self.init_theme();
        self.dispatch(NavEvent::Load {
            fragment: fragment.to_string(),
        })
        .await
    }

    /// Handle one event, returning the render outcome if it triggered one
    pub async fn dispatch(&mut self, event: NavEvent) -> Option<RenderOutcome> {
        tracing::debug!("Navigation event: {:?}", event);
        let (next, effects) = self.state.apply(&event);
        self.state = next;

        let mut outcome = None;
        for effect in effects {
            if let Some(rendered) = self.run(effect).await {
                outcome = Some(rendered);
            }
        }
        outcome
    }

    async fn run(&mut self, effect: Effect) -> Option<RenderOutcome> {
        match effect {
            Effect::SetSidebar(open) => self.page.set_sidebar_open(open),
            Effect::PushHistory(route) => self.page.push_history(&route),
            Effect::SetActiveLink(route) => self.page.set_active_link(&route),
            Effect::Render(route) => return Some(self.loader.render(&route, &self.page).await),
            Effect::ScrollToContent => self.page.scroll_to_content(),
            Effect::ApplyTheme(theme) => self.page.apply_theme(theme),
            Effect::PersistTheme(theme) => {
                if let Err(e) = self.store.set(&self.storage_key, theme.as_str()) {
                    tracing::warn!("Failed to persist theme preference: {}", e);
                }
            }
        }
        None
    }
}
