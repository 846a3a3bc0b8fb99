//! The page boundary: where rendered fragments and chrome state end up
//!
//! In a browser these traits are backed by the DOM. [`HeadlessPage`] keeps the
//! same state in memory so the CLI and the tests can drive the navigator
//! without one.

use std::sync::{Mutex, MutexGuard};

use crate::navigation::Theme;
use crate::section::Section;

/// The single container that receives section fragments
pub trait ContentRegion: Send + Sync {
    /// Replace the whole region's markup
    fn replace(&self, html: &str);
}

/// Navigation chrome surrounding the content region
pub trait PageChrome: ContentRegion {
    /// Mark the link whose fragment equals `route` active, all others inactive
    fn set_active_link(&self, route: &str);

    /// Reflect the sidebar flag on the panel, the overlay and the body scroll lock
    fn set_sidebar_open(&self, open: bool);

    /// Apply the theme class and the toggle icon
    fn apply_theme(&self, theme: Theme);

    /// Push `#route` onto the session history without reloading
    fn push_history(&self, route: &str);

    /// Smoothly scroll the content region into view
    fn scroll_to_content(&self);
}

/// Observable state of a [`HeadlessPage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Current content region markup
    pub content: String,
    /// Every markup replacement, oldest first
    pub replacements: Vec<String>,
    /// `href` of every navigation link
    pub links: Vec<String>,
    /// `href` of the active link, if any link matched the route
    pub active_link: Option<String>,
    /// Sidebar panel carries `open`
    pub sidebar_open: bool,
    /// Overlay carries `active`
    pub overlay_active: bool,
    /// Body carries `nav-open`
    pub scroll_locked: bool,
    /// Body carries `light-theme`
    pub light_theme: bool,
    pub theme_icon: String,
    /// Fragments pushed onto history
    pub history: Vec<String>,
    pub scroll_requests: usize,
}

/// An in-memory page
#[derive(Debug, Default)]
pub struct HeadlessPage {
    state: Mutex<PageSnapshot>,
}

impl HeadlessPage {
    /// A page whose sidebar links to the given fragments
    pub fn new<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Mutex::new(PageSnapshot {
                links: links.into_iter().map(Into::into).collect(),
                ..PageSnapshot::default()
            }),
        }
    }

    /// A page with one link per section, in sidebar order
    pub fn with_sections() -> Self {
        Self::new(Section::ALL.iter().map(|s| format!("#{}", s.id())))
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        // a poisoned lock only means a panicking test; the data is still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ContentRegion for HeadlessPage {
    fn replace(&self, html: &str) {
        let mut state = self.lock();
        state.content = html.to_string();
        state.replacements.push(html.to_string());
    }
}

impl PageChrome for HeadlessPage {
    fn set_active_link(&self, route: &str) {
        let mut state = self.lock();
        let target = format!("#{}", route);
        state.active_link = state.links.iter().find(|href| **href == target).cloned();
    }

    fn set_sidebar_open(&self, open: bool) {
        let mut state = self.lock();
        state.sidebar_open = open;
        state.overlay_active = open;
        state.scroll_locked = open;
    }

    fn apply_theme(&self, theme: Theme) {
        let mut state = self.lock();
        state.light_theme = theme == Theme::Light;
        state.theme_icon = theme.icon().to_string();
    }

    fn push_history(&self, route: &str) {
        self.lock().history.push(format!("#{}", route));
    }

    fn scroll_to_content(&self) {
        self.lock().scroll_requests += 1;
    }
}
