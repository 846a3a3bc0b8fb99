//! Navigation state and its transitions
//!
//! [`NavState::apply`] is pure: it maps the current state and one user or
//! browser event to the next state plus the effects the page should see.
//! Running those effects is the [`Navigator`](super::Navigator)'s job.

use super::route;
use super::theme::Theme;

/// Something the user or the browser did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Initial page load with the current address-bar fragment
    Load { fragment: String },
    /// A navigation link was clicked
    LinkClicked { href: String },
    /// Back/forward changed the address-bar fragment
    PopState { fragment: String },
    ToggleSidebar,
    OverlayClicked,
    ToggleTheme,
}

/// A change the page must reflect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetSidebar(bool),
    PushHistory(String),
    SetActiveLink(String),
    Render(String),
    ScrollToContent,
    ApplyTheme(Theme),
    PersistTheme(Theme),
}

/// Everything the chrome needs to know, rebuilt from events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// The current route; at most one link matches it
    pub route: String,
    pub sidebar_open: bool,
    pub theme: Theme,
    default_route: String,
}

impl NavState {
    pub fn new(theme: Theme, default_route: &str) -> Self {
        Self {
            route: default_route.to_string(),
            sidebar_open: false,
            theme,
            default_route: default_route.to_string(),
        }
    }

    /// The next state and the effects of `event`
    pub fn apply(&self, event: &NavEvent) -> (NavState, Vec<Effect>) {
        let mut next = self.clone();

        let effects = match event {
            NavEvent::Load { fragment } | NavEvent::PopState { fragment } => {
                next.route = route::resolve(fragment, &self.default_route);
                vec![
                    Effect::SetActiveLink(next.route.clone()),
                    Effect::Render(next.route.clone()),
                ]
            }
            NavEvent::LinkClicked { href } => {
                next.route = route::from_href(href);
                next.sidebar_open = false;
                vec![
                    Effect::SetSidebar(false),
                    Effect::PushHistory(next.route.clone()),
                    Effect::SetActiveLink(next.route.clone()),
                    Effect::Render(next.route.clone()),
                    Effect::ScrollToContent,
                ]
            }
            NavEvent::ToggleSidebar => {
                next.sidebar_open = !self.sidebar_open;
                vec![Effect::SetSidebar(next.sidebar_open)]
            }
            NavEvent::OverlayClicked => {
                next.sidebar_open = false;
                vec![Effect::SetSidebar(false)]
            }
            NavEvent::ToggleTheme => {
                next.theme = self.theme.toggled();
                vec![
                    Effect::ApplyTheme(next.theme),
                    Effect::PersistTheme(next.theme),
                ]
            }
        };

        (next, effects)
    }
}
