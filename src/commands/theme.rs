//! Show or change the persisted theme preference

use anyhow::Result;

use crate::navigation::{NavEvent, Navigator, Theme};
use crate::page::HeadlessPage;
use crate::CourseSite;

/// What the theme command should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

/// Apply `action` through the navigation controller and return the result
pub async fn apply(site: &CourseSite, action: ThemeAction) -> Theme {
    let mut navigator = Navigator::new(
        site.loader(),
        site.theme_store(),
        HeadlessPage::with_sections(),
        &site.config,
    );

    let current = navigator.init_theme();
    let toggle = match action {
        ThemeAction::Show => false,
        ThemeAction::Toggle => true,
        ThemeAction::Set(theme) => theme != current,
    };

    if toggle {
        navigator.dispatch(NavEvent::ToggleTheme).await;
    }

    navigator.state().theme
}

/// Run the theme command
pub async fn run(site: &CourseSite, action: ThemeAction) -> Result<()> {
    let theme = apply(site, action).await;
    println!("{} {}", theme.icon(), theme);
    Ok(())
}
