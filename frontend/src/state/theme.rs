use crate::utils::storage;
use leptos::*;

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A stored preference wins; otherwise follow the system setting.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::from_stored)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn apply_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let list = html.class_list();
    let result = match theme {
        Theme::Dark => list.add_1(DARK_CLASS),
        Theme::Light => list.remove_1(DARK_CLASS),
    };
    if result.is_err() {
        log::warn!("failed to update the `{DARK_CLASS}` class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_dom(theme: Theme) {
    log::trace!("theme {} (class `{DARK_CLASS}`) not applied outside the browser", theme.as_str());
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    fn load() -> Self {
        let stored = storage::get_item(storage::THEME_KEY).ok().flatten();
        let theme = initial_theme(stored.as_deref(), system_prefers_dark());
        Self {
            theme: create_rw_signal(theme),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(err) = storage::set_item(storage::THEME_KEY, theme.as_str()) {
            log::warn!("failed to persist theme: {err}");
        }
        apply_to_dom(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::load();
    apply_to_dom(state.theme.get_untracked());
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn system_preference_is_the_fallback() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn toggle_persists_choice() {
        let runtime = create_runtime();
        storage::remove_item(storage::THEME_KEY).unwrap();
        let state = provide_theme();
        assert_eq!(state.theme.get(), Theme::Light);
        state.toggle();
        assert!(state.is_dark());
        assert_eq!(
            storage::get_item(storage::THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
        runtime.dispose();
    }
}
