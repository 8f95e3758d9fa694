//! Theme Preference
//!
//! Light/dark theme persisted in local storage and applied as a class on `<body>`.

use web_sys::Storage;

use crate::error::{AppError, Result};
use crate::models::Theme;

/// Local storage key holding `"light"` or `"dark"`
pub const THEME_STORAGE_KEY: &str = "todo-theme";

/// Class toggled on `<body>` in dark mode
const DARK_CLASS: &str = "dark";

fn local_storage() -> Result<Storage> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    window.local_storage()?.ok_or(AppError::StorageUnavailable)
}

/// Saved theme, if any. Unknown values count as unset.
pub fn load_saved_theme() -> Result<Option<Theme>> {
    let saved = local_storage()?.get_item(THEME_STORAGE_KEY)?;
    Ok(saved.as_deref().and_then(Theme::parse))
}

pub fn save_theme(theme: Theme) -> Result<()> {
    local_storage()?.set_item(THEME_STORAGE_KEY, theme.as_str())?;
    Ok(())
}

/// `(prefers-color-scheme: dark)` matches
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Saved preference wins, then the system preference
pub fn initial_theme(saved: Option<Theme>, prefers_dark: bool) -> Theme {
    saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Read the starting theme from the browser
pub fn detect_theme() -> Theme {
    let saved = load_saved_theme().unwrap_or_else(|e| {
        log::warn!("[THEME] could not read saved theme: {}", e);
        None
    });
    initial_theme(saved, prefers_dark())
}

/// Toggle the body class for `theme`
pub fn apply_theme(theme: Theme) -> Result<()> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or(AppError::NoBody)?;
    body.class_list()
        .toggle_with_force(DARK_CLASS, theme == Theme::Dark)?;
    Ok(())
}
