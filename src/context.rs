//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Theme;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Content of the task input - read
    pub draft: ReadSignal<String>,
    /// Content of the task input - write
    set_draft: WriteSignal<String>,
    /// Active theme - read
    pub theme: ReadSignal<Theme>,
    /// Active theme - write
    set_theme: WriteSignal<Theme>,
}

impl AppContext {
    pub fn new(
        draft: (ReadSignal<String>, WriteSignal<String>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
    ) -> Self {
        Self {
            draft: draft.0,
            set_draft: draft.1,
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    /// Replace the input content (typing, or a task pulled back for editing)
    pub fn set_draft(&self, text: String) {
        self.set_draft.set(text);
    }

    pub fn clear_draft(&self) {
        self.set_draft.set(String::new());
    }

    /// Flip between light and dark
    pub fn toggle_theme(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
