//! Header Component
//!
//! Title, today's date and the theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::date::today_label;
use crate::models::Theme;

/// Widget header
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let today = today_label().unwrap_or_default();

    let toggle_title = move || match ctx.theme.get() {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    };

    view! {
        <header class="header">
            <div class="header-text">
                <h1>"My Tasks"</h1>
                <p id="today-date" class="today-date">{today}</p>
            </div>
            <button
                id="theme-toggle"
                class="theme-toggle"
                type="button"
                title=toggle_title
                on:click=move |_| ctx.toggle_theme()
            >
                <i class=move || ctx.theme.get().icon_class()></i>
            </button>
        </header>
    }
}
