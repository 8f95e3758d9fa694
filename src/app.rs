//! Taskdeck App
//!
//! Root component: store, context, theme and layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ConfettiCanvas, Header, NewTaskForm, ProgressBar, TaskFooter, TaskListView};
use crate::context::AppContext;
use crate::progress::Progress;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (draft, set_draft) = signal(String::new());
    let (current_theme, set_theme) = signal(theme::detect_theme());

    // Provide store and context to all children
    provide_context(store);
    provide_context(AppContext::new((draft, set_draft), (current_theme, set_theme)));

    // Re-derived on every list mutation
    let progress = Memo::new(move |_| Progress::of(&store.tasks().read()));

    // Apply and persist theme, including the initial one
    Effect::new(move |_| {
        let t = current_theme.get();
        if let Err(e) = theme::apply_theme(t) {
            log::warn!("[THEME] could not apply {}: {}", t.as_str(), e);
        }
        if let Err(e) = theme::save_theme(t) {
            log::warn!("[THEME] could not save {}: {}", t.as_str(), e);
        }
    });

    view! {
        <div class="app">
            <Header />
            <NewTaskForm />
            <ProgressBar progress=progress />
            <TaskListView />
            <TaskFooter progress=progress />
        </div>
        <ConfettiCanvas progress=progress />
    }
}
