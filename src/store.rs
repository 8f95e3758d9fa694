//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task};
use crate::tasks;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Current status filter
    pub filter: Filter,
    /// Next render key to hand out
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a task. Blank text is ignored and consumes no id.
pub fn store_add_task(store: &AppStore, text: &str) -> Option<u32> {
    let id = store.next_id().get_untracked();
    let Some(task) = Task::new(id, text) else {
        log::debug!("[TASKS] ignored blank input");
        return None;
    };
    store.tasks().write().push(task);
    store.next_id().set(id + 1);
    log::debug!("[TASKS] added #{}", id);
    Some(id)
}

pub fn store_set_completed(store: &AppStore, id: u32, completed: bool) {
    tasks::set_completed(&mut store.tasks().write(), id, completed);
}

pub fn store_remove_task(store: &AppStore, id: u32) {
    if tasks::remove_task(&mut store.tasks().write(), id).is_some() {
        log::debug!("[TASKS] removed #{}", id);
    }
}

/// Remove a task and return its text for the input field
pub fn store_take_for_edit(store: &AppStore, id: u32) -> Option<String> {
    tasks::take_for_edit(&mut store.tasks().write(), id)
}

pub fn store_clear_completed(store: &AppStore) -> usize {
    let removed = tasks::clear_completed(&mut store.tasks().write());
    log::debug!("[TASKS] cleared {} completed", removed);
    removed
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}
