//! Task List View Component
//!
//! Filtered task list plus the empty-state placeholder.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tasks::visible_tasks;

/// Task list filtered by the current status filter
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let tasks = move || visible_tasks(&store.tasks().read(), store.filter().get());
    // Empty means no tasks at all, regardless of filter
    let is_empty = move || store.tasks().read().is_empty();

    view! {
        <ul id="task-list" class="task-list">
            <For
                each=tasks
                // Completion is part of the key so toggled rows re-render
                key=|task| (task.id, task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
        <div
            class="empty-state"
            style:display=move || if is_empty() { "flex" } else { "none" }
        >
            <i class="fa-regular fa-clipboard"></i>
            <p>"No tasks yet. Add one above!"</p>
        </div>
    }
}
