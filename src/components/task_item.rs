//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::markdown::render_task_text;
use crate::models::Task;
use crate::store::{store_remove_task, store_set_completed, store_take_for_edit, use_app_store};

/// A single task row
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let html = render_task_text(&task.text);

    let on_edit = move |_| {
        if let Some(text) = store_take_for_edit(&store, id) {
            ctx.set_draft(text);
        }
    };

    view! {
        <li class=if completed { "task completed" } else { "task" }>
            <input
                type="checkbox"
                class="checkbox"
                checked=completed
                on:change=move |ev| store_set_completed(&store, id, event_target_checked(&ev))
            />
            <span class="task-text" inner_html=html></span>
            <div class="task-buttons">
                // Completed tasks are locked against editing
                <button class="edit-btn" title="Edit" disabled=completed on:click=on_edit>
                    <i class="fa-solid fa-pen"></i>
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| store_remove_task(&store, id)>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </div>
        </li>
    }
}
