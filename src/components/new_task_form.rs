//! New Task Form Component
//!
//! Input row for adding tasks. Also receives text pulled back by edit.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_add_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input stays in the field untouched
        if store_add_task(&store, &ctx.draft.get_untracked()).is_some() {
            ctx.clear_draft();
        }
    };

    view! {
        <form class="input-area" on:submit=add_task>
            <input
                id="task-input"
                type="text"
                placeholder="Add a new task..."
                autocomplete="off"
                prop:value=move || ctx.draft.get()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" title="Add task">
                <i class="fa-solid fa-plus"></i>
            </button>
        </form>
    }
}
