//! Task Footer Component
//!
//! Items-left counter, status filters and clear-completed.

use leptos::prelude::*;

use crate::models::Filter;
use crate::progress::Progress;
use crate::store::{store_clear_completed, store_set_filter, use_app_store, AppStateStoreFields};

/// Footer below the list
#[component]
pub fn TaskFooter(progress: Memo<Progress>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="task-footer">
            <span class="items-left">
                <span id="items-left">{move || progress.get().remaining()}</span>
                " left"
            </span>

            <div class="filters">
                {Filter::ALL.iter().map(|&filter| {
                    let is_active = move || store.filter().get() == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=filter.as_str()
                            on:click=move |_| store_set_filter(&store, filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button
                id="clear-completed"
                type="button"
                class="clear-btn"
                on:click=move |_| { store_clear_completed(&store); }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
