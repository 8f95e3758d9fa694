//! Progress Bar Component

use leptos::prelude::*;

use crate::progress::Progress;

/// Completion bar with percentage label
#[component]
pub fn ProgressBar(progress: Memo<Progress>) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get().percent())
                ></div>
            </div>
            <span class="progress-text">{move || progress.get().label()}</span>
        </div>
    }
}
