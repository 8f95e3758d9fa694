//! Confetti Canvas Component
//!
//! Full-window overlay that celebrates once every task is done.

use leptos::prelude::*;
use leptos_confetti::{bind_confetti, ConfettiConfig};

use crate::progress::Progress;

#[component]
pub fn ConfettiCanvas(progress: Memo<Progress>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let confetti = bind_confetti(canvas_ref, ConfettiConfig::default());

    // Progress is a memo, so this runs once per change that actually moves the counts
    Effect::new(move |_| {
        if progress.get().is_all_done() && !confetti.burst() {
            log::debug!("[CONFETTI] canvas not mounted yet, skipping burst");
        }
    });

    view! {
        <canvas id="confetti-canvas" class="confetti-canvas" node_ref=canvas_ref></canvas>
    }
}
