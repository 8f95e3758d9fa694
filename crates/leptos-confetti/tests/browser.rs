#![cfg(target_arch = "wasm32")]
//! Browser tests for the canvas engine. Run with `wasm-pack test --headless --firefox`.

use leptos_confetti::{Confetti, ConfettiConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn attach_sizes_canvas_to_viewport() {
    let window = web_sys::window().unwrap();
    let dpr = window.device_pixel_ratio();
    let width = window.inner_width().unwrap().as_f64().unwrap();

    let confetti = Confetti::attach(make_canvas(), ConfettiConfig::default()).unwrap();

    assert_eq!(confetti.canvas().width(), (width * dpr) as u32);
    assert_eq!(
        confetti.canvas().style().get_property_value("width").unwrap(),
        format!("{}px", width)
    );
}

#[wasm_bindgen_test]
fn burst_spawns_particles() {
    let confetti = Confetti::attach(make_canvas(), ConfettiConfig::default()).unwrap();
    assert!(!confetti.is_active());

    confetti.burst();
    assert!(confetti.is_active());
}

#[wasm_bindgen_test]
fn empty_burst_is_inactive() {
    let config = ConfettiConfig { particle_count: 0, ..ConfettiConfig::default() };
    let confetti = Confetti::attach(make_canvas(), config).unwrap();

    confetti.burst();
    assert!(!confetti.is_active());
}

#[wasm_bindgen_test]
fn window_resize_restores_canvas_size() {
    let window = web_sys::window().unwrap();
    let dpr = window.device_pixel_ratio();
    let width = window.inner_width().unwrap().as_f64().unwrap();

    let confetti = Confetti::attach(make_canvas(), ConfettiConfig::default()).unwrap();
    confetti.canvas().set_width(1);

    let resize = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&resize).unwrap();

    assert_eq!(confetti.canvas().width(), (width * dpr) as u32);
}
