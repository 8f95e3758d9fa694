//! Leptos Confetti
//!
//! Full-window canvas particle burst for Leptos apps.
//! Drawing runs on `requestAnimationFrame` and stops on its own once a
//! burst expires.

mod particle;

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub use particle::{hue_color, spawn_particles, Particle};

/// Errors raised while wiring the canvas
#[derive(Debug, thiserror::Error)]
pub enum ConfettiError {
    #[error("window is not available")]
    NoWindow,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ConfettiError {
    fn from(value: JsValue) -> Self {
        ConfettiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, ConfettiError>;

/// Burst tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiConfig {
    /// Particles spawned per burst
    pub particle_count: usize,
    /// How long a burst lives before the particles are dropped
    pub duration_ms: u32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 140,
            duration_ms: 3000,
        }
    }
}

struct Inner {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: ConfettiConfig,
    particles: RefCell<Vec<Particle>>,
    /// A frame loop is scheduled
    running: Cell<bool>,
    /// Bumped on every burst so stale expiry timers do nothing
    generation: Cell<u32>,
}

/// Confetti engine bound to one canvas
#[derive(Clone)]
pub struct Confetti {
    inner: Rc<Inner>,
}

impl Confetti {
    /// Take over `canvas`: size it to the viewport and keep it sized on resize.
    pub fn attach(canvas: HtmlCanvasElement, config: ConfettiConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(ConfettiError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ConfettiError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ConfettiError::NoContext)?;

        let inner = Rc::new(Inner {
            window,
            canvas,
            ctx,
            config,
            particles: RefCell::new(Vec::new()),
            running: Cell::new(false),
            generation: Cell::new(0),
        });

        resize_canvas(&inner)?;
        bind_window_resize(inner.clone());

        Ok(Self { inner })
    }

    /// Start a burst, replacing any particles still in flight.
    pub fn burst(&self) {
        let inner = &self.inner;
        let (width, height) = viewport_size(&inner.window);
        *inner.particles.borrow_mut() =
            spawn_particles(inner.config.particle_count, width, height, js_sys::Math::random);

        let generation = inner.generation.get().wrapping_add(1);
        inner.generation.set(generation);
        let expiring = inner.clone();
        Timeout::new(inner.config.duration_ms, move || {
            if expiring.generation.get() == generation {
                expiring.particles.borrow_mut().clear();
            }
        })
        .forget();

        log::debug!("[CONFETTI] burst #{} with {} particles", generation, inner.config.particle_count);

        if !inner.running.get() {
            start_frame_loop(inner.clone());
        }
    }

    /// Particles are still alive
    pub fn is_active(&self) -> bool {
        !self.inner.particles.borrow().is_empty()
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.inner.canvas
    }
}

/// Viewport size in CSS pixels
fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Backing store at device resolution, drawing in CSS pixels
fn resize_canvas(inner: &Inner) -> Result<()> {
    let dpr = match inner.window.device_pixel_ratio() {
        r if r > 0.0 => r,
        _ => 1.0,
    };
    let (width, height) = viewport_size(&inner.window);

    inner.canvas.set_width((width * dpr) as u32);
    inner.canvas.set_height((height * dpr) as u32);

    let style = web_sys::HtmlElement::style(&inner.canvas);
    style.set_property("width", &format!("{}px", width))?;
    style.set_property("height", &format!("{}px", height))?;

    inner.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    Ok(())
}

fn bind_window_resize(inner: Rc<Inner>) {
    let window = inner.window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = resize_canvas(&inner) {
            log::warn!("[CONFETTI] resize failed: {}", e);
        }
    });
    if let Err(e) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
        log::warn!("[CONFETTI] resize listener not bound: {}", ConfettiError::from(e));
    }
    on_resize.forget();
}

/// Draw one frame. Returns whether another frame is needed.
fn draw_frame(inner: &Inner) -> bool {
    let ctx = &inner.ctx;
    ctx.clear_rect(0.0, 0.0, inner.canvas.width() as f64, inner.canvas.height() as f64);

    let mut particles = inner.particles.borrow_mut();
    for p in particles.iter_mut() {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.r, 0.0, TAU);
        ctx.set_fill_style_str(&hue_color(js_sys::Math::random() * 360.0));
        ctx.fill();
        p.step();
    }
    !particles.is_empty()
}

fn start_frame_loop(inner: Rc<Inner>) {
    inner.running.set(true);

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduled = frame.clone();
    let window = inner.window.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        if draw_frame(&inner) {
            if let Some(cb) = scheduled.borrow().as_ref() {
                if inner.window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
                    return;
                }
            }
        }
        inner.running.set(false);
        // Break the self-reference so the closure is freed after returning
        let _ = scheduled.borrow_mut().take();
    }));

    let requested = frame
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
        .unwrap_or(false);
    if !requested {
        log::warn!("[CONFETTI] requestAnimationFrame unavailable");
        let _ = frame.borrow_mut().take();
    }
}

/// Lazily attached confetti engine, shareable across closures
#[derive(Clone, Default)]
pub struct ConfettiHandle(Rc<RefCell<Option<Confetti>>>);

impl ConfettiHandle {
    /// Fire a burst. Returns false while the canvas is not mounted yet.
    pub fn burst(&self) -> bool {
        match self.0.borrow().as_ref() {
            Some(confetti) => {
                confetti.burst();
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Attach a confetti engine to `canvas_ref` as soon as it mounts
pub fn bind_confetti(canvas_ref: NodeRef<leptos::html::Canvas>, config: ConfettiConfig) -> ConfettiHandle {
    let handle = ConfettiHandle::default();
    let slot = handle.clone();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        if slot.is_attached() {
            return;
        }
        match Confetti::attach(canvas, config) {
            Ok(confetti) => *slot.0.borrow_mut() = Some(confetti),
            Err(e) => log::warn!("[CONFETTI] attach failed: {}", e),
        }
    });

    handle
}
