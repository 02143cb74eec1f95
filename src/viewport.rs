//! Viewport Width
//!
//! Window width in CSS pixels as a signal, kept current by a resize listener.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Used when the window size cannot be read
const FALLBACK_WIDTH: u32 = 1280;

fn current_width() -> u32 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Create the width signal and bind a window resize listener for the
/// lifetime of the app
pub fn create_viewport_width() -> ReadSignal<u32> {
    let (width, set_width) = signal(current_width());

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let w = current_width();
        if w != width.get_untracked() {
            set_width.set(w);
        }
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();

    width
}
