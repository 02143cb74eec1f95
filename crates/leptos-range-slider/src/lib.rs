//! Leptos Range Slider
//!
//! Two-handle slider for numeric ranges using mouse and touch events.
//! The interval logic lives in [`RangeSelector`]; this module only maps
//! pointer positions onto it.

mod state;

pub use state::{CommitMode, RangeSelector, Thumb};

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// Horizontal position of `client_x` inside the track, 0.0 at the left edge
fn track_ratio(track: NodeRef<html::Div>, client_x: i32) -> Option<f64> {
    let el = track.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    Some((f64::from(client_x) - rect.left()) / rect.width())
}

fn touch_x(ev: &web_sys::TouchEvent) -> Option<i32> {
    ev.touches().get(0).map(|touch| touch.client_x())
}

/// Range slider bound to a committed `(lo, hi)` value owned by the caller.
///
/// `on_change` fires only when the committed interval changes: on release
/// by default, on every step with `CommitMode::Continuous`, and on track
/// clicks. `format` renders the handle labels.
#[component]
pub fn RangeSlider(
    min: u32,
    max: u32,
    step: u32,
    #[prop(into)] value: Signal<(u32, u32)>,
    #[prop(into)] on_change: Callback<(u32, u32)>,
    #[prop(into)] format: Callback<u32, String>,
    #[prop(optional)] mode: CommitMode,
) -> impl IntoView {
    let state = RwSignal::new(RangeSelector::new(min, max, step, mode));
    let track_ref = NodeRef::<html::Div>::new();
    // Set on release so the click that follows a drag does not jump a handle
    let (drag_just_ended, set_drag_just_ended) = signal(false);

    Effect::new(move |_| {
        let (lo, hi) = value.get();
        state.update(|s| s.sync_committed(lo, hi));
    });

    let emit = move |changed: Option<(u32, u32)>| {
        if let Some(range) = changed {
            on_change.run(range);
        }
    };

    let start = move |thumb: Thumb| {
        set_drag_just_ended.set(false);
        state.update(|s| s.begin_drag(thumb));
    };

    let drag_at = move |client_x: i32| {
        if !state.with_untracked(RangeSelector::is_dragging) {
            return;
        }
        if let Some(ratio) = track_ratio(track_ref, client_x) {
            let changed = state
                .try_update(|s| {
                    let value = s.value_at_ratio(ratio);
                    s.drag_to(value)
                })
                .flatten();
            emit(changed);
        }
    };

    let release = move || {
        if state.with_untracked(RangeSelector::is_dragging) {
            set_drag_just_ended.set(true);
            emit(state.try_update(|s| s.release()).flatten());
        }
    };

    let handles = [
        window_event_listener(ev::mousemove, move |ev| drag_at(ev.client_x())),
        window_event_listener(ev::touchmove, move |ev| {
            if !state.with_untracked(RangeSelector::is_dragging) {
                return;
            }
            // Keep the page from scrolling under an active thumb
            ev.prevent_default();
            if let Some(x) = touch_x(&ev) {
                drag_at(x);
            }
        }),
        window_event_listener(ev::mouseup, move |_| release()),
        window_event_listener(ev::touchend, move |_| release()),
    ];
    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });

    let on_track_click = move |ev: web_sys::MouseEvent| {
        if drag_just_ended.get_untracked() {
            set_drag_just_ended.set(false);
            return;
        }
        if let Some(ratio) = track_ratio(track_ref, ev.client_x()) {
            let changed = state
                .try_update(|s| {
                    let value = s.value_at_ratio(ratio);
                    s.click_track(value)
                })
                .flatten();
            emit(changed);
        }
    };

    let live = move || state.with(RangeSelector::live);
    let left_pct = move || state.with(|s| s.percent(s.live().0));
    let right_pct = move || state.with(|s| s.percent(s.live().1));
    let is_active = move |thumb: Thumb| state.with(|s| s.active() == Some(thumb));

    view! {
        <div class="range-slider">
            <div class="range-slider-labels">
                <span class="range-slider-label">{move || format.run(live().0)}</span>
                <span class="range-slider-label">{move || format.run(live().1)}</span>
            </div>
            <div
                class="range-slider-track"
                node_ref=track_ref
                on:mousedown=move |_| set_drag_just_ended.set(false)
                on:click=on_track_click
            >
                <div
                    class="range-slider-fill"
                    style=move || {
                        format!("left: {}%; width: {}%", left_pct(), right_pct() - left_pct())
                    }
                ></div>
                <div
                    class="range-slider-thumb"
                    class:active=move || is_active(Thumb::Low)
                    style=move || format!("left: {}%; touch-action: none", left_pct())
                    on:mousedown=move |ev: web_sys::MouseEvent| {
                        if ev.button() == 0 {
                            ev.prevent_default();
                            ev.stop_propagation();
                            start(Thumb::Low);
                        }
                    }
                    on:touchstart=move |ev: web_sys::TouchEvent| {
                        ev.stop_propagation();
                        start(Thumb::Low);
                    }
                ></div>
                <div
                    class="range-slider-thumb"
                    class:active=move || is_active(Thumb::High)
                    style=move || format!("left: {}%; touch-action: none", right_pct())
                    on:mousedown=move |ev: web_sys::MouseEvent| {
                        if ev.button() == 0 {
                            ev.prevent_default();
                            ev.stop_propagation();
                            start(Thumb::High);
                        }
                    }
                    on:touchstart=move |ev: web_sys::TouchEvent| {
                        ev.stop_propagation();
                        start(Thumb::High);
                    }
                ></div>
            </div>
        </div>
    }
}
