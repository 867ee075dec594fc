//! Leptos Swipe Utilities
//!
//! Pointer-driven swipe-to-decide for Leptos card stacks. The phase machine
//! itself is pure (see [`machine`]); this module wires it to signals,
//! document-level pointer events, and the deferred settle/snap-back timers.

pub mod machine;

pub use machine::{
    DragSession, Point, SwipeConfig, SwipeDirection, SwipePhase,
};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Swipe state signals shared between the card and the global handlers.
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub phase_read: ReadSignal<SwipePhase>,
    pub phase_write: WriteSignal<SwipePhase>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (phase_read, phase_write) = signal(SwipePhase::Idle);
    SwipeSignals {
        phase_read,
        phase_write,
    }
}

/// Force the interpreter back to `Idle`, dropping any session or pending
/// settle. Used when the deck restarts.
pub fn reset(swipe: &SwipeSignals) {
    swipe.phase_write.set(SwipePhase::Idle);
}

/// Create pointerdown handler for the active card.
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        // Primary button / first touch point only.
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let phase = swipe.phase_read.get_untracked();
        swipe.phase_write.set(machine::press(phase, ev.pointer_id(), at));
    }
}

/// Bind global pointermove handler for the document.
pub fn bind_global_pointermove(swipe: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |ev: web_sys::PointerEvent| {
            let phase = swipe.phase_read.get_untracked();
            if matches!(phase, SwipePhase::Dragging(_)) {
                ev.prevent_default();
                let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
                swipe.phase_write.set(machine::drag_to(phase, ev.pointer_id(), at));
            }
        },
    );

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "pointermove",
                on_pointermove.as_ref().unchecked_ref(),
            );
        }
    }
    on_pointermove.forget();
}

/// Bind global pointercancel handler; a cancelled drag snaps back and never
/// produces a decision.
pub fn bind_global_pointercancel(swipe: SwipeSignals, config: SwipeConfig) {
    use wasm_bindgen::closure::Closure;

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |ev: web_sys::PointerEvent| {
            let phase = swipe.phase_read.get_untracked();
            let next = machine::cancel(phase, ev.pointer_id());
            if next != phase {
                swipe.phase_write.set(next);
                schedule_snap_back(swipe, config);
            }
        },
    );

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "pointercancel",
                on_pointercancel.as_ref().unchecked_ref(),
            );
        }
    }
    on_pointercancel.forget();
}

/// Bind global pointerup handler for release classification.
///
/// `on_swipe` fires once per decided card: immediately for a left swipe,
/// after `config.settle_delay_ms` for a right swipe.
pub fn bind_global_pointerup<F>(swipe: SwipeSignals, config: SwipeConfig, on_swipe: F)
where
    F: Fn(SwipeDirection) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |ev: web_sys::PointerEvent| {
            let phase = swipe.phase_read.get_untracked();
            // Releasing without an active session is a no-op.
            if !matches!(phase, SwipePhase::Dragging(_)) {
                return;
            }
            let (next, decision) = machine::release(phase, ev.pointer_id(), &config);
            swipe.phase_write.set(next);

            if let Some(direction) = decision {
                on_swipe(direction);
            }
            match next {
                SwipePhase::Settling(_) => schedule_settle(swipe, config, on_swipe.clone()),
                SwipePhase::SnapBack => schedule_snap_back(swipe, config),
                _ => {}
            }
        },
    );

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "pointerup",
                on_pointerup.as_ref().unchecked_ref(),
            );
        }
    }
    on_pointerup.forget();

    // Also bind global pointermove and pointercancel
    bind_global_pointermove(swipe);
    bind_global_pointercancel(swipe, config);
}

/// One-shot settle timer. Owned by the `Settling` phase: presses are ignored
/// while settling, so it can never be issued twice for one card.
fn schedule_settle<F>(swipe: SwipeSignals, config: SwipeConfig, on_swipe: F)
where
    F: Fn(SwipeDirection) + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(config.settle_delay_ms).await;
        let (next, decision) = machine::settle_elapsed(swipe.phase_read.get_untracked());
        swipe.phase_write.set(next);
        if let Some(direction) = decision {
            on_swipe(direction);
        }
    });
}

fn schedule_snap_back(swipe: SwipeSignals, config: SwipeConfig) {
    spawn_local(async move {
        TimeoutFuture::new(config.snap_back_ms).await;
        swipe
            .phase_write
            .set(machine::snap_elapsed(swipe.phase_read.get_untracked()));
    });
}
