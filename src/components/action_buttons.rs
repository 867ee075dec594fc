//! Action Buttons Component
//!
//! Explicit pass/match buttons below the stack. They skip the gesture
//! interpreter and decide the current card directly.

use leptos::prelude::*;
use leptos_swipe::SwipePhase;

use crate::context::AppContext;
use crate::deck::Decision;
use crate::store::{store_advance, use_deck_store};

#[component]
pub fn ActionButtons() -> impl IntoView {
    let deck = use_deck_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Inert while a match is settling so the pending decision cannot be raced.
    let decide = move |decision: Decision| {
        if matches!(ctx.swipe.phase_read.get_untracked(), SwipePhase::Settling(_)) {
            return;
        }
        store_advance(&deck, decision);
    };

    view! {
        <div class="action-buttons">
            <button class="action-btn pass" on:click=move |_| decide(Decision::Pass)>
                "💔"
            </button>
            <button class="action-btn match" on:click=move |_| decide(Decision::Match)>
                "💚"
            </button>
        </div>
    }
}
