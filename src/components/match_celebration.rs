//! Match Celebration Component
//!
//! Full-screen celebratory overlay shown while a right-swipe is settling,
//! before the decision is committed to the deck.

use leptos::prelude::*;
use leptos_swipe::SwipePhase;

use crate::context::AppContext;
use crate::store::{store_current_profile, use_deck_store};

const CONFETTI_COUNT: usize = 50;

fn confetti_particles() -> impl IntoView {
    (0..CONFETTI_COUNT)
        .map(|_| {
            let left = js_sys::Math::random() * 100.0;
            let top = js_sys::Math::random() * 100.0;
            let delay = js_sys::Math::random() * 2.0;
            let spin = js_sys::Math::random() * 360.0;
            view! {
                <div
                    class="confetti"
                    style=format!(
                        "left: {left:.1}%; top: {top:.1}%; \
                         animation-delay: {delay:.2}s; transform: rotate({spin:.0}deg);"
                    )
                />
            }
        })
        .collect_view()
}

#[component]
pub fn MatchCelebration() -> impl IntoView {
    let deck = use_deck_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let settling = move || matches!(ctx.swipe.phase_read.get(), SwipePhase::Settling(_));

    // The deck has not advanced yet while settling, so the current card is
    // the one being matched.
    let matched_name = move || {
        store_current_profile(&deck)
            .map(|p| p.name)
            .unwrap_or_default()
    };

    view! {
        <Show when=settling>
            <div class="match-celebration">
                <div class="confetti-field">{confetti_particles()}</div>
                <div class="celebration-text">
                    <div class="celebration-emoji">"🎉"</div>
                    <div class="celebration-headline">"IT'S A MATCH!"</div>
                    <div class="celebration-with">"with"</div>
                    <div class="celebration-name">{matched_name}</div>
                </div>
            </div>
        </Show>
    }
}
