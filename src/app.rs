//! TechMatch Frontend App
//!
//! Main application component: owns the deck store and the gesture signals,
//! installs the global pointer bindings once, and swaps to the summary view
//! when the deck is exhausted.

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_swipe::{bind_global_pointerup, create_swipe_signals, SwipeConfig, SwipeDirection};

use crate::components::{ActionButtons, CardStack, MatchCelebration, ProgressBar, SummaryView};
use crate::context::AppContext;
use crate::data::builtin_profiles;
use crate::deck::{DeckState, Decision};
use crate::store::store_advance;

#[component]
pub fn App() -> impl IntoView {
    let deck = Store::new(DeckState::new(builtin_profiles()));
    let swipe = create_swipe_signals();
    let config = SwipeConfig::default();

    // Provide context to all children
    provide_context(deck);
    provide_context(AppContext::new(swipe, config));

    // One document-level binding for the whole session; the interpreter
    // ignores events while no card owns a drag.
    bind_global_pointerup(swipe, config, move |direction| {
        let decision = match direction {
            SwipeDirection::Right => Decision::Match,
            SwipeDirection::Left => Decision::Pass,
        };
        web_sys::console::log_1(
            &format!(
                "[DECK] {:?} at index {}",
                decision,
                deck.read_untracked().current_index
            )
            .into(),
        );
        store_advance(&deck, decision);
    });

    let deck_finished = move || deck.read().is_complete();

    view! {
        <div class="app-container">
            <MatchCelebration />
            <Show
                when=move || !deck_finished()
                fallback=move || view! { <SummaryView /> }
            >
                <div class="deck-screen">
                    <header class="app-header">
                        <h1>"💻❤️ TechMatch"</h1>
                        <p>"Swipe right to match, left to pass"</p>
                    </header>
                    <CardStack />
                    <ActionButtons />
                    <ProgressBar />
                </div>
            </Show>
        </div>
    }
}
