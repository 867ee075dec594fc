//! Progress Bar Component
//!
//! How far through the deck the session is.

use leptos::prelude::*;

use crate::store::use_deck_store;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let deck = use_deck_store();

    let percent = move || deck.read().progress() * 100.0;

    view! {
        <div class="progress-track">
            <div class="progress-fill" style=move || format!("width: {:.0}%;", percent()) />
        </div>
    }
}
