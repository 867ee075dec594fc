//! Card Stack Component
//!
//! The active card plus a dimmed preview of the next one behind it.

use leptos::prelude::*;

use crate::components::{CardFace, SwipeCard};
use crate::store::{store_current_profile, store_upcoming_profile, use_deck_store};

#[component]
pub fn CardStack() -> impl IntoView {
    let deck = use_deck_store();

    view! {
        <div class="card-stack">
            {move || store_upcoming_profile(&deck).map(|profile| view! {
                <div class="card-preview">
                    <CardFace profile=profile />
                </div>
            })}
            {move || store_current_profile(&deck).map(|profile| view! {
                <SwipeCard profile=profile />
            })}
        </div>
    }
}
