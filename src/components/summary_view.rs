//! Summary View Component
//!
//! End-of-deck screen: matched and passed lists plus a restart button.

use leptos::prelude::*;

use crate::components::ProfileGlyph;
use crate::context::AppContext;
use crate::deck::DeckStateStoreFields;
use crate::models::Profile;
use crate::store::{store_reset, use_deck_store};

fn profile_rows(profiles: Vec<Profile>, empty_message: &'static str) -> impl IntoView {
    if profiles.is_empty() {
        view! { <p class="summary-placeholder">{empty_message}</p> }.into_any()
    } else {
        profiles
            .into_iter()
            .map(|profile| {
                let name = profile.name.clone();
                view! {
                    <div class="summary-row">
                        <ProfileGlyph profile=profile />
                        <span class="summary-name">{name}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    }
}

#[component]
pub fn SummaryView() -> impl IntoView {
    let deck = use_deck_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let start_over = move |_| {
        store_reset(&deck);
        ctx.restart();
    };

    view! {
        <div class="summary-view">
            <h1>"🎉 All Done!"</h1>

            <section class="summary-section matches">
                <h2>{move || format!("Your Matches ({})", deck.matched().read().len())}</h2>
                {move || profile_rows(deck.matched().get(), "No matches yet!")}
            </section>

            <section class="summary-section passes">
                <h2>{move || format!("Passed ({})", deck.passed().read().len())}</h2>
                {move || profile_rows(deck.passed().get(), "You liked everything!")}
            </section>

            <button class="start-over-btn" on:click=start_over>"Start Over"</button>
        </div>
    }
}
