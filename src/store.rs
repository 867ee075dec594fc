//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::deck::{DeckState, Decision};
use crate::models::Profile;

/// Type alias for the store
pub type DeckStore = Store<DeckState>;

/// Get the deck store from context
pub fn use_deck_store() -> DeckStore {
    expect_context::<DeckStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a decision to the current card and advance the cursor
pub fn store_advance(store: &DeckStore, decision: Decision) {
    store.write().advance(decision);
}

/// Restart the session: cursor to 0, accumulators cleared
pub fn store_reset(store: &DeckStore) {
    store.write().reset();
}

/// The card currently on top (tracked read)
pub fn store_current_profile(store: &DeckStore) -> Option<Profile> {
    store.read().current().cloned()
}

/// The card behind the current one (tracked read)
pub fn store_upcoming_profile(store: &DeckStore) -> Option<Profile> {
    store.read().upcoming().cloned()
}
