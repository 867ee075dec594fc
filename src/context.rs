//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos_swipe::{self as swipe, SwipeConfig, SwipeSignals};

/// App-wide gesture handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Phase signals of the gesture interpreter for the active card
    pub swipe: SwipeSignals,
    /// Gesture tuning (threshold, rotation, settle delay)
    pub config: SwipeConfig,
}

impl AppContext {
    pub fn new(swipe: SwipeSignals, config: SwipeConfig) -> Self {
        Self { swipe, config }
    }

    /// Drop any in-flight gesture, e.g. when the deck restarts
    pub fn restart(&self) {
        swipe::reset(&self.swipe);
    }
}
