//! Deck Controller
//!
//! Owned deck state with pure transitions, independent of any signal or DOM
//! machinery so it can be tested directly.

use reactive_stores::Store;

use crate::models::Profile;

/// Terminal classification for the card at the current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Match,
    Pass,
}

/// The full swipe session: ordered deck, cursor, and the two accumulators.
///
/// `current_index` only increases (apart from `reset`) and ranges over
/// `[0, profiles.len()]`; equality with the length signals completion.
#[derive(Clone, Debug, Default, Store)]
pub struct DeckState {
    pub profiles: Vec<Profile>,
    pub current_index: usize,
    pub matched: Vec<Profile>,
    pub passed: Vec<Profile>,
}

impl DeckState {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            current_index: 0,
            matched: Vec::new(),
            passed: Vec::new(),
        }
    }

    /// The card currently on top, `None` once the deck is exhausted.
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.current_index)
    }

    /// The card behind the current one, used for the stack preview.
    pub fn upcoming(&self) -> Option<&Profile> {
        self.profiles.get(self.current_index + 1)
    }

    /// Record a decision for the current card and move on. Silent no-op when
    /// the deck is already exhausted.
    pub fn advance(&mut self, decision: Decision) {
        let Some(profile) = self.profiles.get(self.current_index).cloned() else {
            return;
        };
        match decision {
            Decision::Match => self.matched.push(profile),
            Decision::Pass => self.passed.push(profile),
        }
        self.current_index += 1;
    }

    /// Back to the top of the deck with empty accumulators.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.matched.clear();
        self.passed.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.profiles.len()
    }

    /// Fraction of the deck already decided, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.profiles.is_empty() {
            0.0
        } else {
            self.current_index as f64 / self.profiles.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Platform {}", id),
            tagline: "tagline".to_string(),
            description: "description".to_string(),
            pros: vec!["pro".to_string()],
            cons: vec!["con".to_string()],
            logo: "▲".to_string(),
            logo_url: None,
            category: "Test".to_string(),
        }
    }

    fn deck_of(n: usize) -> DeckState {
        DeckState::new((0..n).map(|i| make_profile(&i.to_string())).collect())
    }

    #[test]
    fn decisions_partition_into_accumulators() {
        let mut deck = deck_of(4);
        deck.advance(Decision::Match);
        deck.advance(Decision::Pass);
        deck.advance(Decision::Match);

        assert_eq!(deck.current_index, 3);
        assert_eq!(deck.matched.len() + deck.passed.len(), 3);
        assert_eq!(deck.matched[0].id, "0");
        assert_eq!(deck.passed[0].id, "1");
        assert_eq!(deck.matched[1].id, "2");
    }

    #[test]
    fn complete_iff_index_reaches_length() {
        let mut deck = deck_of(2);
        assert!(!deck.is_complete());
        deck.advance(Decision::Pass);
        assert!(!deck.is_complete());
        deck.advance(Decision::Match);
        assert!(deck.is_complete());
        assert!(deck.current().is_none());
    }

    #[test]
    fn advance_past_exhaustion_leaves_state_unchanged() {
        let mut deck = deck_of(1);
        deck.advance(Decision::Match);
        let before = (deck.current_index, deck.matched.len(), deck.passed.len());

        deck.advance(Decision::Pass);

        assert_eq!(
            (deck.current_index, deck.matched.len(), deck.passed.len()),
            before
        );
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut deck = deck_of(3);
        deck.advance(Decision::Match);
        deck.advance(Decision::Pass);

        deck.reset();

        assert_eq!(deck.current_index, 0);
        assert!(deck.matched.is_empty());
        assert!(deck.passed.is_empty());
        assert_eq!(deck.current().map(|p| p.id.as_str()), Some("0"));
    }

    #[test]
    fn upcoming_previews_next_card() {
        let mut deck = deck_of(2);
        assert_eq!(deck.upcoming().map(|p| p.id.as_str()), Some("1"));
        deck.advance(Decision::Pass);
        assert!(deck.upcoming().is_none());
    }

    #[test]
    fn progress_tracks_decided_fraction() {
        let mut deck = deck_of(4);
        assert_eq!(deck.progress(), 0.0);
        deck.advance(Decision::Match);
        assert!((deck.progress() - 0.25).abs() < 1e-9);
        assert_eq!(deck_of(0).progress(), 0.0);
    }
}
