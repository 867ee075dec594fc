//! Frontend Models
//!
//! Data structures for the swipeable platform profiles.

use serde::{Deserialize, Serialize};

/// A single swipeable candidate: one deployment-platform profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Textual glyph, always present as the fallback rendering.
    pub logo: String,
    /// Optional image logo; falls back to `logo` if it fails to load.
    pub logo_url: Option<String>,
    pub category: String,
}
