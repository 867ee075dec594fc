//! Swipe Card Component
//!
//! The interactive top card: follows the active drag with a translate/rotate
//! transform, shows the match/pass overlay past the dead-zone, and hands
//! pointer-downs to the gesture interpreter.

use leptos::prelude::*;
use leptos_swipe::{make_on_pointerdown, DragSession, SwipePhase};

use crate::components::ProfileGlyph;
use crate::context::AppContext;
use crate::models::Profile;

/// Static card content, shared by the interactive card and the stack preview.
#[component]
pub fn CardFace(profile: Profile) -> impl IntoView {
    let pros = profile.pros.clone();
    let cons = profile.cons.clone();

    view! {
        <div class="card-face">
            <header class="card-header">
                <ProfileGlyph profile=profile.clone() />
                <div class="card-title">
                    <h2>{profile.name.clone()}</h2>
                    <p class="card-category">{profile.category.clone()}</p>
                </div>
            </header>
            <p class="card-tagline">{profile.tagline.clone()}</p>
            <div class="card-body">
                <p class="card-description">{profile.description.clone()}</p>
                <div class="card-columns">
                    <div class="card-pros">
                        <h4>"Pros"</h4>
                        <ul>
                            {pros.into_iter().map(|pro| view! { <li>"✓ " {pro}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div class="card-cons">
                        <h4>"Cons"</h4>
                        <ul>
                            {cons.into_iter().map(|con| view! { <li>"✗ " {con}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// The draggable card for the profile at the top of the deck.
#[component]
pub fn SwipeCard(profile: Profile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config;
    let phase = ctx.swipe.phase_read;

    let card_style = move || match phase.get() {
        SwipePhase::Dragging(session) | SwipePhase::Settling(session) => format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: none;",
            session.offset.x,
            session.offset.y,
            session.rotation_deg(&config)
        ),
        SwipePhase::Idle | SwipePhase::SnapBack => {
            "transform: translate(0px, 0px) rotate(0deg); \
             transition: transform 0.3s ease-out;"
                .to_string()
        }
    };

    let overlay = move || match phase.get() {
        SwipePhase::Dragging(session) if session.overlay_visible(&config) => Some(session),
        _ => None,
    };

    view! {
        <div
            class="swipe-card"
            style=card_style
            on:pointerdown=make_on_pointerdown(ctx.swipe)
        >
            {move || overlay().map(|session: DragSession| {
                let class = if session.leaning_right() {
                    "card-overlay match"
                } else {
                    "card-overlay pass"
                };
                let label = if session.leaning_right() { "🎉 MATCH! 🎉" } else { "💔 PASS" };
                view! {
                    <div
                        class=class
                        style=format!("opacity: {:.2};", session.overlay_opacity(&config))
                    >
                        {label}
                    </div>
                }
            })}
            <CardFace profile=profile.clone() />
        </div>
    }
}
