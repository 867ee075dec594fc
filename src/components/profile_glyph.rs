//! Profile Glyph Component
//!
//! Image logo with textual-glyph fallback when the asset fails to load.

use leptos::prelude::*;
use log::warn;

use crate::models::Profile;

#[component]
pub fn ProfileGlyph(profile: Profile) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);

    let glyph = profile.logo.clone();
    let name = profile.name.clone();
    let logo_url = profile.logo_url.clone();

    view! {
        {move || {
            let glyph = glyph.clone();
            match logo_url.clone() {
                Some(url) if !image_failed.get() => {
                    let name = name.clone();
                    view! {
                        <img
                            class="profile-logo"
                            src=url
                            alt=format!("{} logo", name)
                            on:error=move |_| {
                                warn!("logo failed to load for {}, using glyph", name);
                                set_image_failed.set(true);
                            }
                        />
                    }
                    .into_any()
                }
                _ => view! { <span class="profile-glyph">{glyph}</span> }.into_any(),
            }
        }}
    }
}
