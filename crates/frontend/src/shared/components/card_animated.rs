//! CardAnimated: Thaw Card wrapper with an entrance animation.
//!
//! The animation lives in `static/styles.css` (`@keyframes card-appear`).
//! The service grid passes `delay_ms = index * STAGGER_MS` so tiles appear
//! one after another.

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards.
pub const STAGGER_MS: u32 = 60;
/// Upper bound for the stagger delay.
pub const MAX_STAGGER_MS: u32 = 480;

/// Animation delay for the card at `index`.
pub fn stagger_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(STAGGER_MS).min(MAX_STAGGER_MS)
}

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
