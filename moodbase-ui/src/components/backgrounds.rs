//! Background Decorations
//!
//! Purely decorative, absolutely positioned layers. Both are `aria-hidden`
//! and sit behind the page content.

use leptos::*;

use crate::design_tokens::TOKENS;

/// Slow-shifting gradient wash
#[component]
pub fn GradientBackground() -> impl IntoView {
    view! {
        <div class="mb-gradient fixed inset-0 -z-10 pointer-events-none" aria-hidden="true" />
    }
}

/// A floating blob: (color, size, top, left)
type Shape = (&'static str, &'static str, &'static str, &'static str);

const SHAPES: [Shape; 4] = [
    (TOKENS.colors.primary, "22rem", "-6rem", "-4rem"),
    (TOKENS.colors.secondary, "18rem", "30%", "70%"),
    (TOKENS.colors.accent, "14rem", "65%", "10%"),
    (TOKENS.colors.primary_light, "26rem", "80%", "60%"),
];

/// Animated blurred blobs tinted with the token palette
#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            {SHAPES.iter().map(|(color, size, top, left)| view! {
                <div
                    class="mb-blob"
                    style=format!(
                        "background: {}; width: {size}; height: {size}; top: {}; left: {};",
                        color, top, left
                    )
                />
            }).collect_view()}
        </div>
    }
}
