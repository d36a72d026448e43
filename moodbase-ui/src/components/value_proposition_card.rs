//! Value Proposition Card

use leptos::*;

use crate::design_tokens::TOKENS;

#[component]
pub fn ValuePropositionCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="bg-[var(--mb-color-surface)] rounded-2xl p-6 border border-[var(--mb-color-border)] hover:-translate-y-1 transition-transform"
            style=format!("box-shadow: {}", TOKENS.shadows.md)
        >
            <div class="text-3xl mb-3" aria-hidden="true">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-[var(--mb-color-text-muted)]">{description}</p>
        </div>
    }
}
