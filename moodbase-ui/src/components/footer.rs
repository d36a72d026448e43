//! Footer Component

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

use crate::content::{NAV_ITEMS, SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative z-10 border-t border-[var(--mb-color-border)] bg-[var(--mb-color-surface)] mt-16">
            <div class="container mx-auto px-4 py-10 grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <p class="font-bold text-[var(--mb-color-primary-dark)]">{SITE_NAME}</p>
                    <p class="text-[var(--mb-color-text-muted)] mt-2">
                        "A free directory of mental-health support and resources."
                    </p>
                </div>

                <ul class="space-y-1">
                    {NAV_ITEMS.iter().map(|item| view! {
                        <li><A href=item.href class="hover:underline">{item.text}</A></li>
                    }).collect_view()}
                </ul>

                <div class="rounded-lg p-4 bg-[var(--mb-color-primary-light)]">
                    <p class="font-semibold">"In crisis?"</p>
                    <p class="mt-1">
                        "If you or someone else is in immediate danger, call your local emergency number. "
                        "In the UK you can call Samaritans free on 116 123, any time."
                    </p>
                </div>
            </div>
            <p class="text-center text-xs text-[var(--mb-color-text-muted)] pb-6">
                {format!("© {} {}", year, SITE_NAME)}
            </p>
        </footer>
    }
}
