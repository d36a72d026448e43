//! About Page

use leptos::*;
use leptos_router::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"About Moodbase"</h1>
            <p>
                "Moodbase started as a spreadsheet of local services shared between friends. "
                "It grew into a small directory that anyone can use without signing up."
            </p>
            <p>
                "Listings are checked by volunteers. If something is out of date, or you run a "
                "service that should be listed, we would love to hear from you."
            </p>
            <p class="text-[var(--mb-color-text-muted)]">
                "Moodbase is not a crisis service. If you need urgent help, contact your local "
                "emergency number."
            </p>
            <A href="/map" class="inline-block font-medium text-[var(--mb-color-primary)] hover:underline">
                "Browse the directory →"
            </A>
        </div>
    }
}
