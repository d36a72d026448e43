//! Mobile Navigation Component
//!
//! Hamburger button plus an off-canvas drawer with the same links as the
//! desktop bar. Closes on link selection, backdrop click, Escape, or any
//! route change.

use leptos::*;
use leptos_router::*;

use crate::content::{NavigationItem, NAV_ITEMS, SITE_NAME};

#[component]
pub fn MobileNavigation(
    #[prop(default = NAV_ITEMS)]
    items: &'static [NavigationItem],
) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let location = use_location();
    create_effect(move |_| {
        let _ = location.pathname.get();
        set_open.set(false);
    });

    view! {
        <div class="md:hidden">
            <button
                type="button"
                class="fixed top-3 right-4 z-40 p-2 rounded-lg bg-white shadow"
                aria-label="Toggle navigation"
                aria-controls="mobile-drawer"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "☰" }}
            </button>

            // Backdrop
            <Show when=move || open.get()>
                <div
                    class="fixed inset-0 z-30 bg-black/30"
                    on:click=move |_| set_open.set(false)
                />
            </Show>

            <aside
                id="mobile-drawer"
                class=move || format!(
                    "mb-drawer fixed top-0 right-0 z-30 h-full w-72 bg-[var(--mb-color-surface)] shadow-xl p-6 pt-16 {}",
                    if open.get() { "translate-x-0" } else { "translate-x-full" }
                )
                aria-hidden=move || (!open.get()).to_string()
            >
                <p class="text-lg font-bold text-[var(--mb-color-primary-dark)] mb-6">{SITE_NAME}</p>
                <ul class="space-y-2">
                    {items.iter().map(|item| view! {
                        <li on:click=move |_| set_open.set(false)>
                            <A
                                href=item.href
                                exact=true
                                class="block px-3 py-2 rounded-lg hover:bg-[var(--mb-color-primary-light)]"
                                active_class="bg-[var(--mb-color-primary-light)] font-semibold"
                            >
                                {item.text}
                            </A>
                        </li>
                    }).collect_view()}
                </ul>
            </aside>
        </div>
    }
}
