//! Navigation Component
//!
//! Desktop header bar with logo and links. Hidden below the `md`
//! breakpoint, where [`MobileNavigation`](super::MobileNavigation) takes over.

use leptos::*;
use leptos_router::*;

use crate::content::{NavigationItem, NAV_ITEMS, SITE_NAME};

/// Navigation header component
#[component]
pub fn Navigation(
    /// Links to show, in order
    #[prop(default = NAV_ITEMS)]
    items: &'static [NavigationItem],
) -> impl IntoView {
    view! {
        <nav class="relative z-20 bg-white/80 backdrop-blur border-b border-[var(--mb-color-border)]">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🌿"</span>
                        <span class="text-xl font-bold text-[var(--mb-color-primary-dark)]">{SITE_NAME}</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        {items.iter().map(|item| view! { <NavLink item=*item /> }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(item: NavigationItem) -> impl IntoView {
    view! {
        <A
            href=item.href
            exact=true
            class="px-4 py-2 rounded-lg text-[var(--mb-color-text-muted)] hover:text-[var(--mb-color-text)] hover:bg-[var(--mb-color-primary-light)] transition-colors"
            active_class="bg-[var(--mb-color-primary-light)] text-[var(--mb-color-primary-dark)]"
        >
            {item.text}
        </A>
    }
}
