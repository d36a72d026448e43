//! App Root Component
//!
//! Routing and the page shell shared by every route.

use leptos::*;
use leptos_router::*;

use crate::components::{FloatingShapes, Footer, GradientBackground, MobileNavigation, Navigation};
use crate::design_tokens::TOKENS;
use crate::pages::{AboutPage, ArticlePage, BlogPage, HomePage, MapPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        // Token custom properties for every stylesheet and class below
        <style>{TOKENS.css_variables()}</style>

        <Router>
            <div class="relative min-h-screen flex flex-col">
                <GradientBackground />
                <FloatingShapes />

                <Navigation />
                <MobileNavigation />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/blog" view=BlogPage />
                        <Route path="/blog/:id" view=ArticlePage />
                        <Route path="/map" view=MapPage />
                        <Route path="/about" view=AboutPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-[var(--mb-color-text-muted)] mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 rounded-lg font-medium text-white bg-[var(--mb-color-primary)] hover:bg-[var(--mb-color-primary-dark)] transition-colors"
            >
                "Go to the home page"
            </A>
        </div>
    }
}
