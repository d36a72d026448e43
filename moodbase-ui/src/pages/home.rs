//! Home Page
//!
//! Hero, value propositions, latest posts and the newsletter form.

use leptos::*;
use leptos_router::*;

use crate::components::{BlogPostCard, NewsletterSignup, ValuePropositionCard};
use crate::content::{all_articles, Article, VALUE_PROPOSITIONS};

/// Posts shown in the "latest" strip
const LATEST_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="space-y-20">
            // Hero
            <section class="text-center pt-12 md:pt-20">
                <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight text-[var(--mb-color-primary-dark)]">
                    "Support is closer than you think"
                </h1>
                <p class="mt-6 max-w-2xl mx-auto text-lg text-[var(--mb-color-text-muted)]">
                    "Moodbase is a free directory of counsellors, peer groups and crisis services, "
                    "with plain-language guides to help you take the next step."
                </p>
                <div class="mt-10 flex flex-col sm:flex-row justify-center gap-4">
                    <A
                        href="/map"
                        class="px-8 py-3 rounded-xl font-semibold text-white bg-[var(--mb-color-primary)] hover:bg-[var(--mb-color-primary-dark)] transition-colors"
                    >
                        "Find support near you"
                    </A>
                    <A
                        href="/blog"
                        class="px-8 py-3 rounded-xl font-semibold border border-[var(--mb-color-border)] bg-[var(--mb-color-surface)] hover:bg-[var(--mb-color-primary-light)] transition-colors"
                    >
                        "Read the blog"
                    </A>
                </div>
            </section>

            <section class="grid gap-6 md:grid-cols-3">
                {VALUE_PROPOSITIONS.iter().map(|vp| view! {
                    <ValuePropositionCard icon=vp.icon title=vp.title description=vp.description />
                }).collect_view()}
            </section>

            <section>
                <div class="flex items-end justify-between mb-6">
                    <h2 class="text-2xl font-bold">"Latest from the blog"</h2>
                    <A href="/blog" class="text-[var(--mb-color-primary)] hover:underline">"All posts →"</A>
                </div>
                <div class="grid gap-6 md:grid-cols-3">
                    {latest_articles(LATEST_COUNT)
                        .into_iter()
                        .map(|article| view! { <BlogPostCard article=article /> })
                        .collect_view()}
                </div>
            </section>

            <NewsletterSignup />
        </div>
    }
}

/// Newest articles first; ISO dates sort correctly as strings
fn latest_articles(count: usize) -> Vec<&'static Article> {
    let mut articles: Vec<&'static Article> = all_articles().iter().collect();
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles.truncate(count);
    articles
}
