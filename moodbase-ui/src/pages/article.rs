//! Article Page
//!
//! Resolves `/blog/:id` against the embedded article list and renders the
//! full post, or a not-found fallback when the id is unknown or malformed.

use leptos::*;
use leptos_router::*;

use crate::content::{paragraphs, resolve_article, Article};

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article = create_memo(move |_| params.with(|p| resolve_article(p.get("id").map(String::as_str))));

    view! {
        {move || match article.get() {
            Some(article) => view! { <ArticleView article=article /> }.into_view(),
            None => view! { <ArticleNotFound /> }.into_view(),
        }}
    }
}

#[component]
fn ArticleView(article: &'static Article) -> impl IntoView {
    view! {
        <article class="max-w-3xl mx-auto">
            <A href="/blog" class="text-sm text-[var(--mb-color-primary)] hover:underline">"← All posts"</A>

            <header class="mt-6">
                <div class="flex flex-wrap gap-2 mb-4">
                    {article.tags.iter().map(|tag| view! {
                        <span class="text-xs px-2 py-1 rounded-full bg-[var(--mb-color-primary-light)] text-[var(--mb-color-primary-dark)]">
                            {tag.as_str()}
                        </span>
                    }).collect_view()}
                </div>
                <h1 class="text-3xl md:text-5xl font-extrabold leading-tight">{article.title.as_str()}</h1>
                <p class="mt-4 text-[var(--mb-color-text-muted)]">
                    <span class="font-medium">{article.author.as_str()}</span>
                    " · "
                    <time datetime=article.date.as_str()>{article.date.as_str()}</time>
                </p>
            </header>

            <img
                src=article.image_url.as_str()
                alt=article.title.as_str()
                class="mt-8 w-full rounded-2xl object-cover max-h-[28rem] bg-[var(--mb-color-primary-light)]"
            />

            <div class="mt-8 space-y-5 text-lg leading-relaxed">
                {paragraphs(&article.content)
                    .into_iter()
                    .map(|p| view! { <p>{p}</p> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn ArticleNotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center">
            <div class="text-6xl mb-4">"📄"</div>
            <h1 class="text-3xl font-bold mb-2">"Article not found"</h1>
            <p class="text-[var(--mb-color-text-muted)] mb-6">
                "We couldn't find that post. It may have moved or been removed."
            </p>
            <A
                href="/blog"
                class="px-6 py-3 rounded-lg font-medium text-white bg-[var(--mb-color-primary)] hover:bg-[var(--mb-color-primary-dark)] transition-colors"
            >
                "Back to the blog"
            </A>
        </div>
    }
}
