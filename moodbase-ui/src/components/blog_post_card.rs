//! Blog Post Card
//!
//! Preview of an article linking to its full page.

use leptos::*;
use leptos_router::*;

use crate::content::{excerpt, Article};
use crate::design_tokens::TOKENS;

/// Tags shown on a card
const MAX_CARD_TAGS: usize = 3;

#[component]
pub fn BlogPostCard(article: &'static Article) -> impl IntoView {
    let href = format!("/blog/{}", article.id);

    view! {
        <article
            class="flex flex-col overflow-hidden rounded-2xl bg-[var(--mb-color-surface)] border border-[var(--mb-color-border)]"
            style=format!("box-shadow: {}", TOKENS.shadows.sm)
        >
            <A href=href.clone()>
                <img
                    src=article.image_url.as_str()
                    alt=article.title.as_str()
                    loading="lazy"
                    class="h-48 w-full object-cover bg-[var(--mb-color-primary-light)]"
                />
            </A>
            <div class="flex flex-col flex-1 p-5">
                <div class="flex flex-wrap gap-2 mb-3">
                    {article.tags.iter().take(MAX_CARD_TAGS).map(|tag| view! {
                        <A
                            href=tag_href(tag)
                            class="text-xs px-2 py-1 rounded-full bg-[var(--mb-color-primary-light)] text-[var(--mb-color-primary-dark)]"
                        >
                            {tag.as_str()}
                        </A>
                    }).collect_view()}
                </div>
                <h3 class="text-lg font-semibold leading-snug">
                    <A href=href.clone() class="hover:underline">{article.title.as_str()}</A>
                </h3>
                <p class="text-sm text-[var(--mb-color-text-muted)] mt-1">
                    {article.author.as_str()} " · " {article.date.as_str()}
                </p>
                <p class="mt-3 flex-1">{excerpt(&article.content)}</p>
                <A href=href class="mt-4 font-medium text-[var(--mb-color-primary)] hover:underline">
                    "Read more →"
                </A>
            </div>
        </article>
    }
}

fn tag_href(tag: &str) -> String {
    format!("/blog?tag={}", String::from(js_sys::encode_uri_component(tag)))
}
