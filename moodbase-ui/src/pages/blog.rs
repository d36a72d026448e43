//! Blog Page
//!
//! All posts as cards, optionally narrowed by `?tag=`.

use leptos::*;
use leptos_router::*;

use crate::components::BlogPostCard;
use crate::content::{all_articles, same_tag, Article};

#[component]
pub fn BlogPage() -> impl IntoView {
    let query = use_query_map();
    let tag = create_memo(move |_| {
        query.with(|q| q.get("tag").map(|t| t.trim().to_string()).filter(|t| !t.is_empty()))
    });

    let articles = create_memo(move |_| filter_by_tag(all_articles(), tag.get().as_deref()));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Blog"</h1>
                <p class="text-[var(--mb-color-text-muted)] mt-1">
                    "Guides and stories about looking after your mental health"
                </p>
            </div>

            <div class="flex flex-wrap gap-2">
                <TagChip label="All" href="/blog".to_string() active=Signal::derive(move || tag.get().is_none()) />
                {all_tags().into_iter().map(|t| {
                    let href = format!("/blog?tag={}", String::from(js_sys::encode_uri_component(&t)));
                    let name = t.clone();
                    let active = Signal::derive(move || {
                        tag.get().is_some_and(|current| same_tag(&current, &name))
                    });
                    view! { <TagChip label=t href=href active=active /> }
                }).collect_view()}
            </div>

            {move || {
                let list = articles.get();
                if list.is_empty() {
                    view! {
                        <p class="text-[var(--mb-color-text-muted)]">"No posts with that tag yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            {list.into_iter().map(|article| view! { <BlogPostCard article=article /> }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn TagChip(
    #[prop(into)]
    label: String,
    href: String,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            class=move || {
                let base = "px-3 py-1 rounded-full text-sm transition-colors";
                if active.get() {
                    format!("{} bg-[var(--mb-color-primary)] text-white", base)
                } else {
                    format!("{} bg-[var(--mb-color-surface)] border border-[var(--mb-color-border)] hover:bg-[var(--mb-color-primary-light)]", base)
                }
            }
        >
            {label}
        </A>
    }
}

fn filter_by_tag(articles: &'static [Article], tag: Option<&str>) -> Vec<&'static Article> {
    articles
        .iter()
        .filter(|a| tag.map_or(true, |t| a.has_tag(t)))
        .collect()
}

/// Distinct tags in first-seen order, compared case-insensitively
fn all_tags() -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in all_articles().iter().flat_map(|a| a.tags.iter()) {
        if !tags.iter().any(|t| same_tag(t, tag)) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_tag() {
        assert_eq!(filter_by_tag(all_articles(), None).len(), all_articles().len());
        assert!(filter_by_tag(all_articles(), Some("no-such-tag")).is_empty());

        let tag = all_articles()[0].tags[0].to_uppercase();
        let filtered = filter_by_tag(all_articles(), Some(&tag));
        assert!(filtered.iter().any(|a| a.id == all_articles()[0].id));
    }

    #[test]
    fn test_all_tags_are_distinct() {
        let tags = all_tags();
        for (i, a) in tags.iter().enumerate() {
            assert!(tags[i + 1..].iter().all(|b| !same_tag(a, b)));
        }
    }
}
