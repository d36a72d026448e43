//! Browser tests for the interactive components.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

use common::{mount_fixture, query, text, type_into, visit};
use moodbase_ui::components::{DistanceSlider, MobileNavigation, NewsletterSignup, SimpleMapComponent};
use moodbase_ui::content::articles::find_article;
use moodbase_ui::pages::ArticlePage;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================
// DistanceSlider
// ============================================

#[wasm_bindgen_test]
fn test_distance_slider_reports_only_real_changes() {
    let calls = Rc::new(RefCell::new(Vec::<u32>::new()));
    let seen = Rc::clone(&calls);
    let root = mount_fixture(move || {
        view! { <DistanceSlider initial=95 on_change=move |km: u32| seen.borrow_mut().push(km) /> }
    });

    let plus = query(&root, "button[aria-label='Increase distance']");
    let minus = query(&root, "button[aria-label='Decrease distance']");
    let input: HtmlInputElement = query(&root, "input#distance-km").unchecked_into();
    assert_eq!(input.value(), "95");

    plus.click();
    assert_eq!(input.value(), "100");
    assert_eq!(*calls.borrow(), vec![100]);

    // At the maximum the button is disabled and nothing is reported
    assert!(plus.has_attribute("disabled"));
    plus.click();
    assert_eq!(*calls.borrow(), vec![100]);

    // Re-entering the current value is accepted but is not a change
    type_into(&input, "100", "change");
    assert_eq!(*calls.borrow(), vec![100]);

    minus.click();
    assert_eq!(input.value(), "95");
    assert_eq!(*calls.borrow(), vec![100, 95]);
}

#[wasm_bindgen_test]
fn test_distance_slider_resets_rejected_input() {
    let calls = Rc::new(RefCell::new(Vec::<u32>::new()));
    let seen = Rc::clone(&calls);
    let root = mount_fixture(move || {
        view! { <DistanceSlider on_change=move |km: u32| seen.borrow_mut().push(km) /> }
    });

    let input: HtmlInputElement = query(&root, "input#distance-km").unchecked_into();
    assert_eq!(input.value(), "25");

    for rejected in ["42", "0", "105", "abc", ""] {
        type_into(&input, rejected, "change");
        assert_eq!(input.value(), "25", "input {:?}", rejected);
    }
    assert!(calls.borrow().is_empty());

    type_into(&input, "50", "change");
    assert_eq!(input.value(), "50");
    assert_eq!(*calls.borrow(), vec![50]);
}

// ============================================
// ArticlePage
// ============================================

fn mount_article_route() -> web_sys::Element {
    mount_fixture(|| {
        view! {
            <Router>
                <Routes>
                    <Route path="/blog/:id" view=ArticlePage />
                </Routes>
            </Router>
        }
    })
}

#[wasm_bindgen_test]
fn test_article_page_renders_the_matching_article() {
    let article = find_article(1).expect("bundled article 1");
    visit("/blog/1");
    let root = mount_article_route();

    let rendered = text(&root);
    assert!(rendered.contains(&article.title));
    assert!(rendered.contains(&article.author));
    assert!(rendered.contains(&article.date));
    assert!(!rendered.contains("Article not found"));
}

#[wasm_bindgen_test]
fn test_article_page_falls_back_for_unknown_ids() {
    for path in ["/blog/9999", "/blog/abc"] {
        visit(path);
        let root = mount_article_route();
        assert!(text(&root).contains("Article not found"), "{}", path);
        assert!(root.query_selector("article").unwrap().is_none(), "{}", path);
    }
}

// ============================================
// MobileNavigation
// ============================================

#[wasm_bindgen_test]
fn test_mobile_drawer_closes_on_backdrop_link_and_escape() {
    visit("/");
    let root = mount_fixture(|| view! { <Router><MobileNavigation /></Router> });

    let toggle = query(&root, "button[aria-label='Toggle navigation']");
    let is_open = || toggle.get_attribute("aria-expanded").as_deref() == Some("true");
    assert!(!is_open());

    toggle.click();
    assert!(is_open());
    query(&root, "div.fixed.inset-0").click();
    assert!(!is_open());
    assert!(root.query_selector("div.fixed.inset-0").unwrap().is_none());

    toggle.click();
    assert!(is_open());
    query(&root, "aside a[href='/about']").click();
    assert!(!is_open());

    toggle.click();
    assert!(is_open());
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window().dispatch_event(&escape).unwrap();
    assert!(!is_open());
}

// ============================================
// NewsletterSignup
// ============================================

fn subscribe(root: &web_sys::Element, email: &str) {
    let input: HtmlInputElement = query(root, "input[type='email']").unchecked_into();
    type_into(&input, email, "input");
    query(root, "button[type='submit']").click();
}

#[wasm_bindgen_test]
async fn test_newsletter_confirmation_resets_after_delay() {
    let root = mount_fixture(|| view! { <NewsletterSignup reset_after_ms=20 /> });

    subscribe(&root, "not-an-email");
    assert!(text(&root).contains("Please enter a valid email address."));

    subscribe(&root, "me@example.org");
    assert!(text(&root).contains("You're on the list."));

    TimeoutFuture::new(80).await;
    assert!(root.query_selector("form").unwrap().is_some());
    assert!(!text(&root).contains("You're on the list."));
}

#[wasm_bindgen_test]
async fn test_newsletter_timer_cancelled_on_unmount() {
    let slot = Rc::new(Cell::new(None::<WriteSignal<bool>>));
    let handle = Rc::clone(&slot);
    let root = mount_fixture(move || {
        let (visible, set_visible) = create_signal(true);
        handle.set(Some(set_visible));
        view! {
            <Show when=move || visible.get()>
                <NewsletterSignup reset_after_ms=20 />
            </Show>
        }
    });

    subscribe(&root, "me@example.org");
    assert!(text(&root).contains("You're on the list."));

    slot.get().expect("visibility signal").set(false);
    assert!(text(&root).trim().is_empty());

    // A pending reset must not bring the form back after disposal
    TimeoutFuture::new(80).await;
    assert!(root.query_selector("form").unwrap().is_none());
    assert!(text(&root).trim().is_empty());
}

// ============================================
// SimpleMapComponent
// ============================================

#[wasm_bindgen_test]
async fn test_map_without_widget_script_leaves_empty_container() {
    let root = mount_fixture(|| view! { <SimpleMapComponent resources=Signal::derive(Vec::new) /> });

    TimeoutFuture::new(100).await;
    let container = query(&root, "div[role='region']");
    assert_eq!(container.child_element_count(), 0);
}
