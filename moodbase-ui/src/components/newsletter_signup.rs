//! Newsletter Signup
//!
//! Email capture form. Validation is local; nothing is sent anywhere.

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long the confirmation stays before the form resets (ms)
pub const CONFIRMATION_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SignupState {
    Idle,
    Invalid,
    Subscribed,
}

#[component]
pub fn NewsletterSignup(
    #[prop(default = "Stay in the loop")]
    heading: &'static str,
    /// Delay before the confirmation turns back into the form (ms)
    #[prop(default = CONFIRMATION_MS)]
    reset_after_ms: u32,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (status, set_status) = create_signal(SignupState::Idle);
    let reset = store_value(None::<Timeout>);

    // Dropping a pending Timeout cancels it
    on_cleanup(move || {
        reset.try_update_value(|pending| pending.take());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !is_valid_email(&email.get()) {
            set_status.set(SignupState::Invalid);
            return;
        }

        set_status.set(SignupState::Subscribed);
        set_email.set(String::new());

        let timeout = Timeout::new(reset_after_ms, move || {
            set_status.try_set(SignupState::Idle);
        });
        reset.set_value(Some(timeout));
    };

    view! {
        <section class="rounded-2xl bg-[var(--mb-color-primary-dark)] text-white p-8 md:p-12">
            <h2 class="text-2xl font-bold">{heading}</h2>
            <p class="mt-2 text-white/80">
                "New articles and directory updates, once a month. No spam."
            </p>

            {move || match status.get() {
                SignupState::Subscribed => view! {
                    <p class="mt-6 font-semibold" role="status">"Thanks! You're on the list."</p>
                }.into_view(),
                state => view! {
                    <form on:submit=on_submit class="mt-6 flex flex-col sm:flex-row gap-3" novalidate=true>
                        <label for="newsletter-email" class="sr-only">"Email address"</label>
                        <input
                            id="newsletter-email"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_status.set(SignupState::Idle);
                            }
                            class="flex-1 rounded-lg px-4 py-3 text-[var(--mb-color-text)] focus:outline-none focus:ring-4 focus:ring-white/40"
                        />
                        <button
                            type="submit"
                            class="rounded-lg px-6 py-3 font-semibold bg-[var(--mb-color-accent)] hover:opacity-90 transition-opacity"
                        >
                            "Subscribe"
                        </button>
                    </form>
                    {(state == SignupState::Invalid).then(|| view! {
                        <p class="mt-2 text-sm text-red-200" role="alert">
                            "Please enter a valid email address."
                        </p>
                    })}
                }.into_view(),
            }}
        </section>
    }
}

/// Shape check only: `local@domain.tld`, no whitespace, one `@`.
fn is_valid_email(input: &str) -> bool {
    let input = input.trim();
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && tld.len() >= 2 && !name.starts_with('.'),
        None => false,
    }
}
