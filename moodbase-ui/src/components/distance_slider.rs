//! Distance Slider
//!
//! Stepper for the map search radius: minus/plus buttons around a numeric
//! field. Rejected input snaps the field back to the current value.

use leptos::*;

use crate::state::{DistanceStepper, DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM, STEP_KM};

#[component]
pub fn DistanceSlider(
    /// Starting radius in km
    #[prop(default = DEFAULT_RADIUS_KM)]
    initial: u32,
    /// Called with the new radius after every change
    #[prop(into)]
    on_change: Callback<u32>,
) -> impl IntoView {
    let stepper = create_rw_signal(DistanceStepper::new(initial));

    // Returns whether the stepper accepted the operation; `on_change` only
    // fires when the value actually moved
    let apply = move |op: &dyn Fn(&mut DistanceStepper) -> bool| {
        let before = stepper.get_untracked().value();
        let accepted = stepper.try_update(|s| op(s)).unwrap_or(false);
        let after = stepper.get_untracked().value();
        if after != before {
            on_change.call(after);
        }
        accepted
    };

    let on_input_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let accepted = apply(&|s: &mut DistanceStepper| s.set_from_input(&raw));
        if !accepted {
            // Same value means no reactive update, so reset the field by hand
            event_target::<web_sys::HtmlInputElement>(&ev)
                .set_value(&stepper.get_untracked().value().to_string());
        }
    };

    view! {
        <div class="flex flex-col gap-2">
            <label for="distance-km" class="text-sm font-medium text-[var(--mb-color-text-muted)]">
                "Search radius (km)"
            </label>
            <div class="inline-flex items-center rounded-xl border border-[var(--mb-color-border)] bg-[var(--mb-color-surface)] overflow-hidden w-fit">
                <button
                    type="button"
                    aria-label="Decrease distance"
                    class="px-4 py-2 text-xl disabled:opacity-40 hover:bg-[var(--mb-color-primary-light)]"
                    disabled=move || !stepper.with(|s| s.can_decrement())
                    on:click=move |_| {
                        apply(&|s: &mut DistanceStepper| s.decrement());
                    }
                >
                    "−"
                </button>
                <input
                    id="distance-km"
                    type="number"
                    inputmode="numeric"
                    min=MIN_RADIUS_KM
                    max=MAX_RADIUS_KM
                    step=STEP_KM
                    prop:value=move || stepper.with(|s| s.value()).to_string()
                    on:change=on_input_change
                    class="w-20 text-center py-2 border-x border-[var(--mb-color-border)] focus:outline-none"
                />
                <button
                    type="button"
                    aria-label="Increase distance"
                    class="px-4 py-2 text-xl disabled:opacity-40 hover:bg-[var(--mb-color-primary-light)]"
                    disabled=move || !stepper.with(|s| s.can_increment())
                    on:click=move |_| {
                        apply(&|s: &mut DistanceStepper| s.increment());
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
