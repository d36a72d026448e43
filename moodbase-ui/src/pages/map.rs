//! Map Page
//!
//! Distance stepper, map widget and the list of resources inside the
//! chosen radius of the map center.

use leptos::*;

use crate::components::{DistanceSlider, SimpleMapComponent};
use crate::content::{all_resources, resources_within, NearbyResource, MAP_SETTINGS};
use crate::state::DEFAULT_RADIUS_KM;

#[component]
pub fn MapPage() -> impl IntoView {
    let (radius, set_radius) = create_signal(DEFAULT_RADIUS_KM);

    let nearby = create_memo(move |_| {
        resources_within(all_resources(), MAP_SETTINGS.center_lat_lng(), radius.get())
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Find support"</h1>
                <p class="text-[var(--mb-color-text-muted)] mt-1">
                    "Services and groups around central London"
                </p>
            </div>

            <div class="flex flex-col md:flex-row md:items-end justify-between gap-4">
                <DistanceSlider initial=DEFAULT_RADIUS_KM on_change=move |km| set_radius.set(km) />
                <p class="text-sm text-[var(--mb-color-text-muted)]" aria-live="polite">
                    {move || summary(nearby.with(Vec::len), radius.get())}
                </p>
            </div>

            <SimpleMapComponent resources=Signal::derive(move || nearby.get()) />

            <ul class="grid gap-4 md:grid-cols-2">
                {move || nearby.get().into_iter().map(|entry| view! { <ResourceItem entry=entry /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ResourceItem(entry: NearbyResource) -> impl IntoView {
    let NearbyResource { resource, distance_km } = entry;

    view! {
        <li class="rounded-xl p-4 bg-[var(--mb-color-surface)] border border-[var(--mb-color-border)]">
            <div class="flex items-start justify-between gap-2">
                <h3 class="font-semibold">{resource.name}</h3>
                <span class="text-xs text-[var(--mb-color-text-muted)] whitespace-nowrap">
                    {format!("{:.1} km", distance_km)}
                </span>
            </div>
            <p class="text-xs uppercase tracking-wide text-[var(--mb-color-primary-dark)] mt-1">{resource.category}</p>
            <p class="text-sm mt-2">{resource.address}</p>
            {resource.phone.map(|phone| view! {
                <p class="text-sm mt-1">
                    <a href=format!("tel:{}", phone.replace(' ', "")) class="hover:underline">{phone}</a>
                </p>
            })}
            {resource.url.map(|url| view! {
                <a href=url target="_blank" rel="noopener" class="text-sm text-[var(--mb-color-primary)] hover:underline">
                    "Website →"
                </a>
            })}
        </li>
    }
}

fn summary(count: usize, radius_km: u32) -> String {
    match count {
        0 => format!("No services within {} km", radius_km),
        1 => format!("1 service within {} km", radius_km),
        n => format!("{} services within {} km", n, radius_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        assert_eq!(summary(0, 5), "No services within 5 km");
        assert_eq!(summary(1, 10), "1 service within 10 km");
        assert_eq!(summary(4, 100), "4 services within 100 km");
    }
}
