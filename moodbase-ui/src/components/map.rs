//! Map Component
//!
//! Thin wrapper around the Mapbox GL JS widget loaded by `index.html`.
//! The widget is created once with fixed center and zoom; markers are
//! redrawn whenever the resource list changes after the widget's `load`
//! event. Initialization failures are logged to the console and leave an
//! empty container.

use js_sys::{Array, Object, Reflect};
use leptos::*;
use wasm_bindgen::prelude::*;

use crate::content::{MapSettings, NearbyResource, MAP_SETTINGS};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Debug, Clone)]
    type MapboxMap;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Map")]
    fn new(options: &Object) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &MapboxMap, event: &str, handler: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method)]
    fn remove(this: &MapboxMap);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Debug, Clone)]
    type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new(options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &MapboxMap) -> Marker;

    #[wasm_bindgen(method)]
    fn remove(this: &Marker);

    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Debug, Clone)]
    type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new(options: &Object) -> Popup;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &Popup, text: &str) -> Popup;
}

/// Map display with a marker per resource
#[component]
pub fn SimpleMapComponent(
    /// Resources to mark on the map
    #[prop(into)]
    resources: Signal<Vec<NearbyResource>>,
    #[prop(default = MAP_SETTINGS)]
    settings: MapSettings,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let map = store_value(None::<MapboxMap>);
    let markers = store_value(Vec::<Marker>::new());
    let (loaded, set_loaded) = create_signal(false);

    container.on_load(move |el| {
        let element: web_sys::HtmlElement = (*el).clone().into();

        // Wait until the container is attached and sized
        request_animation_frame(move || match init_map(&element, &settings) {
            Ok(instance) => {
                let on_load = Closure::<dyn FnMut()>::new(move || set_loaded.set(true));
                instance.on("load", &on_load);
                on_load.forget();
                map.set_value(Some(instance));
            }
            Err(e) => {
                web_sys::console::error_2(&"Map initialization failed:".into(), &e);
            }
        });
    });

    create_effect(move |_| {
        let nearby = resources.get();
        if !loaded.get() {
            return;
        }

        map.with_value(|instance| {
            let Some(instance) = instance else { return };
            markers.update_value(|list| {
                for marker in list.drain(..) {
                    marker.remove();
                }
                for entry in &nearby {
                    match add_marker(instance, entry) {
                        Ok(marker) => list.push(marker),
                        Err(e) => web_sys::console::error_2(
                            &format!("Failed to add marker for resource {}:", entry.resource.id).into(),
                            &e,
                        ),
                    }
                }
            });
        });
    });

    on_cleanup(move || {
        markers.try_update_value(|list| list.drain(..).for_each(|m| m.remove()));
        map.try_update_value(|instance| {
            if let Some(instance) = instance.take() {
                instance.remove();
            }
        });
    });

    view! {
        <div
            node_ref=container
            class="mb-map w-full h-[28rem] bg-[var(--mb-color-primary-light)]"
            role="region"
            aria-label="Map of nearby support"
        />
    }
}

fn init_map(container: &web_sys::HtmlElement, settings: &MapSettings) -> Result<MapboxMap, JsValue> {
    let mapboxgl = Reflect::get(&js_sys::global(), &"mapboxgl".into())?;
    if mapboxgl.is_undefined() {
        return Err("mapboxgl script is not loaded".into());
    }
    Reflect::set(&mapboxgl, &"accessToken".into(), &settings.access_token.into())?;

    let options = Object::new();
    Reflect::set(&options, &"container".into(), container.as_ref())?;
    Reflect::set(&options, &"style".into(), &settings.style.into())?;
    Reflect::set(&options, &"center".into(), &lng_lat(settings.center[0], settings.center[1]))?;
    Reflect::set(&options, &"zoom".into(), &settings.zoom.into())?;

    MapboxMap::new(&options)
}

fn add_marker(map: &MapboxMap, entry: &NearbyResource) -> Result<Marker, JsValue> {
    let popup_options = Object::new();
    Reflect::set(&popup_options, &"offset".into(), &JsValue::from_f64(25.0))?;
    let popup = Popup::new(&popup_options).set_text(&format!(
        "{} · {:.1} km",
        entry.resource.name, entry.distance_km
    ));

    let marker_options = Object::new();
    Reflect::set(
        &marker_options,
        &"color".into(),
        &crate::design_tokens::TOKENS.colors.primary.into(),
    )?;

    Ok(Marker::new(&marker_options)
        .set_lng_lat(&lng_lat(entry.resource.lng, entry.resource.lat))
        .set_popup(&popup)
        .add_to(map))
}

fn lng_lat(lng: f64, lat: f64) -> Array {
    Array::of2(&lng.into(), &lat.into())
}
