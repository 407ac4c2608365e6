use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use flatmap_shared::markers::{
    derive_flat_markers, derive_user_marker, MarkerColor, MarkerViewModel, UserMarker,
};
use flatmap_shared::models::{Coordinates, Flat, MapConfig};
use flatmap_shared::overlay::{self, derive_overlay, GeoJson, OverlayData};
use flatmap_shared::routes::{flat_detail_path, path_only};
use flatmap_shared::viewport::{within_container, Viewport};
use futures::StreamExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::mapbox::{to_js, GeoJsonSourceSpec, MapOptions, MapboxMap};
use crate::Route;

const MAP_CONTAINER_ID: &str = "flat-map-canvas";

/// Markers this far outside the container are still rendered, so labels
/// slide in at the edges instead of popping.
const OFFSCREEN_MARGIN: f64 = 80.0;

const MARKER_BASE_CLASS: &str = "btn btn-sm rounded-3 p-1";

// ---------------------------------------------------------------------------
// Widget handle
// ---------------------------------------------------------------------------

/// Widget events, forwarded from JS callbacks into the component's coroutine.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MapEvent {
    Moved(Viewport),
    Resized(Option<(f64, f64)>),
    Loaded,
}

/// The live widget plus the JS closures registered on it. Dropping the handle
/// unregisters the closures and tears the widget down.
struct MapHandle {
    map: MapboxMap,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl MapHandle {
    fn listen(&mut self, event: &'static str, callback: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut()>::new(callback);
        self.map.on(event, closure.as_ref().unchecked_ref());
        self.listeners.push((event, closure));
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        for (event, closure) in &self.listeners {
            self.map.off(event, closure.as_ref().unchecked_ref());
        }
        self.map.remove();
    }
}

/// Size of the map container, if it is in the document.
fn container_size() -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

fn mount_map(
    config: &MapConfig,
    initial: Viewport,
    events: Coroutine<MapEvent>,
) -> Result<MapHandle, JsValue> {
    let options = to_js(&MapOptions::new(MAP_CONTAINER_ID, config, initial))?;
    let map = MapboxMap::new(&options)?;
    map.touch_zoom_rotate().disable_rotation();
    map.keyboard().disable_rotation();

    let mut handle = MapHandle {
        map: map.clone(),
        listeners: Vec::new(),
    };
    // One handler covers pan, zoom and programmatic moves.
    handle.listen("move", move || events.send(MapEvent::Moved(map.viewport())));
    handle.listen("resize", move || events.send(MapEvent::Resized(container_size())));
    handle.listen("load", move || {
        events.send(MapEvent::Resized(container_size()));
        events.send(MapEvent::Loaded);
    });
    events.send(MapEvent::Resized(container_size()));

    Ok(handle)
}

/// Bring the widget's overlay source and layer in line with `overlay`.
fn sync_overlay(map: &MapboxMap, overlay: Option<&OverlayData>) -> Result<(), JsValue> {
    match overlay {
        Some(overlay) => match map.get_source(overlay::SOURCE_ID) {
            Some(source) => source.set_data(&to_js(&overlay.geo_json)?),
            None => {
                map.add_source(
                    overlay::SOURCE_ID,
                    &to_js(&GeoJsonSourceSpec::new(&overlay.geo_json))?,
                )?;
                map.add_layer(&to_js(&overlay.layer)?)?;
            }
        },
        None => {
            if map.has_layer(overlay::LAYER_ID) {
                map.remove_layer(overlay::LAYER_ID)?;
            }
            if map.get_source(overlay::SOURCE_ID).is_some() {
                map.remove_source(overlay::SOURCE_ID)?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Marker placement (pure, testable)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct PlacedFlatMarker {
    id: String,
    price: f64,
    selected: bool,
    class: String,
    href: String,
    left: f64,
    top: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct PlacedUserMarker {
    key: String,
    left: f64,
    top: f64,
}

fn marker_class(color: MarkerColor) -> String {
    let variant = match color {
        MarkerColor::Blue => "btn-primary",
        MarkerColor::Yellow => "btn-warning",
    };
    format!("{} {}", MARKER_BASE_CLASS, variant)
}

fn place_flat_markers(
    markers: &[MarkerViewModel],
    viewport: &Viewport,
    size: (f64, f64),
    current_path: &str,
) -> Vec<PlacedFlatMarker> {
    let (width, height) = size;
    markers
        .iter()
        .filter_map(|marker| {
            let (left, top) = viewport.project(marker.lat, marker.long, width, height);
            if !within_container(left, top, width, height, OFFSCREEN_MARGIN) {
                return None;
            }
            Some(PlacedFlatMarker {
                id: marker.id.clone(),
                price: marker.price,
                selected: marker.is_selected(),
                class: marker_class(marker.color),
                href: flat_detail_path(current_path, &marker.id),
                left,
                top,
            })
        })
        .collect()
}

fn place_user_marker(
    marker: Option<&UserMarker>,
    viewport: &Viewport,
    size: (f64, f64),
) -> Option<PlacedUserMarker> {
    let marker = marker?;
    let (width, height) = size;
    let (left, top) = viewport.project(marker.lat, marker.long, width, height);
    within_container(left, top, width, height, OFFSCREEN_MARGIN).then(|| PlacedUserMarker {
        key: marker.key.clone(),
        left,
        top,
    })
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Interactive map of flats. The selected flat is drawn yellow and on top,
/// the user's position gets a "Me" badge, and `geo_json` (if any) is shown
/// as a translucent purple fill.
#[component]
pub fn MapViewer(
    config: ReadSignal<MapConfig>,
    #[props(!optional)] flats: ReadSignal<Option<Vec<Flat>>>,
    #[props(!optional)] selected_flat: ReadSignal<Option<Flat>>,
    #[props(!optional)] user_coordinates: ReadSignal<Option<Coordinates>>,
    #[props(!optional)] geo_json: ReadSignal<Option<GeoJson>>,
) -> Element {
    let route = use_route::<Route>();

    // Viewport is owned here; only widget gestures change it.
    let mut viewport = use_signal(Viewport::default);
    let mut size = use_signal(|| None::<(f64, f64)>);
    let mut style_loaded = use_signal(|| false);
    let mut handle = use_signal(|| None::<MapHandle>);

    // Three independent layers
    let markers = use_memo(move || {
        let flats = flats.read();
        let selected = selected_flat.read();
        derive_flat_markers((*flats).as_deref(), (*selected).as_ref())
    });
    let user_marker = use_memo(move || derive_user_marker(*user_coordinates.read()));
    let overlay_data = use_memo(move || derive_overlay((*geo_json.read()).as_ref()));

    let events = use_coroutine(move |mut rx: UnboundedReceiver<MapEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                MapEvent::Moved(vp) => viewport.set(vp),
                MapEvent::Resized(s) => size.set(s),
                MapEvent::Loaded => {
                    debug!("map style loaded");
                    style_loaded.set(true);
                }
            }
        }
    });

    // (Re)create the widget whenever the configuration changes.
    use_effect(move || {
        let config = config.read().clone();
        if !config.has_token() {
            warn!("map access token is empty; tiles will not load");
        }
        style_loaded.set(false);
        handle.set(None);
        match mount_map(&config, *viewport.peek(), events) {
            Ok(h) => handle.set(Some(h)),
            Err(e) => warn!("could not create map widget: {:?}", e),
        }
    });

    use_effect(move || {
        let loaded = *style_loaded.read();
        let overlay = overlay_data.read();
        let handle = handle.read();
        let Some(h) = (*handle).as_ref() else {
            return;
        };
        if !loaded {
            return;
        }
        if let Err(e) = sync_overlay(&h.map, (*overlay).as_ref()) {
            warn!("could not update overlay layer: {:?}", e);
        }
    });

    let current_path = route.to_string();
    let current_path = path_only(&current_path);
    let vp = *viewport.read();
    let (placed_flats, placed_user) = match *size.read() {
        Some(s) => (
            place_flat_markers(&markers.read(), &vp, s, current_path),
            place_user_marker((*user_marker.read()).as_ref(), &vp, s),
        ),
        None => (Vec::new(), None),
    };

    rsx! {
        div { class: "map-container",
            div { id: MAP_CONTAINER_ID, class: "map-canvas" }
            div { class: "map-markers",
                for m in placed_flats {
                    div {
                        key: "{m.id}",
                        class: if m.selected { "map-marker map-marker-selected" } else { "map-marker" },
                        style: "left: {m.left}px; top: {m.top}px;",
                        Link { to: m.href.clone(), class: m.class.clone(), "€{m.price}" }
                    }
                }
                if let Some(me) = placed_user {
                    div {
                        key: "{me.key}",
                        class: "map-marker map-marker-user",
                        style: "left: {me.left}px; top: {me.top}px;",
                        button { class: "{MARKER_BASE_CLASS} btn-success", "Me" }
                    }
                }
            }
        }
    }
}
