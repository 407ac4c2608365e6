//! Bindings to the `mapboxgl` global loaded from `index.html`.
//!
//! Only the handful of calls the viewer needs. Options are plain serde
//! structs turned into JS objects with `to_js`.

use flatmap_shared::models::MapConfig;
use flatmap_shared::overlay::GeoJson;
use flatmap_shared::viewport::Viewport;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, catch, js_namespace = mapboxgl, js_class = "Map")]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &MapboxMap) -> LngLat;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &MapboxMap) -> f64;

    #[wasm_bindgen(method, getter, js_name = touchZoomRotate)]
    pub fn touch_zoom_rotate(this: &MapboxMap) -> TouchZoomRotateHandler;

    #[wasm_bindgen(method, getter)]
    pub fn keyboard(this: &MapboxMap) -> KeyboardHandler;

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MapboxMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &MapboxMap, id: &str) -> Option<GeoJsonSource>;

    #[wasm_bindgen(method, catch, js_name = removeSource)]
    pub fn remove_source(this: &MapboxMap, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getLayer)]
    pub fn get_layer(this: &MapboxMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = removeLayer)]
    pub fn remove_layer(this: &MapboxMap, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = LngLat)]
    pub type LngLat;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LngLat) -> f64;

    pub type TouchZoomRotateHandler;

    #[wasm_bindgen(method, js_name = disableRotation)]
    pub fn disable_rotation(this: &TouchZoomRotateHandler);

    pub type KeyboardHandler;

    /// Turns off Shift+arrow bearing and pitch changes; panning and zoom stay.
    #[wasm_bindgen(method, js_name = disableRotation)]
    pub fn disable_rotation(this: &KeyboardHandler);

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = GeoJSONSource)]
    pub type GeoJsonSource;

    #[wasm_bindgen(method, js_name = setData)]
    pub fn set_data(this: &GeoJsonSource, data: &JsValue);
}

impl MapboxMap {
    /// Center and zoom as currently reported by the widget.
    pub fn viewport(&self) -> Viewport {
        let center = self.get_center();
        Viewport {
            latitude: center.lat(),
            longitude: center.lng(),
            zoom: self.get_zoom(),
        }
    }

    pub fn has_layer(&self, id: &str) -> bool {
        let layer = self.get_layer(id);
        !(layer.is_undefined() || layer.is_null())
    }
}

/// Constructor options for `mapboxgl.Map`.
///
/// Rotation and pitch stay off so the widget's projection matches
/// `Viewport::project`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions<'a> {
    pub container: &'a str,
    pub style: &'a str,
    pub access_token: &'a str,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub drag_rotate: bool,
    pub pitch_with_rotate: bool,
    pub touch_pitch: bool,
    pub max_pitch: f64,
}

impl<'a> MapOptions<'a> {
    pub fn new(container: &'a str, config: &'a MapConfig, viewport: Viewport) -> Self {
        Self {
            container,
            style: &config.style_url,
            access_token: &config.access_token,
            center: [viewport.longitude, viewport.latitude],
            zoom: viewport.zoom,
            drag_rotate: false,
            pitch_with_rotate: false,
            touch_pitch: false,
            max_pitch: 0.0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeoJsonSourceSpec<'a> {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub data: &'a GeoJson,
}

impl<'a> GeoJsonSourceSpec<'a> {
    pub fn new(data: &'a GeoJson) -> Self {
        Self {
            source_type: "geojson",
            data,
        }
    }
}

/// Serialize into a plain JS object (not a `Map`), which is what the widget reads.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
