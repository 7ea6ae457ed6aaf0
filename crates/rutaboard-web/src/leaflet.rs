//! Hand-written bindings for the Leaflet 1.9 globals loaded from index.html.
//!
//! Only the surface the dashboard uses is bound. The lowercase factory
//! functions carry `catch` so a failed creation (bad container id, Leaflet
//! script not loaded) surfaces as a `Result` instead of an unwind.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn map(container_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &LatLng, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &LatLngBounds);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds_with_options(this: &Map, bounds: &LatLngBounds, options: &JsValue);

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer, catch)]
    pub fn tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker, catch)]
    pub fn marker(position: &LatLng, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, position: &LatLng) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &DivIcon) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    #[derive(Debug, Clone)]
    pub type Polyline;

    #[wasm_bindgen(js_namespace = L, js_name = polyline, catch)]
    pub fn polyline(points: &js_sys::Array, options: &JsValue) -> Result<Polyline, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Polyline, map: &Map) -> Polyline;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Polyline, html: &str) -> Polyline;

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &Polyline) -> LatLngBounds;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Polyline);

    #[derive(Debug, Clone)]
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon, catch)]
    pub fn div_icon(options: &JsValue) -> Result<DivIcon, JsValue>;

    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    pub fn lat_lng(lat: f64, lng: f64) -> LatLng;

    #[derive(Debug, Clone)]
    pub type LatLngBounds;

    #[wasm_bindgen(method)]
    pub fn extend(this: &LatLngBounds, other: &LatLngBounds) -> LatLngBounds;
}

impl From<rutaboard_core::Coord> for LatLng {
    fn from(coord: rutaboard_core::Coord) -> Self {
        lat_lng(coord.lat, coord.lng)
    }
}

/// Options accepted by `L.tileLayer`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: String,
    pub max_zoom: f64,
}

/// Options accepted by `L.polyline`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineOptions {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

/// Options for `Map::fitBounds`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitBoundsOptions {
    pub padding: [f64; 2],
}

/// Options accepted by `L.divIcon`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub html: String,
    pub class_name: String,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
}

fn to_js<T: Serialize>(options: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(options).map_err(JsValue::from)
}

/// Builds the `{ icon }` options object for `L.marker`. The icon is a live
/// JS handle, so this goes through `Reflect` instead of serde.
pub fn marker_options(icon: &DivIcon) -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("icon"), icon)?;
    Ok(options.into())
}

pub fn tile_layer_options(options: &TileLayerOptions) -> Result<JsValue, JsValue> {
    to_js(options)
}

pub fn polyline_options(options: &PolylineOptions) -> Result<JsValue, JsValue> {
    to_js(options)
}

pub fn div_icon_options(options: &DivIconOptions) -> Result<JsValue, JsValue> {
    to_js(options)
}

pub fn fit_bounds_options(options: &FitBoundsOptions) -> Result<JsValue, JsValue> {
    to_js(options)
}

/// Converts a route path into the `L.latLng` array `L.polyline` expects.
pub fn lat_lng_array(points: &[rutaboard_core::Coord]) -> js_sys::Array {
    points
        .iter()
        .map(|&p| JsValue::from(LatLng::from(p)))
        .collect()
}
