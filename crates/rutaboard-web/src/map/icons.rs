//! Font Awesome div-icons for the map markers.

use wasm_bindgen::JsValue;

use crate::leaflet::{div_icon, div_icon_options, DivIcon, DivIconOptions};

fn build(html: String, class_name: &str, size: f64) -> Result<DivIcon, JsValue> {
    let options = div_icon_options(&DivIconOptions {
        html,
        class_name: class_name.to_string(),
        icon_size: [size, size],
        icon_anchor: [size / 2.0, size],
    })?;
    div_icon(&options)
}

/// Client marker tinted by priority.
pub fn client(color: &str) -> Result<DivIcon, JsValue> {
    build(
        format!("<i class=\"fa-solid fa-location-dot\" style=\"color: {color}; font-size: 28px;\"></i>"),
        "marker-client",
        28.0,
    )
}

/// The central depot.
pub fn depot() -> Result<DivIcon, JsValue> {
    build(
        "<i class=\"fa-solid fa-warehouse\" style=\"color: #333333; font-size: 26px;\"></i>"
            .to_string(),
        "marker-depot",
        26.0,
    )
}

/// An intermediate delivery stop on a route.
pub fn stop(color: &str) -> Result<DivIcon, JsValue> {
    build(
        format!("<i class=\"fa-solid fa-store\" style=\"color: {color}; font-size: 22px;\"></i>"),
        "marker-stop",
        22.0,
    )
}

/// The final stop of a route, back at the depot.
pub fn finish(color: &str) -> Result<DivIcon, JsValue> {
    build(
        format!(
            "<i class=\"fa-solid fa-flag-checkered\" style=\"color: {color}; font-size: 22px;\"></i>"
        ),
        "marker-finish",
        22.0,
    )
}

/// The animated truck, rotated to its current heading. Font Awesome's truck
/// points east, so the CSS rotation is offset by -90 degrees.
pub fn vehicle(bearing_deg: f64) -> Result<DivIcon, JsValue> {
    build(
        format!(
            "<i class=\"fa-solid fa-truck\" style=\"color: #222222; font-size: 24px; transform: rotate({:.0}deg);\"></i>",
            bearing_deg - 90.0
        ),
        "marker-vehicle",
        24.0,
    )
}
