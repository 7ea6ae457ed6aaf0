//! Owner of the live Leaflet map and everything drawn on it.
//!
//! `MapSession` is the single handle the planner page keeps for its map.
//! Layer replacement is by move: the new registry consumes the old one so
//! stale JS handles cannot outlive their removal from the map. A Leaflet
//! failure for one client or one route is logged and skips only that
//! entity; the rest of the batch still renders.

use std::collections::HashMap;

use rutaboard_core::models::{DEFAULT_ZOOM, LIMA_CENTER};
use rutaboard_core::{format, palette, Client, RouteResult};
use wasm_bindgen::JsValue;

use crate::leaflet::{
    self, fit_bounds_options, lat_lng_array, marker_options, polyline_options, tile_layer_options,
    FitBoundsOptions, Marker, Polyline, PolylineOptions, TileLayerOptions,
};
use crate::map::animate::RouteAnimation;
use crate::map::icons;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const FIT_PADDING_PX: f64 = 40.0;

/// Builds a marker that is not yet on the map. Creation is the only
/// fallible part; callers add the marker only after it exists, so a
/// rejected factory call never leaves a stray layer behind.
fn build_marker(icon: Result<leaflet::DivIcon, JsValue>, position: &leaflet::LatLng)
    -> Result<Marker, JsValue> {
    let icon = icon?;
    leaflet::marker(position, &marker_options(&icon)?)
}

/// One client marker per client id. Clients without valid coordinates, and
/// clients whose Leaflet marker cannot be built, are skipped rather than
/// failing the rest of the batch.
#[derive(Default)]
struct MarkerRegistry {
    markers: HashMap<u32, Marker>,
}

impl MarkerRegistry {
    /// Consumes the old registry, removes its markers from the map, and
    /// builds the replacement from the latest snapshot.
    fn replace(self, map: &leaflet::Map, clients: &[Client]) -> Self {
        for (_, marker) in self.markers {
            marker.remove();
        }

        let mut markers = HashMap::with_capacity(clients.len());
        for client in clients {
            let Some(position) = client.position() else {
                log::warn!("cliente {} sin coordenadas válidas, omitido", client.id);
                continue;
            };
            let color = palette::priority_color(client.priority.unwrap_or(0));
            match build_marker(icons::client(color), &position.into()) {
                Ok(marker) => {
                    marker.add_to(map).bind_popup(&format::client_popup(client));
                    markers.insert(client.id, marker);
                }
                Err(err) => {
                    log::warn!("marcador del cliente {} falló, omitido: {:?}", client.id, err);
                }
            }
        }
        Self { markers }
    }

    fn clear(self) {
        for (_, marker) in self.markers {
            marker.remove();
        }
    }
}

/// Everything drawn for one computed route: the polyline, its stop markers
/// and the animated vehicle. Owns the animation so removal always cancels
/// the timer.
struct RouteLayers {
    line: Polyline,
    stops: Vec<Marker>,
    vehicle: Option<Marker>,
    animation: Option<RouteAnimation>,
}

impl RouteLayers {
    fn teardown(self) {
        if let Some(animation) = self.animation {
            animation.cancel();
        }
        if let Some(vehicle) = self.vehicle {
            vehicle.remove();
        }
        for stop in self.stops {
            stop.remove();
        }
        self.line.remove();
    }
}

/// The live map with its depot marker, client markers and route layers.
/// Dropping the session removes every owned layer, cancels every owned
/// timer, and removes the map itself.
pub struct MapSession {
    map: leaflet::Map,
    depot: Marker,
    clients: MarkerRegistry,
    routes: Vec<RouteLayers>,
}

impl MapSession {
    /// Creates the map inside `container_id`, centered on Lima, with the
    /// OSM base layer and the depot marker.
    pub fn init(container_id: &str) -> Result<Self, JsValue> {
        let map = leaflet::map(container_id)?;
        map.set_view(&LIMA_CENTER.into(), DEFAULT_ZOOM);

        leaflet::tile_layer(
            TILE_URL,
            &tile_layer_options(&TileLayerOptions {
                attribution: TILE_ATTRIBUTION.to_string(),
                max_zoom: 18.0,
            })?,
        )?
        .add_to(&map);

        let depot = build_marker(icons::depot(), &LIMA_CENTER.into())?;
        depot.add_to(&map).bind_popup(&format::depot_popup());

        Ok(Self {
            map,
            depot,
            clients: MarkerRegistry::default(),
            routes: Vec::new(),
        })
    }

    /// Replaces the client markers with the latest snapshot. Per-client
    /// failures are logged and skipped.
    pub fn set_clients(&mut self, clients: &[Client]) {
        let old = std::mem::take(&mut self.clients);
        self.clients = old.replace(&self.map, clients);
    }

    /// Replaces the drawn routes. Old polylines, stop markers and vehicle
    /// animations are torn down first; the viewport then fits whatever
    /// drew successfully. A route whose polyline cannot be built is logged
    /// and skipped without touching the others.
    pub fn set_routes(&mut self, routes: &[RouteResult], animate: bool) {
        self.clear_routes();

        let mut bounds: Option<leaflet::LatLngBounds> = None;
        for (index, route) in routes.iter().enumerate() {
            let Some(layers) = self.draw_route(route, palette::route_color(index), animate)
            else {
                continue;
            };
            let line_bounds = layers.line.get_bounds();
            bounds = Some(match bounds {
                Some(all) => all.extend(&line_bounds),
                None => line_bounds,
            });
            self.routes.push(layers);
        }

        if let Some(bounds) = bounds {
            self.fit(&bounds);
        }
    }

    /// Fits the viewport to one drawn route. Out-of-range indexes are a
    /// no-op; the caller's list may be ahead of the drawn set mid-update.
    pub fn fit_to_route(&self, index: usize) {
        if let Some(layers) = self.routes.get(index) {
            self.fit(&layers.line.get_bounds());
        }
    }

    fn fit(&self, bounds: &leaflet::LatLngBounds) {
        match fit_bounds_options(&FitBoundsOptions {
            padding: [FIT_PADDING_PX, FIT_PADDING_PX],
        }) {
            Ok(options) => self.map.fit_bounds_with_options(bounds, &options),
            Err(err) => log::warn!("opciones de encuadre inválidas: {:?}", err),
        }
    }

    /// Draws one route. The polyline is the anchor layer: if it cannot be
    /// built nothing has touched the map and the route is skipped whole.
    /// After that, each stop marker and the vehicle fail individually.
    fn draw_route(&self, route: &RouteResult, color: &str, animate: bool) -> Option<RouteLayers> {
        let line = polyline_options(&PolylineOptions {
            color: color.to_string(),
            weight: 4,
            opacity: 0.8,
        })
        .and_then(|options| leaflet::polyline(&lat_lng_array(&route.path), &options));
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("polilínea de la ruta {} falló, omitida: {:?}", route.id, err);
                return None;
            }
        };
        line.add_to(&self.map)
            .bind_popup(&format::route_popup(route));

        let mut stops = Vec::with_capacity(route.stops.len());
        let last = route.stops.len().saturating_sub(1);
        for (i, stop) in route.stops.iter().enumerate() {
            // The depot already has its own marker at position 0.
            if i == 0 {
                continue;
            }
            let icon = if i == last {
                icons::finish(color)
            } else {
                icons::stop(color)
            };
            let marker = match build_marker(icon, &stop.position().into()) {
                Ok(marker) => marker,
                Err(err) => {
                    log::warn!(
                        "parada \"{}\" de la ruta {} falló, omitida: {:?}",
                        stop.label,
                        route.id,
                        err
                    );
                    continue;
                }
            };
            let popup = match (&stop.arrival, stop.load_kg) {
                (Some(arrival), Some(load)) => format!(
                    "<b>{}</b><br>Llegada: {}<br>Carga: {} kg",
                    stop.label,
                    arrival,
                    format::number(load)
                ),
                (Some(arrival), None) => format!("<b>{}</b><br>Llegada: {}", stop.label, arrival),
                _ => format!("<b>{}</b>", stop.label),
            };
            marker.add_to(&self.map).bind_popup(&popup);
            stops.push(marker);
        }

        let (vehicle, animation) = match route.path.first() {
            Some(&start) => match build_marker(icons::vehicle(0.0), &start.into()) {
                Ok(marker) => {
                    marker.add_to(&self.map);
                    let animation = if animate {
                        match RouteAnimation::start(marker.clone(), &route.path) {
                            Ok(animation) => animation,
                            Err(err) => {
                                log::warn!(
                                    "animación de la ruta {} falló: {:?}",
                                    route.id,
                                    err
                                );
                                None
                            }
                        }
                    } else {
                        None
                    };
                    (Some(marker), animation)
                }
                Err(err) => {
                    log::warn!("vehículo de la ruta {} falló, omitido: {:?}", route.id, err);
                    (None, None)
                }
            },
            None => (None, None),
        };

        Some(RouteLayers {
            line,
            stops,
            vehicle,
            animation,
        })
    }

    /// Removes all route layers, cancelling their animations.
    pub fn clear_routes(&mut self) {
        for layers in self.routes.drain(..) {
            layers.teardown();
        }
    }
}

impl Drop for MapSession {
    fn drop(&mut self) {
        self.clear_routes();
        std::mem::take(&mut self.clients).clear();
        self.depot.remove();
        self.map.remove();
    }
}
