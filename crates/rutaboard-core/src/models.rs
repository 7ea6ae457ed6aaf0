//! Wire types for the delivery-route backend JSON API
//!
//! Field names on the wire are the backend's Spanish identifiers; Rust
//! identifiers stay English. The client payload tolerates both coordinate
//! spellings (`lat`/`lng` and `latitud`/`longitud`) seen across backend
//! revisions.

use serde::{Deserialize, Serialize};

use crate::validate;

/// Geographic position. Serialized as a `[lat, lng]` pair, the shape route
/// paths use on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coord {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[0],
            lng: pair[1],
        }
    }
}

impl From<Coord> for [f64; 2] {
    fn from(coord: Coord) -> Self {
        [coord.lat, coord.lng]
    }
}

/// Default map viewport: central Lima.
pub const LIMA_CENTER: Coord = Coord {
    lat: -12.0464,
    lng: -77.0428,
};

/// Default map zoom level.
pub const DEFAULT_ZOOM: f64 = 12.0;

/// Display name of the depot every route starts from.
pub const DEPOT_NAME: &str = "Depósito Central";

/// A delivery client as returned by `/api/obtener_clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "distrito", default)]
    pub district: Option<String>,
    /// Ordinal 1-5, 1 is the highest priority.
    #[serde(rename = "prioridad", default)]
    pub priority: Option<u8>,
    /// Order weight in kilograms.
    #[serde(rename = "pedido", default)]
    pub order_kg: Option<f64>,
    /// Delivery-window start, HH:MM.
    #[serde(rename = "ventana_inicio", default)]
    pub window_start: Option<String>,
    /// Delivery-window end, HH:MM.
    #[serde(rename = "ventana_fin", default)]
    pub window_end: Option<String>,
    #[serde(default, alias = "latitud")]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitud")]
    pub lng: Option<f64>,
}

impl Client {
    /// The client's position, if both coordinates are present and inside
    /// world bounds. Clients failing this are skipped by the marker layer.
    pub fn position(&self) -> Option<Coord> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if validate::coords_in_bounds(lat, lng) => {
                Some(Coord::new(lat, lng))
            }
            _ => None,
        }
    }
}

/// A fleet vehicle as returned by `/api/obtener_vehiculos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "modelo")]
    pub model: String,
    /// Load capacity in kilograms.
    #[serde(rename = "capacidad")]
    pub capacity_kg: f64,
    #[serde(rename = "disponible", default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// One stop on a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "etiqueta")]
    pub label: String,
    /// Estimated arrival, HH:MM.
    #[serde(rename = "llegada", default)]
    pub arrival: Option<String>,
    /// Weight carried when leaving this stop, in kilograms.
    #[serde(rename = "carga", default)]
    pub load_kg: Option<f64>,
}

impl Stop {
    pub fn position(&self) -> Coord {
        Coord::new(self.lat, self.lng)
    }
}

/// One computed route. Aggregate distance is meters end to end; rendering
/// converts (12500 becomes "12.50 km").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub id: u32,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "coordenadas")]
    pub path: Vec<Coord>,
    #[serde(rename = "paradas", default)]
    pub stops: Vec<Stop>,
    #[serde(rename = "distancia_total")]
    pub distance_m: f64,
    /// Estimated driving time in minutes.
    #[serde(rename = "tiempo_estimado")]
    pub time_min: u32,
    #[serde(rename = "carga_total")]
    pub load_kg: f64,
    #[serde(rename = "combustible", default)]
    pub fuel_gal: Option<f64>,
}

/// Envelope of `/api/obtener_clientes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientsEnvelope {
    #[serde(default)]
    pub clientes: Vec<Client>,
}

/// Envelope of `/api/obtener_vehiculos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehiclesEnvelope {
    #[serde(default)]
    pub vehiculos: Vec<Vehicle>,
}

/// Envelope returned by mutating endpoints (`/api/cargar_csv`,
/// `/api/agregar_cliente`). Failures arrive as `error`, successes as
/// `success` + `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload for `/api/agregar_cliente`.
#[derive(Debug, Clone, Serialize)]
pub struct NewClient {
    pub nombre: String,
    pub latitud: f64,
    pub longitud: f64,
    pub prioridad: u8,
    pub ventana_inicio: String,
    pub ventana_fin: String,
    pub pedido: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_decodes_both_coordinate_spellings() {
        let short: Client = serde_json::from_str(
            r#"{"id":1,"nombre":"Tienda A","lat":-12.05,"lng":-77.04,"prioridad":1,"pedido":100,"ventana_inicio":"08:00","ventana_fin":"10:00"}"#,
        )
        .unwrap();
        let long: Client = serde_json::from_str(
            r#"{"id":2,"nombre":"Tienda B","latitud":-12.10,"longitud":-77.02,"prioridad":3,"pedido":80}"#,
        )
        .unwrap();

        assert_eq!(short.position(), Some(Coord::new(-12.05, -77.04)));
        assert_eq!(long.position(), Some(Coord::new(-12.10, -77.02)));
        assert_eq!(long.window_start, None);
    }

    #[test]
    fn client_without_coordinates_has_no_position() {
        let client: Client =
            serde_json::from_str(r#"{"id":3,"nombre":"Tienda C"}"#).unwrap();
        assert_eq!(client.position(), None);

        let out_of_bounds: Client = serde_json::from_str(
            r#"{"id":4,"nombre":"Tienda D","lat":123.0,"lng":-77.0}"#,
        )
        .unwrap();
        assert_eq!(out_of_bounds.position(), None);
    }

    // One broken client in a fetched batch only loses its own marker; the
    // neighbors before and after it still resolve.
    #[test]
    fn mixed_client_batch_keeps_every_valid_position() {
        let clients: Vec<Client> = serde_json::from_str(
            r#"[
                {"id":1,"nombre":"Tienda A","lat":-12.05,"lng":-77.04},
                {"id":2,"nombre":"Tienda B","lat":123.0,"lng":-77.0},
                {"id":3,"nombre":"Tienda C","lat":-12.10,"lng":-77.02}
            ]"#,
        )
        .unwrap();

        let drawable: Vec<u32> = clients
            .iter()
            .filter(|client| client.position().is_some())
            .map(|client| client.id)
            .collect();
        assert_eq!(drawable, vec![1, 3]);
    }

    #[test]
    fn vehicle_defaults_to_available() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"id":1,"placa":"ABC-123","modelo":"Hyundai H100","capacidad":1500}"#,
        )
        .unwrap();
        assert!(vehicle.available);
    }

    #[test]
    fn route_path_round_trips_as_pairs() {
        let json = r#"{"id":1,"placa":"ABC-123","coordenadas":[[-12.0464,-77.0428],[-12.05,-77.04]],"distancia_total":7300,"tiempo_estimado":25,"carga_total":450}"#;
        let route: RouteResult = serde_json::from_str(json).unwrap();
        assert_eq!(route.path.len(), 2);
        assert_eq!(route.path[0], LIMA_CENTER);

        let back = serde_json::to_string(&route).unwrap();
        assert!(back.contains("[[-12.0464,-77.0428],[-12.05,-77.04]]"));
    }

    #[test]
    fn outcome_envelope_decodes_both_shapes() {
        let ok: ApiOutcome = serde_json::from_str(
            r#"{"success":true,"message":"Datos cargados exitosamente"}"#,
        )
        .unwrap();
        assert!(ok.success);

        let err: ApiOutcome =
            serde_json::from_str(r#"{"error":"No se encontró el archivo"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("No se encontró el archivo"));
    }
}
