//! CSV and JSON export builders.
//!
//! The builders only produce strings; the web layer wraps them in a Blob
//! and triggers the download. CSV data fields are always double-quoted
//! (headers are not), matching what the office tooling downstream expects.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::models::{Client, RouteResult, Vehicle};
use crate::scenario::algorithm_label;

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quoted(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Every path point of every route, one row per point, numbered across the
/// whole set.
pub fn route_points_csv(routes: &[RouteResult]) -> Result<String, CoreError> {
    if routes.iter().all(|r| r.path.is_empty()) {
        return Err(CoreError::EmptyExport);
    }

    let mut csv = String::from("punto,lat,lng\n");
    let mut punto = 0usize;
    for route in routes {
        for point in &route.path {
            punto += 1;
            csv.push_str(&csv_row(&[
                punto.to_string(),
                point.lat.to_string(),
                point.lng.to_string(),
            ]));
            csv.push('\n');
        }
    }
    Ok(csv)
}

/// Client table export for the clients page.
pub fn clients_csv(clients: &[Client]) -> Result<String, CoreError> {
    if clients.is_empty() {
        return Err(CoreError::EmptyExport);
    }

    let mut csv =
        String::from("id,nombre,distrito,prioridad,pedido_kg,ventana_inicio,ventana_fin,lat,lng\n");
    for client in clients {
        csv.push_str(&csv_row(&[
            client.id.to_string(),
            client.name.clone(),
            render_opt(&client.district),
            render_opt(&client.priority),
            render_opt(&client.order_kg),
            render_opt(&client.window_start),
            render_opt(&client.window_end),
            render_opt(&client.lat),
            render_opt(&client.lng),
        ]));
        csv.push('\n');
    }
    Ok(csv)
}

/// Vehicle table export for the fleet page.
pub fn vehicles_csv(vehicles: &[Vehicle]) -> Result<String, CoreError> {
    if vehicles.is_empty() {
        return Err(CoreError::EmptyExport);
    }

    let mut csv = String::from("id,placa,modelo,capacidad_kg,disponible\n");
    for vehicle in vehicles {
        csv.push_str(&csv_row(&[
            vehicle.id.to_string(),
            vehicle.plate.clone(),
            vehicle.model.clone(),
            vehicle.capacity_kg.to_string(),
            if vehicle.available { "si" } else { "no" }.to_string(),
        ]));
        csv.push('\n');
    }
    Ok(csv)
}

#[derive(Serialize)]
struct RoutesDocument<'a> {
    algoritmo: &'a str,
    fecha: String,
    rutas: &'a [RouteResult],
}

/// Pretty-printed JSON document for a computed route set, with the
/// algorithm label and export date as metadata.
pub fn routes_json(
    routes: &[RouteResult],
    algorithm: &str,
    date: NaiveDate,
) -> Result<String, CoreError> {
    if routes.is_empty() {
        return Err(CoreError::EmptyExport);
    }

    let document = RoutesDocument {
        algoritmo: algorithm_label(algorithm).unwrap_or(algorithm),
        fecha: date.format("%Y-%m-%d").to_string(),
        rutas: routes,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Download filename stamped with the export date: "rutas-2026-08-24.csv".
pub fn export_filename(base: &str, extension: &str, date: NaiveDate) -> String {
    format!("{base}-{}.{extension}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn route_points_csv_quotes_data_but_not_header() {
        let outcome = scenario::run("bellman-ford").unwrap();
        let csv = route_points_csv(&outcome.routes).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("punto,lat,lng"));
        assert_eq!(lines.next(), Some("\"1\",\"-12.0464\",\"-77.0428\""));
        // 5 + 4 path points plus the header
        assert_eq!(csv.lines().count(), 10);
        assert!(csv.ends_with("\"9\",\"-12.0464\",\"-77.0428\"\n"));
    }

    #[test]
    fn empty_route_export_is_an_error() {
        assert_eq!(route_points_csv(&[]), Err(CoreError::EmptyExport));
        assert_eq!(clients_csv(&[]), Err(CoreError::EmptyExport));
        assert_eq!(vehicles_csv(&[]), Err(CoreError::EmptyExport));
        assert_eq!(
            routes_json(&[], "bellman-ford", date()),
            Err(CoreError::EmptyExport)
        );
    }

    #[test]
    fn clients_csv_blanks_missing_fields_and_escapes_quotes() {
        let clients: Vec<Client> = serde_json::from_str(
            r#"[{"id":1,"nombre":"Bodega \"La Única\"","lat":-12.05,"lng":-77.04}]"#,
        )
        .unwrap();
        let csv = clients_csv(&clients).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Bodega \"\"La Única\"\"\""));
        assert!(row.contains(",\"\",")); // missing distrito
    }

    #[test]
    fn vehicles_csv_renders_availability() {
        let vehicles: Vec<Vehicle> = serde_json::from_str(
            r#"[{"id":1,"placa":"ABC-123","modelo":"H100","capacidad":1500,"disponible":false}]"#,
        )
        .unwrap();
        let csv = vehicles_csv(&vehicles).unwrap();
        assert!(csv.ends_with("\"1\",\"ABC-123\",\"H100\",\"1500\",\"no\"\n"));
    }

    #[test]
    fn routes_json_carries_metadata() {
        let outcome = scenario::run("programacion-dinamica").unwrap();
        let json = routes_json(&outcome.routes, &outcome.algorithm, date()).unwrap();
        assert!(json.contains("\"algoritmo\": \"Programación Dinámica\""));
        assert!(json.contains("\"fecha\": \"2026-08-24\""));
        assert!(json.contains("\"placa\": \"ABC-123\""));
    }

    #[test]
    fn filenames_are_date_stamped() {
        assert_eq!(
            export_filename("rutas", "csv", date()),
            "rutas-2026-08-24.csv"
        );
        assert_eq!(
            export_filename("clientes", "csv", date()),
            "clientes-2026-08-24.csv"
        );
    }
}
