//! Locale-aware rendering for the dashboard (es-PE conventions)
//!
//! Numbers group thousands with commas and keep a dot decimal separator,
//! currency is Peruvian soles ("S/ 250.50"), durations render as "Xh Ym".
//! Popup builders live here too so their exact text is host-testable.

use crate::models::{Client, RouteResult};

/// Groups the integer digits of an already-formatted number string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a number with grouped thousands and a fixed number of decimals.
fn grouped_fixed(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, value.abs());
    match fixed.split_once('.') {
        Some((int, frac)) => format!("{sign}{}.{frac}", group_thousands(int)),
        None => format!("{sign}{}", group_thousands(&fixed)),
    }
}

/// Renders a number the way the dashboard counters do: grouped thousands,
/// up to three decimals, trailing zeros trimmed. `12500.0` -> "12,500".
pub fn number(value: f64) -> String {
    let rendered = grouped_fixed(value, 3);
    match rendered.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{int}.{frac}")
            }
        }
        None => rendered,
    }
}

/// Renders minutes as "Xh Ym".
pub fn duration_min(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Renders a kilometre quantity for tables and popups: "1,250 km".
pub fn distance_km(km: f64) -> String {
    format!("{} km", number(km))
}

/// Renders a meter aggregate as kilometres with two decimals:
/// `12500.0` -> "12.50 km".
pub fn km_from_meters(meters: f64) -> String {
    format!("{} km", grouped_fixed(meters / 1000.0, 2))
}

/// Renders an amount in Peruvian soles: "S/ 250.50".
pub fn currency(amount: f64) -> String {
    format!("S/ {}", grouped_fixed(amount, 2))
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

/// Popup HTML for a client marker.
pub fn client_popup(client: &Client) -> String {
    format!(
        "<b>{}</b><br>Prioridad: {}<br>Pedido: {} kg<br>Ventana: {} - {}",
        client.name,
        or_na(client.priority.map(|p| p.to_string())),
        or_na(client.order_kg.map(number)),
        or_na(client.window_start.clone()),
        or_na(client.window_end.clone()),
    )
}

/// Popup HTML for a route polyline.
pub fn route_popup(route: &RouteResult) -> String {
    format!(
        "<b>Ruta {}</b><br>Vehículo: {}<br>Distancia: {}<br>Tiempo: {}<br>Carga: {} kg",
        route.id,
        route.plate,
        km_from_meters(route.distance_m),
        duration_min(route.time_min),
        number(route.load_kg),
    )
}

/// Popup HTML for the depot marker.
pub fn depot_popup() -> String {
    format!(
        "<b>{}</b><br>Punto de partida de todas las rutas",
        crate::models::DEPOT_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_groups_thousands() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(100.0), "100");
        assert_eq!(number(12500.0), "12,500");
        assert_eq!(number(1234567.0), "1,234,567");
        assert_eq!(number(-4500.0), "-4,500");
        assert_eq!(number(12500.5), "12,500.5");
    }

    #[test]
    fn duration_splits_hours_and_minutes() {
        assert_eq!(duration_min(45), "0h 45m");
        assert_eq!(duration_min(60), "1h 0m");
        assert_eq!(duration_min(135), "2h 15m");
    }

    #[test]
    fn meter_aggregates_render_as_km() {
        assert_eq!(km_from_meters(12500.0), "12.50 km");
        assert_eq!(km_from_meters(999.0), "1.00 km");
        assert_eq!(km_from_meters(1_250_000.0), "1,250.00 km");
    }

    #[test]
    fn currency_is_soles_with_two_decimals() {
        assert_eq!(currency(250.5), "S/ 250.50");
        assert_eq!(currency(1234.0), "S/ 1,234.00");
    }

    #[test]
    fn client_popup_includes_order_and_window() {
        let client: Client = serde_json::from_str(
            r#"{"id":1,"nombre":"Tienda A","lat":-12.05,"lng":-77.04,"prioridad":1,"pedido":100,"ventana_inicio":"08:00","ventana_fin":"10:00"}"#,
        )
        .unwrap();
        let popup = client_popup(&client);
        assert!(popup.contains("<b>Tienda A</b>"));
        assert!(popup.contains("Prioridad: 1"));
        assert!(popup.contains("100"));
        assert!(popup.contains("08:00 - 10:00"));
    }

    #[test]
    fn client_popup_degrades_missing_fields_to_na() {
        let client: Client =
            serde_json::from_str(r#"{"id":9,"nombre":"Tienda X"}"#).unwrap();
        let popup = client_popup(&client);
        assert!(popup.contains("Prioridad: N/A"));
        assert!(popup.contains("Ventana: N/A - N/A"));
    }

    #[test]
    fn route_popup_renders_aggregates() {
        let route: RouteResult = serde_json::from_str(
            r#"{"id":1,"placa":"ABC-123","coordenadas":[[-12.0,-77.0]],"distancia_total":7300,"tiempo_estimado":25,"carga_total":450}"#,
        )
        .unwrap();
        let popup = route_popup(&route);
        assert!(popup.contains("Ruta 1"));
        assert!(popup.contains("ABC-123"));
        assert!(popup.contains("7.30 km"));
        assert!(popup.contains("0h 25m"));
        assert!(popup.contains("450 kg"));
    }
}
