//! Client-side aggregates for the dashboard cards and charts.
//!
//! Everything here recomputes from the latest fetched snapshot; nothing is
//! cached between refreshes.

use crate::models::{Client, RouteResult, Vehicle};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetSummary {
    pub total_clients: usize,
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    /// Sum of client order weights, kilograms.
    pub total_order_kg: f64,
    /// Sum of vehicle capacities, kilograms.
    pub total_capacity_kg: f64,
}

pub fn fleet_summary(clients: &[Client], vehicles: &[Vehicle]) -> FleetSummary {
    FleetSummary {
        total_clients: clients.len(),
        total_vehicles: vehicles.len(),
        available_vehicles: vehicles.iter().filter(|v| v.available).count(),
        total_order_kg: clients.iter().filter_map(|c| c.order_kg).sum(),
        total_capacity_kg: vehicles.iter().map(|v| v.capacity_kg).sum(),
    }
}

/// Client counts bucketed by priority 1-5. Index 0 holds priority 1.
/// Clients with a missing or out-of-range priority are not counted.
pub fn priority_histogram(clients: &[Client]) -> [usize; 5] {
    let mut buckets = [0usize; 5];
    for client in clients {
        if let Some(p @ 1..=5) = client.priority {
            buckets[(p - 1) as usize] += 1;
        }
    }
    buckets
}

/// Aggregates over a computed route set, shown next to the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteMetrics {
    /// Total distance across all routes, meters.
    pub distance_m: f64,
    /// Total estimated driving time, minutes.
    pub time_min: u32,
    pub clients_served: usize,
    pub vehicles_used: usize,
}

impl RouteMetrics {
    pub fn from_routes(routes: &[RouteResult]) -> Self {
        let mut plates: Vec<&str> = routes.iter().map(|r| r.plate.as_str()).collect();
        plates.sort_unstable();
        plates.dedup();

        // Depot bookends each stop list, so served clients are the interior
        // stops; routes without stop detail fall back to zero.
        let clients_served = routes
            .iter()
            .map(|r| r.stops.len().saturating_sub(2))
            .sum();

        Self {
            distance_m: routes.iter().map(|r| r.distance_m).sum(),
            time_min: routes.iter().map(|r| r.time_min).sum(),
            clients_served,
            vehicles_used: plates.len(),
        }
    }
}

/// Animation progress in [0, 1] for a counter that started `elapsed_ms` ago.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Linear interpolation between two counter values.
pub fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientsEnvelope, VehiclesEnvelope};

    fn sample_clients() -> Vec<Client> {
        serde_json::from_str::<ClientsEnvelope>(
            r#"{"clientes":[
                {"id":1,"nombre":"A","prioridad":1,"pedido":100},
                {"id":2,"nombre":"B","prioridad":1,"pedido":80},
                {"id":3,"nombre":"C","prioridad":3,"pedido":50.5},
                {"id":4,"nombre":"D"},
                {"id":5,"nombre":"E","prioridad":9}
            ]}"#,
        )
        .unwrap()
        .clientes
    }

    fn sample_vehicles() -> Vec<Vehicle> {
        serde_json::from_str::<VehiclesEnvelope>(
            r#"{"vehiculos":[
                {"id":1,"placa":"ABC-123","modelo":"H100","capacidad":1500},
                {"id":2,"placa":"DEF-456","modelo":"NPR","capacidad":2000,"disponible":false}
            ]}"#,
        )
        .unwrap()
        .vehiculos
    }

    #[test]
    fn summary_totals_orders_and_capacity() {
        let summary = fleet_summary(&sample_clients(), &sample_vehicles());
        assert_eq!(summary.total_clients, 5);
        assert_eq!(summary.total_vehicles, 2);
        assert_eq!(summary.available_vehicles, 1);
        assert!((summary.total_order_kg - 230.5).abs() < 1e-9);
        assert!((summary.total_capacity_kg - 3500.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_skips_missing_and_out_of_range() {
        let buckets = priority_histogram(&sample_clients());
        assert_eq!(buckets, [2, 0, 1, 0, 0]);
    }

    #[test]
    fn route_metrics_count_distinct_plates_and_interior_stops() {
        let routes: Vec<RouteResult> = serde_json::from_str(
            r#"[
                {"id":1,"placa":"ABC-123","coordenadas":[[-12.0,-77.0]],
                 "paradas":[
                    {"lat":-12.0,"lng":-77.0,"etiqueta":"Depósito Central"},
                    {"lat":-12.05,"lng":-77.03,"etiqueta":"Tienda A"},
                    {"lat":-12.06,"lng":-77.02,"etiqueta":"Tienda B"},
                    {"lat":-12.0,"lng":-77.0,"etiqueta":"Depósito Central"}],
                 "distancia_total":7300,"tiempo_estimado":25,"carga_total":450},
                {"id":2,"placa":"ABC-123","coordenadas":[[-12.0,-77.0]],
                 "distancia_total":5200,"tiempo_estimado":20,"carga_total":380}
            ]"#,
        )
        .unwrap();

        let metrics = RouteMetrics::from_routes(&routes);
        assert!((metrics.distance_m - 12500.0).abs() < 1e-9);
        assert_eq!(metrics.time_min, 45);
        assert_eq!(metrics.clients_served, 2);
        assert_eq!(metrics.vehicles_used, 1);
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        assert_eq!(progress(-50.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(2000.0, 1000.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn interpolation_is_linear() {
        assert_eq!(interpolate(0.0, 200.0, 0.25), 50.0);
        assert_eq!(interpolate(100.0, 100.0, 0.9), 100.0);
        assert_eq!(interpolate(200.0, 0.0, 1.0), 0.0);
    }
}
