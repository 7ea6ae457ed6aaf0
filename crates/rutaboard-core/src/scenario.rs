//! Fixed demonstration scenarios for the route-execution flow.
//!
//! Each supported algorithm id maps to a pre-computed route set with
//! Lima-area coordinates. The planner page renders these exactly as it
//! would a live solver response.

use crate::error::CoreError;
use crate::models::{RouteResult, Stop, DEPOT_NAME, LIMA_CENTER};

/// Result of running one algorithm scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    /// Algorithm id as selected in the planner, e.g. "bellman-ford".
    pub algorithm: String,
    pub routes: Vec<RouteResult>,
    /// Estimated operating cost in soles.
    pub cost_pen: f64,
}

/// Human label for a known algorithm id, used in export metadata and the
/// results panel heading.
pub fn algorithm_label(id: &str) -> Option<&'static str> {
    match id {
        "bellman-ford" => Some("Bellman-Ford"),
        "programacion-dinamica" => Some("Programación Dinámica"),
        "backtracking" => Some("Backtracking"),
        _ => None,
    }
}

/// Looks up the scenario for `algorithm`. Unknown ids fail without side
/// effects so the map keeps whatever was drawn before.
pub fn run(algorithm: &str) -> Result<ScenarioOutcome, CoreError> {
    let (routes, cost_pen) = match algorithm {
        "bellman-ford" => (bellman_ford_routes(), 250.50),
        "programacion-dinamica" => (dynamic_programming_routes(), 238.90),
        "backtracking" => (backtracking_routes(), 265.75),
        other => return Err(CoreError::UnknownAlgorithm(other.to_string())),
    };
    Ok(ScenarioOutcome {
        algorithm: algorithm.to_string(),
        routes,
        cost_pen,
    })
}

fn depot_stop(arrival: &str) -> Stop {
    Stop {
        lat: LIMA_CENTER.lat,
        lng: LIMA_CENTER.lng,
        label: DEPOT_NAME.to_string(),
        arrival: Some(arrival.to_string()),
        load_kg: None,
    }
}

fn stop(lat: f64, lng: f64, label: &str, arrival: &str, load_kg: f64) -> Stop {
    Stop {
        lat,
        lng,
        label: label.to_string(),
        arrival: Some(arrival.to_string()),
        load_kg: Some(load_kg),
    }
}

fn path(points: &[(f64, f64)]) -> Vec<crate::models::Coord> {
    points
        .iter()
        .map(|&(lat, lng)| crate::models::Coord::new(lat, lng))
        .collect()
}

fn bellman_ford_routes() -> Vec<RouteResult> {
    vec![
        RouteResult {
            id: 1,
            plate: "ABC-123".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0560, -77.0360),
                (-12.0620, -77.0300),
                (-12.0700, -77.0250),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0560, -77.0360, "Bodega San Martín", "08:20", 450.0),
                stop(-12.0620, -77.0300, "Minimarket La Victoria", "08:45", 280.0),
                stop(-12.0700, -77.0250, "Tienda El Porvenir", "09:10", 120.0),
                depot_stop("09:35"),
            ],
            distance_m: 7300.0,
            time_min: 25,
            load_kg: 450.0,
            fuel_gal: Some(0.9),
        },
        RouteResult {
            id: 2,
            plate: "DEF-456".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0380, -77.0500),
                (-12.0300, -77.0560),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0380, -77.0500, "Comercial Breña", "08:15", 380.0),
                stop(-12.0300, -77.0560, "Abarrotes Doña Rosa", "08:35", 190.0),
                depot_stop("08:55"),
            ],
            distance_m: 5200.0,
            time_min: 20,
            load_kg: 380.0,
            fuel_gal: Some(0.6),
        },
    ]
}

fn dynamic_programming_routes() -> Vec<RouteResult> {
    vec![
        RouteResult {
            id: 1,
            plate: "ABC-123".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0520, -77.0480),
                (-12.0600, -77.0520),
                (-12.0660, -77.0450),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0520, -77.0480, "Bodega San Martín", "08:18", 450.0),
                stop(-12.0600, -77.0520, "Comercial Breña", "08:40", 300.0),
                stop(-12.0660, -77.0450, "Minimarket La Victoria", "09:02", 150.0),
                depot_stop("09:25"),
            ],
            distance_m: 6400.0,
            time_min: 23,
            load_kg: 470.0,
            fuel_gal: Some(0.8),
        },
        RouteResult {
            id: 2,
            plate: "DEF-456".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0400, -77.0350),
                (-12.0340, -77.0280),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0400, -77.0350, "Tienda El Porvenir", "08:14", 340.0),
                stop(-12.0340, -77.0280, "Abarrotes Doña Rosa", "08:32", 170.0),
                depot_stop("08:50"),
            ],
            distance_m: 5400.0,
            time_min: 19,
            load_kg: 340.0,
            fuel_gal: Some(0.6),
        },
    ]
}

fn backtracking_routes() -> Vec<RouteResult> {
    vec![
        RouteResult {
            id: 1,
            plate: "ABC-123".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0550, -77.0400),
                (-12.0610, -77.0340),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0550, -77.0400, "Bodega San Martín", "08:19", 420.0),
                stop(-12.0610, -77.0340, "Minimarket La Victoria", "08:42", 210.0),
                depot_stop("09:05"),
            ],
            distance_m: 5100.0,
            time_min: 19,
            load_kg: 420.0,
            fuel_gal: Some(0.6),
        },
        RouteResult {
            id: 2,
            plate: "DEF-456".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0390, -77.0480),
                (-12.0320, -77.0540),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0390, -77.0480, "Comercial Breña", "08:16", 360.0),
                stop(-12.0320, -77.0540, "Abarrotes Doña Rosa", "08:36", 180.0),
                depot_stop("08:58"),
            ],
            distance_m: 4800.0,
            time_min: 17,
            load_kg: 360.0,
            fuel_gal: Some(0.5),
        },
        RouteResult {
            id: 3,
            plate: "GHI-789".to_string(),
            path: path(&[
                (-12.0464, -77.0428),
                (-12.0430, -77.0300),
                (-12.0360, -77.0240),
                (-12.0464, -77.0428),
            ]),
            stops: vec![
                depot_stop("08:00"),
                stop(-12.0430, -77.0300, "Tienda El Porvenir", "08:13", 290.0),
                stop(-12.0360, -77.0240, "Bazar Santa Anita", "08:30", 140.0),
                depot_stop("08:51"),
            ],
            distance_m: 3500.0,
            time_min: 15,
            load_kg: 290.0,
            fuel_gal: Some(0.4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;
    use crate::stats::RouteMetrics;

    #[test]
    fn bellman_ford_totals_match_display() {
        let outcome = run("bellman-ford").unwrap();
        let metrics = RouteMetrics::from_routes(&outcome.routes);
        assert_eq!(outcome.routes.len(), 2);
        assert_eq!(format::km_from_meters(metrics.distance_m), "12.50 km");
        assert_eq!(format::currency(outcome.cost_pen), "S/ 250.50");
        assert_eq!(metrics.time_min, 45);
        assert_eq!(metrics.vehicles_used, 2);
    }

    #[test]
    fn dynamic_programming_is_the_shortest_plan() {
        let outcome = run("programacion-dinamica").unwrap();
        let metrics = RouteMetrics::from_routes(&outcome.routes);
        assert!((metrics.distance_m - 11800.0).abs() < 1e-9);
        assert_eq!(metrics.time_min, 42);
        assert!((outcome.cost_pen - 238.90).abs() < 1e-9);
    }

    #[test]
    fn backtracking_uses_three_vehicles() {
        let outcome = run("backtracking").unwrap();
        let metrics = RouteMetrics::from_routes(&outcome.routes);
        assert_eq!(outcome.routes.len(), 3);
        assert!((metrics.distance_m - 13400.0).abs() < 1e-9);
        assert_eq!(metrics.time_min, 51);
        assert_eq!(metrics.vehicles_used, 3);
        assert!((outcome.cost_pen - 265.75).abs() < 1e-9);
    }

    #[test]
    fn every_route_starts_and_ends_at_the_depot() {
        for id in ["bellman-ford", "programacion-dinamica", "backtracking"] {
            for route in run(id).unwrap().routes {
                let first = route.stops.first().unwrap();
                let last = route.stops.last().unwrap();
                assert_eq!(first.label, DEPOT_NAME);
                assert_eq!(last.label, DEPOT_NAME);
                assert_eq!(route.path.first(), Some(&LIMA_CENTER));
                assert_eq!(route.path.last(), Some(&LIMA_CENTER));
                assert!(route.path.len() >= 2);
            }
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert_eq!(
            run("unknown-algo"),
            Err(CoreError::UnknownAlgorithm("unknown-algo".to_string()))
        );
        assert_eq!(algorithm_label("unknown-algo"), None);
        assert_eq!(algorithm_label("bellman-ford"), Some("Bellman-Ford"));
    }
}
