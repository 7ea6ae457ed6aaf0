//! rutaboard-core - Core library for rutaboard
//!
//! Provides the data model for the delivery-route backend API, validation
//! predicates, locale-aware formatting, client-side aggregates, the fixed
//! algorithm-scenario table, and the CSV/JSON export builders. Everything
//! here is DOM-free and runs on both the host and WASM targets.

pub mod error;
pub mod export;
pub mod format;
pub mod geo;
pub mod models;
pub mod palette;
pub mod scenario;
pub mod stats;
pub mod validate;

pub use error::CoreError;
pub use models::{Client, Coord, RouteResult, Stop, Vehicle};
pub use scenario::ScenarioOutcome;
pub use stats::{FleetSummary, RouteMetrics};
