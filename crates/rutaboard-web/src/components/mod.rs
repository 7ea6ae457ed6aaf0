//! Leptos UI components

mod charts;
mod header;
mod loading;
mod stats_card;
mod tables;
mod toast;

pub use charts::{MetricsChart, PriorityChart};
pub use header::Header;
pub use loading::{use_loading, LoadingProvider};
pub use stats_card::{AnimatedCounter, CardColor, StatsCard};
pub use tables::{ClientsTable, VehiclesTable};
pub use toast::{use_toast, ToastProvider};
