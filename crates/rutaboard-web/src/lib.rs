//! rutaboard-web - Leptos dashboard for the rutaboard delivery-route planner

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod leaflet;
pub mod map;
pub mod pages;
pub mod utils;

pub use app::App;
