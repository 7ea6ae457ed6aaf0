//! Page components

mod clients;
mod dashboard;
mod planner;
mod vehicles;

pub use clients::Clients;
pub use dashboard::Dashboard;
pub use planner::Planner;
pub use vehicles::Vehicles;
