//! Leaflet map ownership, icons and the vehicle animation.

mod animate;
pub mod icons;
mod session;

pub use session::MapSession;
