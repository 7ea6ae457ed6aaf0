//! Browser utilities

mod export;

pub use export::{download_csv, download_json, share_text};
