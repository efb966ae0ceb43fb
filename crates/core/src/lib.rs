//! FitTrack Core - goal progress, streaks, achievements and dashboards.
//!
//! This crate holds the tracker's business rules as pure functions over
//! already-fetched rows, plus thin services that load those rows through
//! repository traits, persist results and emit domain events. It knows
//! nothing about databases or HTTP.

pub mod achievements;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod goals;
pub mod permissions;
pub mod records;
pub mod settings;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
