//! Derivation engine for the accreditation contract dashboard.
//!
//! - **dates**: `MM/DD/YY` parsing and same-day comparison
//! - **aggregate**: ordered grouping and counting
//! - **expiry** / **status**: record classification
//! - **filter**: criteria filtering, date search and lookup
//! - **stats** / **views**: summary counts and grouped views
//! - **loader**: JSON and CSV record loading
//! - **controller**: host-side state, pagination and action dispatch
//! - **report**: markdown rendering of view models

pub mod aggregate;
pub mod controller;
pub mod dates;
pub mod error;
pub mod expiry;
pub mod filter;
pub mod loader;
pub mod models;
pub mod report;
pub mod stats;
pub mod status;
pub mod views;

#[cfg(test)]
mod test_support;

pub use controller::{Action, Dashboard, ViewUpdate};
pub use error::{LoadError, UnknownAction};
pub use models::*;
