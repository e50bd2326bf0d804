//! Ranks rental listings: filter by budget, rating and area, then return the
//! top five by price and rating.
//!
//! The ranking core lives in [`ranking`]. The web server (`src/main.rs`) and
//! the batch tool (`src/bin/top_listings.rs`) both go through it.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod ranking;
pub mod responses;
pub mod router;
pub mod telemetry;
pub mod templates;

pub use dataset::Dataset;
pub use domain::{Coordinates, Listing, ListingId, Query};
pub use ranking::{rank, TOP_K};

#[cfg(test)]
mod tests;
