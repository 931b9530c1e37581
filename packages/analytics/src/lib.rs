#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filtering and aggregation engine for flood survey data.
//!
//! One shared filter predicate ([`filter::filter_rows`]) narrows the loaded
//! dataset by week and optional city; three chart aggregations and a
//! week-scoped summary transform the narrowed view into render-ready
//! results. Everything here is a pure function over the immutable dataset,
//! so the functions are safe to call concurrently from any number of
//! request-handling workers.

pub mod charts;
pub mod filter;
pub mod summary;

use thiserror::Error;

/// Errors that can occur during aggregation.
///
/// Only the map aggregation can fail; its caller is expected to degrade to
/// a placeholder result rather than surfacing the error to the user.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A survey point carries coordinates outside the WGS84 value range,
    /// which the map renderer cannot place.
    #[error("coordinate out of range for {city}: ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        /// City of the offending row.
        city: String,
        /// The out-of-range latitude.
        latitude: f64,
        /// The out-of-range longitude.
        longitude: f64,
    },
}
