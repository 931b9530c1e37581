#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart and summary result types for flood survey analytics.
//!
//! Each aggregation function in `flood_map_analytics` returns one of these
//! types: a tabular result ready to hand to a rendering collaborator. They
//! are deliberately separate from the API response types so the wire
//! contract can evolve independently of the aggregation core.

use flood_map_survey_models::RiskLevel;
use serde::Serialize;

/// One bar chart row: a filtered survey row reduced to the three fields the
/// bar view encodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRow {
    /// City plotted on the x axis.
    pub city: String,
    /// Rainfall plotted on the y axis; `None` rows render as gaps.
    pub rainfall_mm: Option<f64>,
    /// Risk level mapped to bar color.
    pub risk_level: RiskLevel,
}

/// Bar chart aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    /// Chart title; labels the empty state when `rows` is empty.
    pub title: String,
    /// Filtered rows in source order.
    pub rows: Vec<BarRow>,
}

/// Frequency of one risk level among the filtered rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSlice {
    /// The risk level.
    pub risk_level: RiskLevel,
    /// Number of filtered rows with this level (always non-zero).
    pub count: u64,
}

/// Pie chart aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartData {
    /// Chart title; labels the empty state when `slices` is empty.
    pub title: String,
    /// Slices ordered by descending count, then by risk level.
    pub slices: Vec<RiskSlice>,
}

/// One geo-valid survey point for the map view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// City shown on hover.
    pub city: String,
    /// Survey point latitude.
    pub latitude: f64,
    /// Survey point longitude.
    pub longitude: f64,
    /// Rainfall clipped to the sizing range; drives marker size only, the
    /// underlying record keeps its original value.
    pub size_mm: f64,
    /// Risk level mapped to marker color.
    pub risk_level: RiskLevel,
}

/// Map aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapChartData {
    /// Chart title; labels the empty state when `points` is empty.
    pub title: String,
    /// Rows with both coordinates present, in source order.
    pub points: Vec<MapPoint>,
}

/// Week-scoped summary totals for the dashboard's counter cards.
///
/// City selection deliberately does not apply here — the counters always
/// describe the whole week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Week the totals cover.
    pub week: String,
    /// Sum of affected people over the week's rows.
    pub total_affected: u64,
    /// Sum of relief camps over the week's rows.
    pub total_camps: u64,
}
