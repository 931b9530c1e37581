#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the flood map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the survey row and chart data types to allow independent evolution
//! of the API contract; risk levels flatten to plain strings here.

use flood_map_analytics_models::{
    BarChartData, BarRow, MapChartData, MapPoint, PieChartData, RiskSlice, WeekSummary,
};
use flood_map_dataset::SurveyDataset;
use serde::{Deserialize, Serialize};

/// Title carried by the map placeholder when chart generation fails.
pub const MAP_ERROR_TITLE: &str = "Error generating map";

/// Map zoom level the front end starts from.
pub const DEFAULT_MAP_ZOOM: u8 = 4;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// The selectable filter values, returned once at page load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterOptions {
    /// Every distinct week, sorted ascending.
    pub weeks: Vec<String>,
    /// Every distinct city, sorted ascending.
    pub cities: Vec<String>,
    /// Week the dashboard should preselect.
    pub default_week: String,
}

impl From<&SurveyDataset> for ApiFilterOptions {
    fn from(dataset: &SurveyDataset) -> Self {
        Self {
            weeks: dataset.weeks().to_vec(),
            cities: dataset.cities().to_vec(),
            default_week: dataset.weeks().first().cloned().unwrap_or_default(),
        }
    }
}

/// Query parameters shared by the chart endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQueryParams {
    /// Selected week. Required.
    pub week: String,
    /// Selected city. Absent means all cities.
    pub city: Option<String>,
}

/// Query parameters for the summary endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQueryParams {
    /// Selected week. Required.
    pub week: String,
}

/// Outcome marker on every chart payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartStatus {
    /// Chart carries renderable data.
    Ok,
    /// Filters matched nothing; title explains, data is empty.
    Empty,
    /// Chart generation failed; title explains, data is empty.
    Error,
}

/// Field name mapping the front end uses to draw the bar chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarEncoding {
    /// Row field plotted on the x axis.
    pub x: &'static str,
    /// Row field plotted on the y axis.
    pub y: &'static str,
    /// Row field that selects the bar color.
    pub color: &'static str,
}

impl BarEncoding {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: "city",
            y: "rainfallMm",
            color: "riskLevel",
        }
    }
}

impl Default for BarEncoding {
    fn default() -> Self {
        Self::new()
    }
}

/// Field name mapping the front end uses to draw the pie chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieEncoding {
    /// Slice field carrying the label.
    pub names: &'static str,
    /// Slice field carrying the value.
    pub values: &'static str,
}

impl PieEncoding {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: "riskLevel",
            values: "count",
        }
    }
}

impl Default for PieEncoding {
    fn default() -> Self {
        Self::new()
    }
}

/// Field name mapping the front end uses to draw the map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEncoding {
    /// Point field carrying the latitude.
    pub lat: &'static str,
    /// Point field carrying the longitude.
    pub lon: &'static str,
    /// Point field that sets the marker size.
    pub size: &'static str,
    /// Point field that selects the marker color.
    pub color: &'static str,
    /// Point field shown on hover.
    pub hover: &'static str,
    /// Initial zoom level.
    pub zoom: u8,
}

impl MapEncoding {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lat: "latitude",
            lon: "longitude",
            size: "sizeMm",
            color: "riskLevel",
            hover: "city",
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Default for MapEncoding {
    fn default() -> Self {
        Self::new()
    }
}

/// One bar of the rainfall chart as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBarRow {
    /// City the reading came from.
    pub city: String,
    /// Recorded rainfall in millimetres, if present.
    pub rainfall_mm: Option<f64>,
    /// Risk level name.
    pub risk_level: String,
}

impl From<BarRow> for ApiBarRow {
    fn from(row: BarRow) -> Self {
        Self {
            city: row.city,
            rainfall_mm: row.rainfall_mm,
            risk_level: row.risk_level.to_string(),
        }
    }
}

/// Bar chart endpoint response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBarChart {
    /// Whether the chart has data.
    pub status: ChartStatus,
    /// Chart title.
    pub title: String,
    /// How to map row fields onto the chart.
    pub encoding: BarEncoding,
    /// One entry per surviving survey row.
    pub rows: Vec<ApiBarRow>,
}

impl From<BarChartData> for ApiBarChart {
    fn from(data: BarChartData) -> Self {
        Self {
            status: if data.rows.is_empty() {
                ChartStatus::Empty
            } else {
                ChartStatus::Ok
            },
            title: data.title,
            encoding: BarEncoding::new(),
            rows: data.rows.into_iter().map(Into::into).collect(),
        }
    }
}

/// One slice of the risk distribution as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRiskSlice {
    /// Risk level name.
    pub risk_level: String,
    /// How many rows carry this level.
    pub count: u64,
}

impl From<RiskSlice> for ApiRiskSlice {
    fn from(slice: RiskSlice) -> Self {
        Self {
            risk_level: slice.risk_level.to_string(),
            count: slice.count,
        }
    }
}

/// Pie chart endpoint response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPieChart {
    /// Whether the chart has data.
    pub status: ChartStatus,
    /// Chart title.
    pub title: String,
    /// How to map slice fields onto the chart.
    pub encoding: PieEncoding,
    /// Slices in display order.
    pub slices: Vec<ApiRiskSlice>,
}

impl From<PieChartData> for ApiPieChart {
    fn from(data: PieChartData) -> Self {
        Self {
            status: if data.slices.is_empty() {
                ChartStatus::Empty
            } else {
                ChartStatus::Ok
            },
            title: data.title,
            encoding: PieEncoding::new(),
            slices: data.slices.into_iter().map(Into::into).collect(),
        }
    }
}

/// One marker on the risk map as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapPoint {
    /// City the reading came from.
    pub city: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Marker size, rainfall clipped to the display range.
    pub size_mm: f64,
    /// Risk level name.
    pub risk_level: String,
}

impl From<MapPoint> for ApiMapPoint {
    fn from(point: MapPoint) -> Self {
        Self {
            city: point.city,
            latitude: point.latitude,
            longitude: point.longitude,
            size_mm: point.size_mm,
            risk_level: point.risk_level.to_string(),
        }
    }
}

/// Map endpoint response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapChart {
    /// Whether the chart has data.
    pub status: ChartStatus,
    /// Chart title.
    pub title: String,
    /// How to map point fields onto the chart.
    pub encoding: MapEncoding,
    /// Markers in display order.
    pub points: Vec<ApiMapPoint>,
}

impl From<MapChartData> for ApiMapChart {
    fn from(data: MapChartData) -> Self {
        Self {
            status: if data.points.is_empty() {
                ChartStatus::Empty
            } else {
                ChartStatus::Ok
            },
            title: data.title,
            encoding: MapEncoding::new(),
            points: data.points.into_iter().map(Into::into).collect(),
        }
    }
}

impl ApiMapChart {
    /// The payload served in place of a map that failed to generate.
    ///
    /// Served with HTTP 200 so the dashboard renders the message where the
    /// map would be instead of surfacing a transport error.
    #[must_use]
    pub fn error_placeholder() -> Self {
        Self {
            status: ChartStatus::Error,
            title: MAP_ERROR_TITLE.to_string(),
            encoding: MapEncoding::new(),
            points: vec![],
        }
    }
}

/// Summary endpoint response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    /// Week the totals cover.
    pub week: String,
    /// People affected across all cities in the week.
    pub total_affected: u64,
    /// Relief camps across all cities in the week.
    pub total_camps: u64,
    /// `total_affected` with thousands separators, ready to display.
    pub total_affected_label: String,
    /// `total_camps` with thousands separators, ready to display.
    pub total_camps_label: String,
}

impl From<WeekSummary> for ApiSummary {
    fn from(summary: WeekSummary) -> Self {
        Self {
            total_affected_label: group_thousands(summary.total_affected),
            total_camps_label: group_thousands(summary.total_camps),
            week: summary.week,
            total_affected: summary.total_affected,
            total_camps: summary.total_camps,
        }
    }
}

/// Formats `value` with a comma between each group of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use flood_map_survey_models::RiskLevel;

    use super::*;

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn bar_status_tracks_row_presence() {
        let empty = ApiBarChart::from(BarChartData {
            title: "t".to_string(),
            rows: vec![],
        });
        assert_eq!(empty.status, ChartStatus::Empty);

        let populated = ApiBarChart::from(BarChartData {
            title: "t".to_string(),
            rows: vec![BarRow {
                city: "Lahore".to_string(),
                rainfall_mm: Some(120.0),
                risk_level: RiskLevel::High,
            }],
        });
        assert_eq!(populated.status, ChartStatus::Ok);
        assert_eq!(populated.rows[0].risk_level, "High");
    }

    #[test]
    fn map_error_placeholder_has_error_status_and_title() {
        let placeholder = ApiMapChart::error_placeholder();
        assert_eq!(placeholder.status, ChartStatus::Error);
        assert_eq!(placeholder.title, MAP_ERROR_TITLE);
        assert!(placeholder.points.is_empty());
    }

    #[test]
    fn summary_labels_are_grouped() {
        let api = ApiSummary::from(WeekSummary {
            week: "Week 1".to_string(),
            total_affected: 182_500,
            total_camps: 240,
        });
        assert_eq!(api.total_affected_label, "182,500");
        assert_eq!(api.total_camps_label, "240");
    }
}
