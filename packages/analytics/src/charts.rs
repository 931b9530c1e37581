//! Chart payload builders.
//!
//! Each builder turns a filtered row set into the data for one dashboard
//! chart. Builders never touch the filter logic themselves; callers narrow
//! the dataset with [`crate::filter::filter_rows`] first and hand the result
//! in. An empty row set is a valid input and produces a titled empty payload
//! rather than an error.

use std::collections::BTreeMap;

use flood_map_analytics_models::{
    BarChartData, BarRow, MapChartData, MapPoint, PieChartData, RiskSlice,
};
use flood_map_survey_models::SurveyRecord;

use crate::AnalyticsError;

/// Title used when a chart has no rows to show.
pub const NO_DATA_TITLE: &str = "No data available for selected filters.";
/// Title used when every row in scope lacks usable coordinates.
pub const NO_MAP_DATA_TITLE: &str = "No map data for selected filters.";
/// Title of the risk distribution pie chart.
pub const PIE_TITLE: &str = "Flood Risk Distribution";
/// Title of the geographic risk map.
pub const MAP_TITLE: &str = "Flood Risk Map";

/// Lower bound applied to marker sizes on the map, in millimetres of rain.
pub const RAINFALL_SIZE_MIN_MM: f64 = 0.0;
/// Upper bound applied to marker sizes on the map, in millimetres of rain.
pub const RAINFALL_SIZE_MAX_MM: f64 = 200.0;

fn city_label(city: Option<&str>) -> &str {
    city.unwrap_or("All Cities")
}

/// Builds the per-city rainfall bar chart for the given rows.
///
/// Rows pass through unaggregated; one bar per row, in source order. Rows
/// with missing rainfall keep their `None` so the front end can decide how
/// to draw them. The title names the selected city (or "All Cities") and
/// the selected week.
#[must_use]
pub fn bar_chart(rows: &[&SurveyRecord], week: &str, city: Option<&str>) -> BarChartData {
    if rows.is_empty() {
        return BarChartData {
            title: NO_DATA_TITLE.to_string(),
            rows: vec![],
        };
    }

    BarChartData {
        title: format!("{} - {week}", city_label(city)),
        rows: rows
            .iter()
            .map(|r| BarRow {
                city: r.city.clone(),
                rainfall_mm: r.rainfall_mm,
                risk_level: r.risk_level.clone(),
            })
            .collect(),
    }
}

/// Builds the risk level frequency pie chart for the given rows.
///
/// Counts how many rows carry each risk level. Levels with zero rows are
/// omitted entirely. Slices are ordered by descending count, with ties
/// broken by risk level severity so the output is deterministic.
#[must_use]
pub fn pie_chart(rows: &[&SurveyRecord]) -> PieChartData {
    if rows.is_empty() {
        return PieChartData {
            title: NO_DATA_TITLE.to_string(),
            slices: vec![],
        };
    }

    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.risk_level.clone()).or_insert(0_u64) += 1;
    }

    let mut slices: Vec<RiskSlice> = counts
        .into_iter()
        .map(|(risk_level, count)| RiskSlice { risk_level, count })
        .collect();
    slices.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.risk_level.cmp(&b.risk_level))
    });

    PieChartData {
        title: PIE_TITLE.to_string(),
        slices,
    }
}

/// Builds the geographic scatter map for the given rows.
///
/// Rows without both coordinates are silently dropped. Marker size is the
/// row's rainfall clipped to `[RAINFALL_SIZE_MIN_MM, RAINFALL_SIZE_MAX_MM]`,
/// with missing rainfall treated as the minimum. If every surviving row was
/// dropped the payload carries [`NO_MAP_DATA_TITLE`] and no points.
///
/// # Errors
///
/// * If a row carries a coordinate outside the WGS84 range (latitude beyond
///   +/-90 or longitude beyond +/-180), the chart cannot be rendered and
///   `AnalyticsError::CoordinateOutOfRange` is returned.
pub fn map_chart(rows: &[&SurveyRecord]) -> Result<MapChartData, AnalyticsError> {
    let mut points = Vec::with_capacity(rows.len());

    for row in rows {
        let Some((latitude, longitude)) = row.coordinates() else {
            continue;
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AnalyticsError::CoordinateOutOfRange {
                city: row.city.clone(),
                latitude,
                longitude,
            });
        }
        points.push(MapPoint {
            city: row.city.clone(),
            latitude,
            longitude,
            size_mm: row
                .rainfall_mm
                .unwrap_or(RAINFALL_SIZE_MIN_MM)
                .clamp(RAINFALL_SIZE_MIN_MM, RAINFALL_SIZE_MAX_MM),
            risk_level: row.risk_level.clone(),
        });
    }

    if points.is_empty() {
        return Ok(MapChartData {
            title: NO_MAP_DATA_TITLE.to_string(),
            points: vec![],
        });
    }

    Ok(MapChartData {
        title: MAP_TITLE.to_string(),
        points,
    })
}
