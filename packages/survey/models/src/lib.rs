#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flood survey record and risk level taxonomy types.
//!
//! This crate defines the canonical row type for the flood survey dataset
//! and the risk level taxonomy shared across the entire flood-map system.
//! The dataset is a plain CSV export, so the row type carries the exact
//! column-header renames and the lenient numeric coercions the source data
//! requires.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};

/// Assessed flood risk level for a surveyed city and week.
///
/// The survey column is free text in practice, so the taxonomy stays open:
/// the three standard levels parse case-insensitively and anything else is
/// preserved verbatim in [`RiskLevel::Other`]. Ordering follows severity
/// (`Low < Medium < High`), with non-standard labels sorting last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RiskLevel {
    /// Low flood risk.
    Low,
    /// Medium flood risk.
    Medium,
    /// High flood risk.
    High,
    /// A label outside the standard taxonomy, kept as-is.
    #[strum(default)]
    Other(String),
}

impl Serialize for RiskLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialized as the display string so `Other` round-trips.
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        Ok(trimmed
            .parse()
            .unwrap_or_else(|_| Self::Other(trimmed.to_owned())))
    }
}

/// One row of the flood survey dataset.
///
/// Field renames match the CSV column headers exactly. Latitude and
/// longitude use the lenient coercion: unparsable or non-finite entries
/// become `None` instead of failing the row, so bad coordinates never leak
/// into numeric operations downstream. Every other column is strict — a
/// malformed value there makes the whole file unloadable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurveyRecord {
    /// City the survey row describes.
    #[serde(rename = "City")]
    pub city: String,
    /// Week label the observation belongs to (e.g. "Week 1").
    #[serde(rename = "Week")]
    pub week: String,
    /// Recorded rainfall in millimetres; `None` when the cell is empty or
    /// the parsed value is non-finite.
    #[serde(rename = "Rainfall (mm)", deserialize_with = "parse_rainfall")]
    pub rainfall_mm: Option<f64>,
    /// Assessed flood risk level.
    #[serde(rename = "Flood Risk Level")]
    pub risk_level: RiskLevel,
    /// Number of people affected.
    #[serde(rename = "Affected People")]
    pub affected_people: u64,
    /// Number of relief camps operating.
    #[serde(rename = "Relief Camps")]
    pub relief_camps: u64,
    /// Survey point latitude; `None` when missing or unparsable.
    #[serde(rename = "Latitude", deserialize_with = "coerce_coordinate")]
    pub latitude: Option<f64>,
    /// Survey point longitude; `None` when missing or unparsable.
    #[serde(rename = "Longitude", deserialize_with = "coerce_coordinate")]
    pub longitude: Option<f64>,
}

impl SurveyRecord {
    /// Returns `(latitude, longitude)` when both coordinates are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Deserializes a coordinate cell, coercing anything missing, unparsable,
/// or non-finite to `None` rather than failing the row.
fn coerce_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

/// Deserializes the rainfall cell: empty means absent, a parsed non-finite
/// value is treated as absent, and anything else must parse as `f64`.
fn parse_rainfall<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => {
            let value: f64 = s.parse().map_err(serde::de::Error::custom)?;
            Ok(value.is_finite().then_some(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_levels_case_insensitively() {
        assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn keeps_unknown_levels_verbatim() {
        assert_eq!(
            "Severe".parse::<RiskLevel>().unwrap(),
            RiskLevel::Other("Severe".to_owned())
        );
    }

    #[test]
    fn displays_variant_names() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert_eq!(RiskLevel::Other("Severe".to_owned()).to_string(), "Severe");
    }

    #[test]
    fn orders_by_severity_with_other_last() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Other("Severe".to_owned()));
    }

    #[test]
    fn coordinates_requires_both_fields() {
        let mut record = SurveyRecord {
            city: "Lahore".to_owned(),
            week: "Week 1".to_owned(),
            rainfall_mm: Some(120.0),
            risk_level: RiskLevel::High,
            affected_people: 1200,
            relief_camps: 4,
            latitude: Some(31.5204),
            longitude: Some(74.3587),
        };
        assert_eq!(record.coordinates(), Some((31.5204, 74.3587)));

        record.longitude = None;
        assert_eq!(record.coordinates(), None);
    }
}
