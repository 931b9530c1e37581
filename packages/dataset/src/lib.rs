#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory store for the flood survey dataset.
//!
//! The dataset is a plain CSV file loaded once at process startup and held
//! read-only for the process lifetime. Alongside the rows, the store caches
//! the distinct sorted week and city values used to populate the dashboard's
//! two filter controls. There is no update path — a changed file means a
//! restart.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flood_map_survey_models::SurveyRecord;
use thiserror::Error;

/// Errors that can occur while loading the survey dataset.
///
/// Any of these is fatal at startup: the dashboard cannot run without a
/// well-formed, non-empty table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading the dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid CSV, or a strict column failed to parse.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but contains no data rows.
    #[error("dataset contains no rows")]
    Empty,
}

/// The loaded survey table plus cached filter options.
///
/// Immutable after construction; filtering elsewhere produces derived views
/// over `records()`, never mutation of this store.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    /// Rows in file order.
    records: Vec<SurveyRecord>,
    /// Distinct week labels, sorted ascending.
    weeks: Vec<String>,
    /// Distinct city names, sorted ascending.
    cities: Vec<String>,
}

impl SurveyDataset {
    /// Loads the dataset from a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be opened, is not valid
    /// CSV, has a strict column that fails to parse, or contains no rows.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;

        log::info!(
            "Loaded {} survey records ({} weeks, {} cities) from {}",
            dataset.records.len(),
            dataset.weeks.len(),
            dataset.cities.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Parses the dataset from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the input is not valid CSV, a strict
    /// column fails to parse, or no data rows are present.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: SurveyRecord = result?;
            records.push(record);
        }

        Self::from_records(records)
    }

    fn from_records(records: Vec<SurveyRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let weeks = distinct_sorted(records.iter().map(|r| r.week.as_str()));
        let cities = distinct_sorted(records.iter().map(|r| r.city.as_str()));

        Ok(Self {
            records,
            weeks,
            cities,
        })
    }

    /// All rows, in file order.
    #[must_use]
    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    /// Distinct week labels present in the dataset, sorted ascending.
    #[must_use]
    pub fn weeks(&self) -> &[String] {
        &self.weeks
    }

    /// Distinct city names present in the dataset, sorted ascending.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of rows in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collects the distinct values of an iterator into a sorted `Vec`.
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::to_owned)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use flood_map_survey_models::RiskLevel;

    use super::*;

    const SAMPLE: &str = "\
City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude
Lahore,Week 2,80.5,Medium,12000,8,31.5204,74.3587
Karachi,Week 1,145.0,High,56000,21,24.8607,67.0011
Lahore,Week 1,60.0,Low,4000,2,31.5204,74.3587
";

    #[test]
    fn loads_rows_in_file_order() {
        let dataset = SurveyDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].city, "Lahore");
        assert_eq!(dataset.records()[0].week, "Week 2");
        assert_eq!(dataset.records()[1].city, "Karachi");
        assert_eq!(dataset.records()[2].risk_level, RiskLevel::Low);
    }

    #[test]
    fn caches_distinct_sorted_weeks_and_cities() {
        let dataset = SurveyDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.weeks(), ["Week 1", "Week 2"]);
        assert_eq!(dataset.cities(), ["Karachi", "Lahore"]);
    }

    #[test]
    fn coerces_unparsable_coordinates_to_missing() {
        let csv = "\
City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude
Sukkur,Week 1,95.0,High,30000,12,N/A,68.8574
";
        let dataset = SurveyDataset::from_reader(csv.as_bytes()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, Some(68.8574));
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn coerces_non_finite_coordinates_to_missing() {
        let csv = "\
City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude
Quetta,Week 1,20.0,Low,500,1,NaN,inf
";
        let dataset = SurveyDataset::from_reader(csv.as_bytes()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
    }

    #[test]
    fn treats_empty_rainfall_as_absent() {
        let csv = "\
City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude
Multan,Week 1,,Low,900,1,30.1575,71.5249
";
        let dataset = SurveyDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].rainfall_mm, None);
    }

    #[test]
    fn rejects_malformed_strict_columns() {
        let csv = "\
City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude
Multan,Week 1,55.0,Low,lots,1,30.1575,71.5249
";
        let err = SurveyDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn rejects_empty_dataset() {
        let csv =
            "City,Week,Rainfall (mm),Flood Risk Level,Affected People,Relief Camps,Latitude,Longitude\n";
        let err = SurveyDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let err = SurveyDataset::load(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
