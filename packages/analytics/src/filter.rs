//! The shared week/city filter predicate.
//!
//! All three chart views narrow the dataset through this single function so
//! they can never disagree about what "the selected data" means. The summary
//! cards deliberately bypass the city restriction (see [`crate::summary`]).

use flood_map_survey_models::SurveyRecord;

/// Returns the rows matching `week`, optionally restricted to `city`.
///
/// `city` of `None` means "all cities" — the absent selection is the only
/// representation of that state; no sentinel value exists. Both comparisons
/// are exact string equality. Row order follows the source slice, and the
/// source is never modified.
#[must_use]
pub fn filter_rows<'a>(
    records: &'a [SurveyRecord],
    week: &str,
    city: Option<&str>,
) -> Vec<&'a SurveyRecord> {
    records
        .iter()
        .filter(|r| r.week == week)
        .filter(|r| city.is_none_or(|c| r.city == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use flood_map_survey_models::RiskLevel;

    use super::*;

    fn record(city: &str, week: &str) -> SurveyRecord {
        SurveyRecord {
            city: city.to_owned(),
            week: week.to_owned(),
            rainfall_mm: Some(100.0),
            risk_level: RiskLevel::Medium,
            affected_people: 1000,
            relief_camps: 5,
            latitude: Some(30.0),
            longitude: Some(70.0),
        }
    }

    fn two_weeks_two_cities() -> Vec<SurveyRecord> {
        vec![
            record("Lahore", "W1"),
            record("Karachi", "W1"),
            record("Lahore", "W2"),
            record("Karachi", "W2"),
        ]
    }

    #[test]
    fn week_only_returns_all_cities_for_that_week() {
        let records = two_weeks_two_cities();
        let rows = filter_rows(&records, "W1", None);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.week == "W1"));
        // Source order preserved.
        assert_eq!(rows[0].city, "Lahore");
        assert_eq!(rows[1].city, "Karachi");
    }

    #[test]
    fn city_restricts_the_week_subset() {
        let records = two_weeks_two_cities();
        let rows = filter_rows(&records, "W1", Some("Lahore"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "Lahore");
        assert_eq!(rows[0].week, "W1");
    }

    #[test]
    fn city_subset_is_contained_in_week_subset() {
        let records = two_weeks_two_cities();
        let week_rows = filter_rows(&records, "W2", None);
        let city_rows = filter_rows(&records, "W2", Some("Karachi"));
        assert!(
            city_rows
                .iter()
                .all(|r| week_rows.iter().any(|w| std::ptr::eq(*w, *r)))
        );
    }

    #[test]
    fn unmatched_filters_yield_empty() {
        let records = two_weeks_two_cities();
        assert!(filter_rows(&records, "W3", None).is_empty());
        assert!(filter_rows(&records, "W1", Some("Quetta")).is_empty());
    }

    #[test]
    fn comparisons_are_exact() {
        let records = two_weeks_two_cities();
        assert!(filter_rows(&records, "w1", None).is_empty());
        assert!(filter_rows(&records, "W1", Some("lahore")).is_empty());
    }
}
