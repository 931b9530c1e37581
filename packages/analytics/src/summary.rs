//! Week summary totals.

use flood_map_analytics_models::WeekSummary;
use flood_map_survey_models::SurveyRecord;

/// Sums affected people and relief camps across every row of `week`.
///
/// The summary is deliberately week-scoped only; unlike the charts it
/// ignores any city selection, so the cards always describe the whole week.
/// A week with no rows sums to zero on both totals.
#[must_use]
pub fn week_summary(records: &[SurveyRecord], week: &str) -> WeekSummary {
    let mut total_affected = 0;
    let mut total_camps = 0;

    for record in records.iter().filter(|r| r.week == week) {
        total_affected += record.affected_people;
        total_camps += record.relief_camps;
    }

    WeekSummary {
        week: week.to_string(),
        total_affected,
        total_camps,
    }
}
