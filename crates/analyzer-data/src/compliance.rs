//! Weekly set compliance: prescribed sets versus sets actually logged.
//!
//! Sessions are bucketed by the Monday of their week. Planned sets come from
//! `planned_sessions[].exercises[].sets`, logged sets from
//! `logged_sessions[].exercises[].sets_completed`.

use std::collections::BTreeMap;

use analyzer_core::formatting::{date_portion, percentage};
use analyzer_core::models::BackupRecord;
use chrono::{Datelike, Days, NaiveDate};
use tracing::warn;

/// Planned versus logged work for one Monday–Sunday week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyCompliance {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub planned_sets: u64,
    pub logged_sets: u64,
    pub sessions_planned: u32,
    pub sessions_logged: u32,
}

impl WeeklyCompliance {
    fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            week_end: week_start + Days::new(6),
            planned_sets: 0,
            logged_sets: 0,
            sessions_planned: 0,
            sessions_logged: 0,
        }
    }

    /// Logged sets as a whole-number percentage of planned sets.
    ///
    /// `0` when nothing was planned that week.
    pub fn compliance_pct(&self) -> u64 {
        percentage(self.logged_sets as f64, self.planned_sets as f64, 0) as u64
    }
}

/// Build the per-week compliance table, weeks in ascending order.
///
/// Sessions whose date does not start with a `YYYY-MM-DD` date are left out.
pub fn weekly_compliance(record: &BackupRecord) -> Vec<WeeklyCompliance> {
    let mut weeks: BTreeMap<NaiveDate, WeeklyCompliance> = BTreeMap::new();
    let mut skipped = 0usize;

    for planned in &record.planned_sessions {
        let Some(start) = week_start(planned.date()) else {
            skipped += 1;
            continue;
        };
        let week = weeks
            .entry(start)
            .or_insert_with(|| WeeklyCompliance::new(start));
        week.sessions_planned += 1;
        week.planned_sets = planned
            .exercises
            .iter()
            .fold(week.planned_sets, |acc, e| acc.saturating_add(e.sets));
    }

    for logged in &record.logged_sessions {
        let Some(start) = week_start(logged.date()) else {
            skipped += 1;
            continue;
        };
        let week = weeks
            .entry(start)
            .or_insert_with(|| WeeklyCompliance::new(start));
        week.sessions_logged += 1;
        week.logged_sets = logged
            .exercises
            .iter()
            .fold(week.logged_sets, |acc, e| acc.saturating_add(e.sets_completed));
    }

    if skipped > 0 {
        warn!("{} sessions without a usable date left out of weekly compliance", skipped);
    }

    weeks.into_values().collect()
}

/// Monday of the week containing `date`, or `None` if it does not parse.
fn week_start(date: &str) -> Option<NaiveDate> {
    let day = NaiveDate::parse_from_str(date_portion(date), "%Y-%m-%d").ok()?;
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-03 is a Wednesday.
        assert_eq!(week_start("2024-01-03"), Some(ymd(2024, 1, 1)));
        assert_eq!(week_start("2024-01-01"), Some(ymd(2024, 1, 1)));
        assert_eq!(week_start("2024-01-07"), Some(ymd(2024, 1, 1)));
        assert_eq!(week_start("2024-01-08T06:00:00Z"), Some(ymd(2024, 1, 8)));
    }

    #[test]
    fn test_week_start_rejects_garbage() {
        assert_eq!(week_start(""), None);
        assert_eq!(week_start("yesterday"), None);
        assert_eq!(week_start("2024-13-01"), None);
    }

    #[test]
    fn test_weekly_compliance_groups_and_sums() {
        let record: BackupRecord = serde_json::from_value(json!({
            "planned_sessions": [
                {"date": "2024-01-01", "exercises": [{"exercise": "Squat", "sets": 5}, {"sets": 3}]},
                {"date": "2024-01-04", "exercises": [{"exercise": "Bench Press", "sets": 4}]},
                {"date": "2024-01-09", "exercises": [{"exercise": "Deadlift", "sets": 3}]},
            ],
            "logged_sessions": [
                {"date": "2024-01-02", "exercises": [{"exercise": "Squat", "sets_completed": 5}]},
                {"date": "2024-01-05", "exercises": [{"exercise": "Bench Press", "sets_completed": 4}]},
            ],
        }))
        .unwrap();

        let weeks = weekly_compliance(&record);
        assert_eq!(weeks.len(), 2);

        let first = &weeks[0];
        assert_eq!(first.week_start, ymd(2024, 1, 1));
        assert_eq!(first.week_end, ymd(2024, 1, 7));
        assert_eq!(first.planned_sets, 12);
        assert_eq!(first.logged_sets, 9);
        assert_eq!(first.sessions_planned, 2);
        assert_eq!(first.sessions_logged, 2);
        assert_eq!(first.compliance_pct(), 75);

        let second = &weeks[1];
        assert_eq!(second.week_start, ymd(2024, 1, 8));
        assert_eq!(second.logged_sets, 0);
        assert_eq!(second.compliance_pct(), 0);
    }

    #[test]
    fn test_weekly_compliance_without_plan_is_zero() {
        let record: BackupRecord = serde_json::from_value(json!({
            "logged_sessions": [
                {"date": "2024-02-06", "exercises": [{"exercise": "Squat", "sets_completed": 5}]},
            ],
        }))
        .unwrap();

        let weeks = weekly_compliance(&record);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].planned_sets, 0);
        assert_eq!(weeks[0].compliance_pct(), 0);
    }

    #[test]
    fn test_weekly_compliance_skips_undated_sessions() {
        let record: BackupRecord = serde_json::from_value(json!({
            "planned_sessions": [{"completed": true}],
            "logged_sessions": [{"date": "soon", "exercises": []}],
        }))
        .unwrap();

        assert!(weekly_compliance(&record).is_empty());
    }

    #[test]
    fn test_weekly_compliance_saturates_large_totals() {
        let record: BackupRecord = serde_json::from_value(json!({
            "planned_sessions": [
                {"date": "2024-01-01", "exercises": [{"sets": u64::MAX}, {"sets": 1}]},
            ],
            "logged_sessions": [
                {"date": "2024-01-02", "exercises": [{"exercise": "Squat", "sets_completed": u64::MAX}]},
                {"date": "2024-01-03", "exercises": [{"exercise": "Squat", "sets_completed": 2}]},
            ],
        }))
        .unwrap();

        let weeks = weekly_compliance(&record);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].planned_sets, u64::MAX);
        assert_eq!(weeks[0].logged_sets, u64::MAX);
        assert_eq!(weeks[0].compliance_pct(), 100);
    }
}
