//! Main analysis pipeline for the backup analyzer.
//!
//! Runs every aggregation over a loaded [`BackupRecord`] and bundles the
//! results into a [`BackupAnalysis`] ready for the report layer.

use analyzer_core::models::BackupRecord;
use tracing::info;

use crate::aggregator::{BackupAggregator, MaxLoadHistory, MuscleVolume, SessionStats};
use crate::compliance::{weekly_compliance, WeeklyCompliance};
use crate::progress::{top_set_progress, TopSetPoint};

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`analyze_backup`].
#[derive(Debug, Clone)]
pub struct BackupAnalysis {
    /// 1RM history grouped by lift.
    pub max_loads: MaxLoadHistory,
    /// Logged / planned / completed session counts.
    pub sessions: SessionStats,
    /// Completed sets per muscle group.
    pub volume: MuscleVolume,
    /// Planned versus logged sets per week.
    pub compliance: Vec<WeeklyCompliance>,
    /// Top sets of the main lifts with estimated 1RMs.
    pub top_sets: Vec<TopSetPoint>,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run every aggregation over `record`.
///
/// The aggregations are independent of one another and never fail; missing
/// values have already been defaulted by the data model.
pub fn analyze_backup(record: &BackupRecord) -> BackupAnalysis {
    let max_loads = BackupAggregator::max_load_history(record);
    let sessions = BackupAggregator::session_stats(record);
    let volume = BackupAggregator::muscle_volume(record);
    let compliance = weekly_compliance(record);
    let top_sets = top_set_progress(record);

    info!(
        "Analyzed backup: {} lifts, {} logged sessions, {} muscles, {} weeks, {} top sets",
        max_loads.len(),
        sessions.total_logged,
        volume.len(),
        compliance.len(),
        top_sets.len(),
    );

    BackupAnalysis {
        max_loads,
        sessions,
        volume,
        compliance,
        top_sets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_backup;

    #[test]
    fn test_analyze_backup_full_document() {
        let record = parse_backup(
            r#"{
                "meta": {"exported_at": "2024-03-10T12:00:00Z"},
                "user": {"name": "Harry"},
                "one_rms": [
                    {"lift": "squat", "date": "2024-01-01", "value_kg": 100},
                    {"lift": "squat", "date": "2024-03-01", "value_kg": 120}
                ],
                "planned_sessions": [
                    {"date": "2024-03-04", "completed": true, "exercises": [{"exercise": "Squat", "sets": 5}]}
                ],
                "logged_sessions": [
                    {"date": "2024-03-04", "exercises": [
                        {"exercise": "Squat", "sets_completed": 5, "lift_key": "squat", "is_topset": true,
                         "sets": [{"weight_kg": 110, "reps": 3}]}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let analysis = analyze_backup(&record);
        assert_eq!(analysis.max_loads.len(), 1);
        assert_eq!(analysis.sessions.total_logged, 1);
        assert_eq!(analysis.sessions.completed_planned, 1);
        assert_eq!(analysis.volume.get("quads"), 5);
        assert_eq!(analysis.compliance.len(), 1);
        assert_eq!(analysis.compliance[0].compliance_pct(), 100);
        assert_eq!(analysis.top_sets.len(), 1);
        assert_eq!(analysis.top_sets[0].e1rm_kg, 121.0);
    }

    #[test]
    fn test_analyze_backup_empty() {
        let analysis = analyze_backup(&BackupRecord::default());
        assert!(analysis.max_loads.is_empty());
        assert_eq!(analysis.sessions, SessionStats::default());
        assert!(analysis.volume.is_empty());
        assert!(analysis.compliance.is_empty());
        assert!(analysis.top_sets.is_empty());
    }
}
