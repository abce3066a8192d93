//! Plain-text run summary printed to stdout.

use analyzer_core::formatting::format_number;
use analyzer_core::models::BackupRecord;
use analyzer_data::analysis::BackupAnalysis;

/// Shown when the backup has no export timestamp or user name.
pub const UNKNOWN: &str = "unknown";

/// Console summary of one analyzed backup.
///
/// Renders, in order:
///
/// 1. `Backup loaded: <exported_at>`
/// 2. `User: <name>`
/// 3. An empty line.
/// 4. `Sessions: <logged> logged, <planned> planned, <completed> completed`
/// 5. One `  <lift>: <first>kg → <last>kg (<n> entries)` line per lift.
pub struct Summary<'a> {
    pub record: &'a BackupRecord,
    pub analysis: &'a BackupAnalysis,
}

impl<'a> Summary<'a> {
    pub fn new(record: &'a BackupRecord, analysis: &'a BackupAnalysis) -> Self {
        Self { record, analysis }
    }

    pub fn to_lines(&self) -> Vec<String> {
        let stats = &self.analysis.sessions;
        let mut lines = vec![
            format!(
                "Backup loaded: {}",
                self.record.exported_at().unwrap_or(UNKNOWN)
            ),
            format!("User: {}", self.record.user_name().unwrap_or(UNKNOWN)),
            String::new(),
            format!(
                "Sessions: {} logged, {} planned, {} completed",
                stats.total_logged, stats.total_planned, stats.completed_planned
            ),
        ];

        for history in self.analysis.max_loads.iter() {
            if let (Some(first), Some(last)) = (history.first(), history.last()) {
                lines.push(format!(
                    "  {}: {}kg → {}kg ({} entries)",
                    history.lift,
                    format_number(first.value),
                    format_number(last.value),
                    history.entries.len()
                ));
            }
        }

        lines
    }
}

/// Print the summary lines for `record` to stdout.
pub fn print_summary(record: &BackupRecord, analysis: &BackupAnalysis) {
    for line in Summary::new(record, analysis).to_lines() {
        println!("{}", line);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_data::analysis::analyze_backup;
    use serde_json::json;

    fn lines_for(doc: serde_json::Value) -> Vec<String> {
        let record: BackupRecord = serde_json::from_value(doc).unwrap();
        let analysis = analyze_backup(&record);
        Summary::new(&record, &analysis).to_lines()
    }

    #[test]
    fn test_summary_lift_progression_line() {
        let lines = lines_for(json!({
            "meta": {"exported_at": "2024-03-10T12:00:00Z"},
            "user": {"name": "Harry"},
            "one_rms": [
                {"lift": "squat", "date": "2024-03-01", "value_kg": 120},
                {"lift": "squat", "date": "2024-01-01", "value_kg": 100},
            ],
        }));

        assert_eq!(
            lines,
            vec![
                "Backup loaded: 2024-03-10T12:00:00Z",
                "User: Harry",
                "",
                "Sessions: 0 logged, 0 planned, 0 completed",
                "  squat: 100kg → 120kg (2 entries)",
            ]
        );
    }

    #[test]
    fn test_summary_unknown_defaults() {
        let lines = lines_for(json!({}));
        assert_eq!(lines[0], "Backup loaded: unknown");
        assert_eq!(lines[1], "User: unknown");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_summary_session_counts_and_decimal_loads() {
        let lines = lines_for(json!({
            "one_rms": [{"lift": "bench", "date": "2024-01-01", "value_kg": 82.5}],
            "logged_sessions": [{"date": "2024-01-02"}, {"date": "2024-01-04"}],
            "planned_sessions": [
                {"date": "2024-01-02", "completed": true},
                {"date": "2024-01-04", "completed": 0},
                {"date": "2024-01-06"},
            ],
        }));

        assert_eq!(lines[3], "Sessions: 2 logged, 3 planned, 1 completed");
        assert_eq!(lines[4], "  bench: 82.5kg → 82.5kg (1 entries)");
    }
}
