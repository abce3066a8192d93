//! Backup file loading.
//!
//! Reads a JSON backup exported by the tracking app and deserializes it into
//! a [`BackupRecord`]. The document is small and read in one go.

use std::path::Path;

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::BackupRecord;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse the backup at `path`.
///
/// A missing or unreadable file yields [`AnalyzerError::FileRead`]; a file
/// that is not a JSON object of the expected shape yields
/// [`AnalyzerError::JsonParse`].
pub fn load_backup(path: &Path) -> Result<BackupRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let record = parse_backup(&content)?;

    debug!(
        "Loaded {}: {} 1RM entries, {} logged sessions, {} planned sessions",
        path.display(),
        record.one_rms.len(),
        record.logged_sessions.len(),
        record.planned_sessions.len(),
    );

    Ok(record)
}

/// Parse an in-memory backup document.
pub fn parse_backup(content: &str) -> Result<BackupRecord> {
    Ok(serde_json::from_str(content)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_backup(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_backup_basic() {
        let dir = TempDir::new().unwrap();
        let doc = serde_json::json!({
            "meta": {"exported_at": "2024-04-01T08:00:00Z"},
            "user": {"name": "Harry"},
            "one_rms": [{"lift": "squat", "date": "2024-01-01", "value_kg": 100}],
            "logged_sessions": [{"date": "2024-01-02", "exercises": []}],
            "planned_sessions": [{"completed": true}],
        });
        let path = write_backup(dir.path(), "backup.json", &doc.to_string());

        let record = load_backup(&path).unwrap();
        assert_eq!(record.exported_at(), Some("2024-04-01T08:00:00Z"));
        assert_eq!(record.user_name(), Some("Harry"));
        assert_eq!(record.one_rms.len(), 1);
        assert_eq!(record.logged_sessions.len(), 1);
        assert_eq!(record.planned_sessions.len(), 1);
    }

    #[test]
    fn test_load_backup_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_backup(&path).unwrap_err();
        match err {
            AnalyzerError::FileRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_load_backup_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(dir.path(), "broken.json", "{\"one_rms\": [");

        let err = load_backup(&path).unwrap_err();
        assert!(matches!(err, AnalyzerError::JsonParse(_)));
    }

    #[test]
    fn test_parse_backup_wrong_top_level_type() {
        let err = parse_backup("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AnalyzerError::JsonParse(_)));
    }

    #[test]
    fn test_parse_backup_empty_object() {
        let record = parse_backup("{}").unwrap();
        assert!(record.one_rms.is_empty());
        assert!(record.meta.is_none());
    }

    #[test]
    fn test_parse_backup_ignores_unknown_sections() {
        let record = parse_backup(
            r#"{"settings": [{"key": "theme"}], "competition": [], "history": [], "exercises": []}"#,
        )
        .unwrap();
        assert!(record.logged_sessions.is_empty());
    }
}
