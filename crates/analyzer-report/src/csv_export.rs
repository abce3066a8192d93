//! Tabular CSV reports.
//!
//! Each report has a fixed header and is rebuilt from scratch on every run,
//! so repeated runs over the same backup produce byte-identical files.
//! Fields are quoted only when they contain a comma, a quote or a newline.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::formatting::{format_number, format_optional};
use analyzer_core::models::LoggedSession;
use analyzer_data::aggregator::{MaxLoadHistory, MuscleVolume};
use analyzer_data::analysis::BackupAnalysis;
use analyzer_data::compliance::WeeklyCompliance;
use analyzer_data::progress::TopSetPoint;
use tracing::debug;

pub const ONE_RM_HISTORY_CSV: &str = "one_rm_history.csv";
pub const LOGGED_SESSIONS_CSV: &str = "logged_sessions.csv";
pub const VOLUME_BY_MUSCLE_CSV: &str = "volume_by_muscle.csv";
pub const WEEKLY_COMPLIANCE_CSV: &str = "weekly_compliance.csv";
pub const TOP_SET_PROGRESS_CSV: &str = "top_set_progress.csv";

// ── Public API ────────────────────────────────────────────────────────────────

/// Create `dir` (and any missing parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| AnalyzerError::FileWrite {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write every CSV report into `output_dir`, returning the written paths in
/// the order they were produced.
pub fn write_csv_reports(
    logged_sessions: &[LoggedSession],
    analysis: &BackupAnalysis,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(output_dir)?;

    let mut written = Vec::with_capacity(5);

    written.push(write_report(output_dir, ONE_RM_HISTORY_CSV, |w| {
        write_one_rm_rows(&analysis.max_loads, w)
    })?);
    written.push(write_report(output_dir, LOGGED_SESSIONS_CSV, |w| {
        write_session_rows(logged_sessions, w)
    })?);
    written.push(write_report(output_dir, VOLUME_BY_MUSCLE_CSV, |w| {
        write_volume_rows(&analysis.volume, w)
    })?);
    written.push(write_report(output_dir, WEEKLY_COMPLIANCE_CSV, |w| {
        write_compliance_rows(&analysis.compliance, w)
    })?);
    written.push(write_report(output_dir, TOP_SET_PROGRESS_CSV, |w| {
        write_top_set_rows(&analysis.top_sets, w)
    })?);

    Ok(written)
}

// ── Row writers ───────────────────────────────────────────────────────────────

/// `lift,date,value_kg,reason`: one row per recorded 1RM.
pub fn write_one_rm_rows<W: Write>(
    history: &MaxLoadHistory,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["lift", "date", "value_kg", "reason"])?;
    for lift in history.iter() {
        for entry in &lift.entries {
            writer.write_record([
                lift.lift.as_str(),
                entry.date.as_str(),
                format_number(entry.value).as_str(),
                entry.reason.as_str(),
            ])?;
        }
    }
    Ok(())
}

/// `date,exercise,sets_completed,rpe,weight_kg`: one row per logged exercise.
pub fn write_session_rows<W: Write>(
    sessions: &[LoggedSession],
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["date", "exercise", "sets_completed", "rpe", "weight_kg"])?;
    for session in sessions {
        for ex in &session.exercises {
            writer.write_record([
                session.date(),
                ex.exercise.as_str(),
                ex.sets_completed.to_string().as_str(),
                format_optional(ex.rpe_actual).as_str(),
                format_optional(ex.planned_weight).as_str(),
            ])?;
        }
    }
    Ok(())
}

/// `muscle,total_sets`: heaviest-trained muscle first.
pub fn write_volume_rows<W: Write>(
    volume: &MuscleVolume,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["muscle", "total_sets"])?;
    for (muscle, sets) in volume.sorted_by_sets() {
        writer.write_record([muscle, sets.to_string().as_str()])?;
    }
    Ok(())
}

pub fn write_compliance_rows<W: Write>(
    weeks: &[WeeklyCompliance],
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record([
        "week_start",
        "week_end",
        "planned_sets",
        "logged_sets",
        "compliance_pct",
        "sessions_planned",
        "sessions_logged",
    ])?;
    for week in weeks {
        writer.write_record([
            week.week_start.to_string(),
            week.week_end.to_string(),
            week.planned_sets.to_string(),
            week.logged_sets.to_string(),
            week.compliance_pct().to_string(),
            week.sessions_planned.to_string(),
            week.sessions_logged.to_string(),
        ])?;
    }
    Ok(())
}

pub fn write_top_set_rows<W: Write>(
    points: &[TopSetPoint],
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["date", "lift", "weight_kg", "reps", "rpe", "e1rm_kg"])?;
    for point in points {
        writer.write_record([
            point.date.clone(),
            point.lift.clone(),
            format_number(point.weight_kg),
            point.reps.to_string(),
            format_optional(point.rpe),
            format_number(point.e1rm_kg),
        ])?;
    }
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Create `dir/name`, hand a CSV writer to `rows`, then flush.
fn write_report<F>(dir: &Path, name: &str, rows: F) -> Result<PathBuf>
where
    F: FnOnce(&mut csv::Writer<File>) -> Result<()>,
{
    let path = dir.join(name);
    let file = File::create(&path).map_err(|source| AnalyzerError::FileWrite {
        path: path.clone(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    rows(&mut writer)?;
    writer.flush().map_err(|source| AnalyzerError::FileWrite {
        path: path.clone(),
        source,
    })?;

    debug!("Wrote {}", path.display());
    Ok(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
