//! PNG chart reports.
//!
//! Charting is an optional capability: it is compiled in with the `charts`
//! feature (on by default). Without it [`write_charts`] returns
//! [`ChartOutcome::Unavailable`] and the caller carries on with the CSV
//! reports alone.

use std::path::{Path, PathBuf};

use analyzer_core::error::Result;
use analyzer_core::formatting::{date_portion, title_case};
use analyzer_data::aggregator::{MaxLoadHistory, MuscleVolume};
use analyzer_data::analysis::BackupAnalysis;
use tracing::debug;

#[cfg(feature = "charts")]
mod render;

pub const RM_PROGRESSION_PNG: &str = "rm_progression.png";
pub const VOLUME_BY_MUSCLE_PNG: &str = "volume_by_muscle.png";

/// Fallback series color for lifts without a fixed one.
const DEFAULT_LIFT_COLOR: (u8, u8, u8) = (0x88, 0x88, 0x88);

/// What [`write_charts`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// Built without the `charts` feature; nothing was drawn.
    Unavailable,
    /// Charts written, in drawing order.
    Rendered(Vec<PathBuf>),
}

/// One line of the 1RM progression chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionSeries {
    /// Legend label (title-cased lift name).
    pub label: String,
    pub color: (u8, u8, u8),
    /// `(date category index, load)` pairs in date order.
    pub points: Vec<(u32, f64)>,
}

/// Whether this build can draw charts.
pub fn charts_available() -> bool {
    cfg!(feature = "charts")
}

/// Draw the progression and volume charts into `output_dir`.
///
/// The volume chart is left out when no muscle has a nonzero total.
pub fn write_charts(analysis: &BackupAnalysis, output_dir: &Path) -> Result<ChartOutcome> {
    if !charts_available() {
        debug!("Built without the charts feature, skipping PNG output");
        return Ok(ChartOutcome::Unavailable);
    }

    crate::csv_export::ensure_output_dir(output_dir)?;
    render_all(analysis, output_dir).map(ChartOutcome::Rendered)
}

/// Fixed colors for the competition lifts.
pub fn lift_color(lift: &str) -> (u8, u8, u8) {
    match lift {
        "bench" => (0x3b, 0x82, 0xf6),
        "squat" => (0xf5, 0x9e, 0x0b),
        "deadlift" => (0xef, 0x44, 0x44),
        _ => DEFAULT_LIFT_COLOR,
    }
}

/// Build the categorical date axis and one series per lift with entries.
///
/// Dates are truncated to their first 10 characters and ordered as strings.
pub fn progression_series(history: &MaxLoadHistory) -> (Vec<String>, Vec<ProgressionSeries>) {
    let mut dates: Vec<String> = history
        .iter()
        .flat_map(|h| h.entries.iter().map(|e| date_portion(&e.date).to_string()))
        .collect();
    dates.sort();
    dates.dedup();

    let series = history
        .iter()
        .filter(|h| !h.entries.is_empty())
        .map(|h| ProgressionSeries {
            label: title_case(&h.lift),
            color: lift_color(&h.lift),
            points: h
                .entries
                .iter()
                .filter_map(|e| {
                    let idx = dates.binary_search_by(|d| d.as_str().cmp(date_portion(&e.date))).ok()?;
                    Some((idx as u32, e.value))
                })
                .collect(),
        })
        .collect();

    (dates, series)
}

/// Muscles with a nonzero total, in insertion order.
pub fn volume_bars(volume: &MuscleVolume) -> Vec<(&str, u64)> {
    volume.iter().filter(|(_, sets)| *sets > 0).collect()
}

#[cfg(feature = "charts")]
fn render_all(analysis: &BackupAnalysis, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);

    let (dates, series) = progression_series(&analysis.max_loads);
    let path = output_dir.join(RM_PROGRESSION_PNG);
    render::draw_progression(&path, &dates, &series)?;
    written.push(path);

    let bars = volume_bars(&analysis.volume);
    if bars.is_empty() {
        debug!("No muscle volume recorded, skipping {}", VOLUME_BY_MUSCLE_PNG);
    } else {
        let path = output_dir.join(VOLUME_BY_MUSCLE_PNG);
        render::draw_volume_bars(&path, &bars)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(not(feature = "charts"))]
fn render_all(_analysis: &BackupAnalysis, _output_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(Vec::new())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
