//! Aggregations over a loaded backup: 1RM history per lift, session counts
//! and estimated volume per muscle group.
//!
//! Every aggregation borrows the [`BackupRecord`] and derives its result
//! independently, so they can run in any order.

use std::collections::{BTreeSet, HashMap};

use analyzer_core::models::BackupRecord;
use analyzer_core::muscles::muscles_for;
use tracing::debug;

// ── MaxLoadHistory ────────────────────────────────────────────────────────────

/// One recorded 1RM value for a lift.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxLoadPoint {
    /// Recorded date as written in the backup (`""` when absent).
    pub date: String,
    /// Load in kilograms (`0` when absent).
    pub value: f64,
    /// Reason text (`""` when absent).
    pub reason: String,
}

/// All recorded 1RM values of a single lift, sorted by date.
#[derive(Debug, Clone)]
pub struct LiftHistory {
    pub lift: String,
    pub entries: Vec<MaxLoadPoint>,
}

impl LiftHistory {
    /// Earliest recorded entry.
    pub fn first(&self) -> Option<&MaxLoadPoint> {
        self.entries.first()
    }

    /// Most recent recorded entry.
    pub fn last(&self) -> Option<&MaxLoadPoint> {
        self.entries.last()
    }
}

/// Per-lift 1RM history, lifts kept in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct MaxLoadHistory {
    lifts: Vec<LiftHistory>,
}

impl MaxLoadHistory {
    pub fn iter(&self) -> impl Iterator<Item = &LiftHistory> {
        self.lifts.iter()
    }

    /// History of `lift`, if any entry was recorded for it.
    pub fn get(&self, lift: &str) -> Option<&LiftHistory> {
        self.lifts.iter().find(|h| h.lift == lift)
    }

    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }
}

// ── SessionStats ──────────────────────────────────────────────────────────────

/// Counts of logged and planned sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total_logged: usize,
    pub total_planned: usize,
    /// Planned sessions whose `completed` flag is truthy.
    pub completed_planned: usize,
    /// Distinct logged-session dates, sorted as strings.
    pub logged_dates: Vec<String>,
}

// ── MuscleVolume ──────────────────────────────────────────────────────────────

/// Completed sets per muscle group.
///
/// Muscles are kept in the order they first received a contribution, which is
/// the tie-break order for [`MuscleVolume::sorted_by_sets`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MuscleVolume {
    totals: Vec<(String, u64)>,
}

impl MuscleVolume {
    /// Add `sets` to `muscle`, registering it on first use.
    fn add(&mut self, muscle: &str, sets: u64) {
        match self.totals.iter_mut().find(|(m, _)| m == muscle) {
            Some((_, total)) => *total = total.saturating_add(sets),
            None => self.totals.push((muscle.to_string(), sets)),
        }
    }

    /// Total sets for `muscle`; `0` when the muscle was never trained.
    pub fn get(&self, muscle: &str) -> u64 {
        self.totals
            .iter()
            .find(|(m, _)| m == muscle)
            .map_or(0, |(_, total)| *total)
    }

    /// Muscles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(m, t)| (m.as_str(), *t))
    }

    /// Muscles by descending total sets; ties keep insertion order.
    pub fn sorted_by_sets(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    /// Sum over all muscles.
    pub fn total_sets(&self) -> u64 {
        self.totals.iter().fold(0u64, |acc, (_, t)| acc.saturating_add(*t))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

// ── BackupAggregator ──────────────────────────────────────────────────────────

/// Stateless helper grouping backup records into report-ready summaries.
pub struct BackupAggregator;

impl BackupAggregator {
    /// Group `one_rms` by lift, each lift's entries sorted by date.
    ///
    /// Dates are compared as plain strings, so ISO-8601 input sorts
    /// chronologically and a missing date sorts first. The sort is stable.
    pub fn max_load_history(record: &BackupRecord) -> MaxLoadHistory {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut lifts: Vec<LiftHistory> = Vec::new();

        for rm in &record.one_rms {
            let slot = *index.entry(rm.lift.as_str()).or_insert_with(|| {
                lifts.push(LiftHistory {
                    lift: rm.lift.clone(),
                    entries: Vec::new(),
                });
                lifts.len() - 1
            });

            if rm.value_kg.is_none() {
                debug!("1RM entry for {} on {:?} has no value, using 0", rm.lift, rm.date());
            }

            lifts[slot].entries.push(MaxLoadPoint {
                date: rm.date().to_string(),
                value: rm.value(),
                reason: rm.reason().to_string(),
            });
        }

        for history in &mut lifts {
            history.entries.sort_by(|a, b| a.date.cmp(&b.date));
        }

        MaxLoadHistory { lifts }
    }

    /// Count logged, planned and completed sessions.
    pub fn session_stats(record: &BackupRecord) -> SessionStats {
        let logged_dates: BTreeSet<&str> =
            record.logged_sessions.iter().map(|s| s.date()).collect();

        SessionStats {
            total_logged: record.logged_sessions.len(),
            total_planned: record.planned_sessions.len(),
            completed_planned: record
                .planned_sessions
                .iter()
                .filter(|p| p.is_completed())
                .count(),
            logged_dates: logged_dates.into_iter().map(str::to_string).collect(),
        }
    }

    /// Sum completed sets per muscle group over every logged exercise.
    ///
    /// Exercises missing from the muscle table are skipped.
    pub fn muscle_volume(record: &BackupRecord) -> MuscleVolume {
        let mut volume = MuscleVolume::default();

        for session in &record.logged_sessions {
            for ex in &session.exercises {
                let Some(muscles) = muscles_for(&ex.exercise) else {
                    debug!(
                        "No muscle mapping for {:?} on {:?}, skipping {} sets",
                        ex.exercise,
                        session.date(),
                        ex.sets_completed
                    );
                    continue;
                };
                for muscle in muscles {
                    volume.add(muscle, ex.sets_completed);
                }
            }
        }

        volume
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
