//! Top-set progression for the main lifts.
//!
//! Each logged exercise flagged as a top set yields one point: the heaviest
//! logged weight, the most reps and an Epley estimate of the 1RM. Exercises
//! logged without individual sets fall back to the planned weight and reps.

use analyzer_core::models::{BackupRecord, ExerciseRecord};

/// One top set of a main lift.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSetPoint {
    pub date: String,
    pub lift: String,
    pub weight_kg: f64,
    pub reps: u32,
    pub rpe: Option<f64>,
    /// Estimated one-rep max, rounded to 0.1 kg.
    pub e1rm_kg: f64,
}

/// Epley estimate `weight × (1 + reps / 30)`, rounded to one decimal.
pub fn epley_e1rm(weight_kg: f64, reps: u32) -> f64 {
    let raw = weight_kg * (1.0 + f64::from(reps) / 30.0);
    (raw * 10.0).round() / 10.0
}

/// Collect top-set points from every logged session, sorted by date string.
pub fn top_set_progress(record: &BackupRecord) -> Vec<TopSetPoint> {
    let mut points: Vec<TopSetPoint> = record
        .logged_sessions
        .iter()
        .flat_map(|session| {
            session
                .exercises
                .iter()
                .filter_map(move |ex| top_set_point(session.date(), ex))
        })
        .collect();

    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

fn top_set_point(date: &str, ex: &ExerciseRecord) -> Option<TopSetPoint> {
    let lift = ex.lift_key.as_deref().filter(|k| !k.is_empty())?;
    if !ex.is_topset {
        return None;
    }

    let (weight_kg, reps) = if ex.sets.is_empty() {
        (
            ex.planned_weight.unwrap_or(0.0),
            ex.planned_reps.unwrap_or(0),
        )
    } else {
        let weight = ex
            .sets
            .iter()
            .map(|s| s.weight_kg.unwrap_or(0.0))
            .fold(f64::MIN, f64::max);
        let reps = ex.sets.iter().map(|s| s.reps.unwrap_or(0)).max().unwrap_or(0);
        (weight, reps)
    };

    Some(TopSetPoint {
        date: date.to_string(),
        lift: lift.to_string(),
        weight_kg,
        reps,
        rpe: ex.rpe_actual,
        e1rm_kg: epley_e1rm(weight_kg, reps),
    })
}
