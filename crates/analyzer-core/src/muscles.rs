//! Exercise → muscle-group lookup used for volume estimation.
//!
//! The table is embedded data: names must match the exercise names the
//! tracking app writes into logged sessions exactly (case-sensitive).

/// Every exercise the analyzer knows, with the muscle groups it trains.
pub const EXERCISE_MUSCLES: &[(&str, &[&str])] = &[
    ("Squat", &["quads", "glutes"]),
    ("Bench Press", &["chest", "triceps"]),
    ("Deadlift", &["hamstrings", "glutes", "lower_back"]),
    ("Barbell Row", &["lats", "upper_back", "biceps"]),
    ("Overhead Press", &["front_delts", "triceps"]),
    ("Lat Pulldown", &["lats", "biceps"]),
    ("Leg Curl", &["hamstrings"]),
    ("Leg Press", &["quads", "glutes"]),
    ("Face Pull", &["rear_delts"]),
    ("Lateral Raise", &["side_delts"]),
    ("Barbell Curl", &["biceps"]),
    ("Triceps Pushdown", &["triceps"]),
    ("Hip Thrust", &["glutes"]),
    ("Calf Raise", &["calves"]),
    ("Plank", &["core"]),
    ("Ab Wheel", &["core"]),
];

/// Muscle groups trained by `exercise`, or `None` for unknown names.
pub fn muscles_for(exercise: &str) -> Option<&'static [&'static str]> {
    EXERCISE_MUSCLES
        .iter()
        .find(|(name, _)| *name == exercise)
        .map(|(_, muscles)| *muscles)
}
