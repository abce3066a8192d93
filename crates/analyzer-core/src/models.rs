use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Export metadata stamped by the tracking app when the backup was taken.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupMeta {
    /// ISO-8601 timestamp of the export.
    #[serde(default)]
    pub exported_at: Option<String>,
}

/// The athlete profile stored in the backup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A single recorded one-rep-max estimate for a lift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRepMaxEntry {
    /// Lift key, e.g. `"squat"`. Required.
    pub lift: String,
    /// Date the estimate was recorded (ISO-8601 expected, not enforced).
    #[serde(default)]
    pub date: Option<String>,
    /// Estimated maximum load in kilograms.
    #[serde(default, deserialize_with = "lenient_number")]
    pub value_kg: Option<f64>,
    /// Free-text reason for the change (test day, recalculation, ...).
    #[serde(default)]
    pub reason: Option<String>,
}

impl OneRepMaxEntry {
    /// Recorded date, or `""` when absent.
    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    /// Recorded load, or `0` when absent.
    pub fn value(&self) -> f64 {
        self.value_kg.unwrap_or(0.0)
    }

    /// Reason text, or `""` when absent.
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }
}

/// One set as entered while logging a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggedSet {
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_reps")]
    pub reps: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rpe_actual: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed: bool,
}

/// An exercise performed in a logged session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Exercise display name, matched against the muscle table.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercise: String,
    /// Number of non-failed sets.
    #[serde(default, deserialize_with = "lenient_count")]
    pub sets_completed: u64,
    /// RPE of the last set.
    #[serde(default, deserialize_with = "lenient_number")]
    pub rpe_actual: Option<f64>,
    /// Load prescribed by the plan, in kilograms.
    #[serde(default, deserialize_with = "lenient_number")]
    pub planned_weight: Option<f64>,
    /// Reps prescribed by the plan.
    #[serde(default, deserialize_with = "lenient_reps")]
    pub planned_reps: Option<u32>,
    /// Main-lift key (`"squat"`, `"bench"`, ...) for competition lifts.
    #[serde(default)]
    pub lift_key: Option<String>,
    /// Whether this exercise was the session's top set for `lift_key`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_topset: bool,
    /// Individual sets as logged.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: Vec<LoggedSet>,
}

/// A training session the athlete actually performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggedSession {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<ExerciseRecord>,
}

impl LoggedSession {
    /// Session date, or `""` when absent.
    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }
}

/// An exercise prescribed in a planned session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannedExercise {
    #[serde(default)]
    pub exercise: Option<String>,
    /// Number of prescribed sets.
    #[serde(default, deserialize_with = "lenient_count")]
    pub sets: u64,
}

/// A session generated by the planner.
///
/// `completed` is kept as raw JSON because older exports store it as `0`/`1`
/// or omit it entirely; see [`is_truthy`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannedSession {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub completed: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<PlannedExercise>,
}

impl PlannedSession {
    /// Session date, or `""` when absent.
    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn is_completed(&self) -> bool {
        is_truthy(&self.completed)
    }
}

/// Top-level backup document exported by the tracking app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupRecord {
    #[serde(default)]
    pub meta: Option<BackupMeta>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub one_rms: Vec<OneRepMaxEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logged_sessions: Vec<LoggedSession>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planned_sessions: Vec<PlannedSession>,
}

impl BackupRecord {
    /// Export timestamp from `meta.exported_at`, if present.
    pub fn exported_at(&self) -> Option<&str> {
        self.meta.as_ref()?.exported_at.as_deref()
    }

    /// Display name from `user.name`, if present.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref()?.name.as_deref()
    }
}

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are falsy,
/// everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Lenient numbers ───────────────────────────────────────────────────────────
//
// Exports written by older app versions sometimes store numbers as floats
// (`3.0`) or strings (`"100"`). Those are accepted; anything that is not a
// number reads as missing instead of failing the whole backup.

/// A finite number from a JSON number or numeric string.
fn number_from(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// A non-negative whole count; fractional values are truncated.
fn count_from(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    number_from(value).filter(|n| *n >= 0.0).map(|n| n as u64)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_from(&Value::deserialize(deserializer)?))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from(&Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_reps<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from(&Value::deserialize(deserializer)?).and_then(|n| u32::try_from(n).ok()))
}
