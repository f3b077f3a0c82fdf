use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ironlog_domain::{self as domain, ReadError, StorageError};
use log::{debug, warn};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%d %b %Y, %H:%M",
];

/// Workout export stored as a JSON file.
///
/// The file is read synchronously on every call. Exports are small and no executor is
/// required by the repository traits.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl domain::WorkoutRepository for Storage {
    async fn read_workouts(&self) -> Result<Vec<domain::WorkoutSet>, ReadError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NoData.into());
            }
            Err(err) => return Err(StorageError::Other(Box::new(err)).into()),
        };
        if content.trim().is_empty() {
            return Err(StorageError::NoData.into());
        }
        let workouts = parse_workouts(&content).map_err(|err| ReadError::Other(Box::new(err)))?;
        debug!(
            "read {} workout sets from {}",
            workouts.len(),
            self.path.display()
        );
        Ok(workouts)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("missing start time")]
    MissingStartTime,
    #[error("missing exercise title")]
    MissingExerciseTitle,
    #[error("invalid start time: {0}")]
    InvalidStartTime(String),
}

/// A record of the workout export.
///
/// Numbers may be floats, numeric strings or null in the export. A number that cannot be
/// read is treated as missing without discarding the record.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Workout {
    pub start_time: Option<String>,
    pub exercise_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub distance_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rpe: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite()))
}

impl TryFrom<Workout> for domain::WorkoutSet {
    type Error = Error;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let start_time = value
            .start_time
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingStartTime)?;
        let exercise = value
            .exercise_title
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingExerciseTitle)?;
        Ok(Self {
            timestamp: parse_timestamp(&start_time)
                .ok_or(Error::InvalidStartTime(start_time))?,
            exercise,
            weight: value.weight_kg.map_or(0.0, |w| w.max(0.0) as f32),
            reps: value.reps.map_or(0, to_u32),
            distance: value.distance_km.map(|d| d as f32),
            duration: value.duration_seconds.map(to_u32),
            rpe: value.rpe.map(|r| r as f32),
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u32(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Parse the start time of a workout in any of the formats produced by the supported exports.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .or_else(|_| DateTime::parse_from_rfc2822(value))
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parse a JSON array of workout records.
///
/// Invalid records are skipped.
pub fn parse_workouts(json: &str) -> Result<Vec<domain::WorkoutSet>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .filter_map(|record| {
            match serde_json::from_value::<Workout>(record)
                .map_err(|err| err.to_string())
                .and_then(|w| domain::WorkoutSet::try_from(w).map_err(|err| err.to_string()))
            {
                Ok(set) => Some(set),
                Err(err) => {
                    warn!("ignoring invalid workout: {err}");
                    None
                }
            }
        })
        .collect())
}
