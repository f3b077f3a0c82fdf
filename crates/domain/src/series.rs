use chrono::{Duration, NaiveDateTime};
use derive_more::Display;

use crate::WorkoutSet;

/// A numeric property of a set which can be plotted.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Metric {
    #[display("Weight (kg)")]
    Weight,
    #[display("Reps")]
    Reps,
    #[display("Distance (km)")]
    Distance,
    #[display("Duration (seconds)")]
    Duration,
    #[display("RPE")]
    Rpe,
}

impl Metric {
    /// Missing values are plotted as zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, set: &WorkoutSet) -> f32 {
        match self {
            Metric::Weight => set.weight,
            Metric::Reps => set.reps as f32,
            Metric::Distance => set.distance.unwrap_or(0.0),
            Metric::Duration => set.duration.map_or(0.0, |d| d as f32),
            Metric::Rpe => set.rpe.unwrap_or(0.0),
        }
    }
}

/// The property of a set used for the horizontal axis.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Field {
    #[display("Date")]
    StartTime,
    #[display("{_0}")]
    Metric(Metric),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    Time(NaiveDateTime),
    Value(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Coordinate,
    pub y: f32,
    /// Start time of the workout the set belongs to.
    pub date: NaiveDateTime,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SeriesOptions {
    pub top_sets_only: bool,
    pub even_date_spacing: bool,
}

/// Keep only the heaviest set of each exercise per workout.
///
/// If several sets share the heaviest weight, the first one is kept.
#[must_use]
pub fn top_sets(sets: &[WorkoutSet]) -> Vec<WorkoutSet> {
    let mut result: Vec<WorkoutSet> = vec![];

    for set in sets {
        match result
            .iter_mut()
            .find(|s| s.timestamp == set.timestamp && s.exercise == set.exercise)
        {
            Some(top) => {
                if set.weight > top.weight {
                    *top = set.clone();
                }
            }
            None => result.push(set.clone()),
        }
    }

    result
}

#[must_use]
pub fn series(sets: &[WorkoutSet], x: Field, y: Metric, options: SeriesOptions) -> Vec<Point> {
    let mut sets = if options.top_sets_only {
        top_sets(sets)
    } else {
        sets.to_vec()
    };
    sets.sort_by_key(|s| s.timestamp);

    match x {
        Field::StartTime if options.even_date_spacing => evenly_spaced(&sets, y),
        Field::StartTime => sets
            .iter()
            .map(|s| Point {
                x: Coordinate::Time(s.timestamp),
                y: y.value(s),
                date: s.timestamp,
            })
            .collect(),
        Field::Metric(metric) => sets
            .iter()
            .map(|s| Point {
                x: Coordinate::Value(metric.value(s)),
                y: y.value(s),
                date: s.timestamp,
            })
            .collect(),
    }
}

/// Distribute the points evenly between the first and the last date of the sorted sets.
fn evenly_spaced(sets: &[WorkoutSet], y: Metric) -> Vec<Point> {
    let (Some(first), Some(last)) = (sets.first(), sets.last()) else {
        return vec![];
    };

    let step = match i32::try_from(sets.len() - 1) {
        Ok(intervals) if intervals > 0 => (last.timestamp - first.timestamp) / intervals,
        _ => Duration::zero(),
    };

    sets.iter()
        .zip(0..)
        .map(|(s, i)| Point {
            x: Coordinate::Time(first.timestamp + step * i),
            y: y.value(s),
            date: s.timestamp,
        })
        .collect()
}
