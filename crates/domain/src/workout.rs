use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::{
    Month, MonthOverview, OneRepMax, PersonalRecord, PowerliftingScore, ReadError, Sex,
    ValidationError, month_overview, one_rep_maxes, personal_records, powerlifting_score,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<WorkoutSet>, ReadError>;

    async fn get_exercises(&self) -> Result<Vec<String>, ReadError> {
        Ok(exercises(&self.get_workouts().await?))
    }

    async fn get_workout_day(&self, date: NaiveDate) -> Result<Option<WorkoutDay>, ReadError> {
        Ok(workout_day(&self.get_workouts().await?, date))
    }

    #[must_use]
    fn personal_records(&self, sets: &[WorkoutSet], single_reps_only: bool) -> Vec<PersonalRecord> {
        personal_records(sets, single_reps_only)
    }

    #[must_use]
    fn one_rep_maxes(&self, sets: &[WorkoutSet]) -> Vec<OneRepMax> {
        one_rep_maxes(sets)
    }

    #[must_use]
    fn month_overview(&self, sets: &[WorkoutSet], month: Month) -> MonthOverview {
        month_overview(sets, month, Local::now().date_naive())
    }

    #[must_use]
    fn powerlifting_score(&self, total: f64, body_weight: f64, sex: Sex) -> PowerliftingScore {
        powerlifting_score(total, body_weight, sex)
    }

    fn validate_body_weight(&self, body_weight: &str) -> Result<f64, ValidationError> {
        match body_weight.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed) => {
                if (30.0..=200.0).contains(&parsed) {
                    Ok(parsed)
                } else {
                    Err(ValidationError::OutOfRange("Body weight".to_string()))
                }
            }
            Err(_) => Err(ValidationError::Other(
                "Body weight must be a decimal number".into(),
            )),
        }
    }

    fn validate_total(&self, total: &str) -> Result<f64, ValidationError> {
        match total.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed) => {
                if parsed > 0.0 {
                    Ok(parsed)
                } else {
                    Err(ValidationError::OutOfRange("Total".to_string()))
                }
            }
            Err(_) => Err(ValidationError::Other("Total must be a decimal number".into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<WorkoutSet>, ReadError>;
}

/// A single set of an exercise as exported by the workout tracker.
///
/// All sets of one session share the same timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub timestamp: NaiveDateTime,
    pub exercise: String,
    pub weight: f32,
    pub reps: u32,
    pub distance: Option<f32>,
    pub duration: Option<u32>,
    pub rpe: Option<f32>,
}

impl WorkoutSet {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Loaded sets with at least one repetition. All record computations ignore other sets.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weight > 0.0 && self.reps > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDay {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub exercises: Vec<ExerciseSets>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSets {
    pub exercise: String,
    pub sets: Vec<WorkoutSet>,
}

#[must_use]
pub fn exercises(sets: &[WorkoutSet]) -> Vec<String> {
    sets.iter()
        .map(|s| s.exercise.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[must_use]
pub fn sets_of(sets: &[WorkoutSet], exercise: &str) -> Vec<WorkoutSet> {
    sets.iter()
        .filter(|s| s.exercise == exercise)
        .cloned()
        .collect()
}

/// Collect the sets of a calendar day, grouped by exercise in the order the exercises were
/// first performed.
#[must_use]
pub fn workout_day(sets: &[WorkoutSet], date: NaiveDate) -> Option<WorkoutDay> {
    let mut day_sets = sets
        .iter()
        .filter(|s| s.date() == date)
        .cloned()
        .collect::<Vec<_>>();
    day_sets.sort_by_key(|s| s.timestamp);

    let start = day_sets.first()?.timestamp;
    let mut exercises: Vec<ExerciseSets> = vec![];

    for set in day_sets {
        match exercises.iter_mut().find(|e| e.exercise == set.exercise) {
            Some(group) => group.sets.push(set),
            None => exercises.push(ExerciseSets {
                exercise: set.exercise.clone(),
                sets: vec![set],
            }),
        }
    }

    Some(WorkoutDay {
        date,
        start,
        exercises,
    })
}
