use chrono::NaiveDateTime;

use crate::WorkoutSet;

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub achieved_at: NaiveDateTime,
    pub weight: f32,
    pub reps: u32,
}

/// Determine the weights which exceeded all previous weights of an exercise at the time they
/// were lifted.
///
/// The sets are expected to belong to a single exercise. Unloaded sets and sets without
/// repetitions are ignored. If `single_reps_only` is set, only sets of exactly one repetition
/// are considered.
///
/// The records are returned with the heaviest weight first.
#[must_use]
pub fn personal_records(sets: &[WorkoutSet], single_reps_only: bool) -> Vec<PersonalRecord> {
    let mut candidates = sets
        .iter()
        .filter(|s| s.is_weighted())
        .filter(|s| !single_reps_only || s.reps == 1)
        .collect::<Vec<_>>();
    candidates.sort_by_key(|s| s.timestamp);

    let mut max_weight = 0.0;
    let mut records = candidates
        .into_iter()
        .filter_map(|s| {
            if s.weight > max_weight {
                max_weight = s.weight;
                Some(PersonalRecord {
                    achieved_at: s.timestamp,
                    weight: s.weight,
                    reps: s.reps,
                })
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    records.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    records
}
