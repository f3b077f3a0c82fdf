use std::collections::HashSet;

use chrono::NaiveDateTime;
use log::debug;

use crate::WorkoutSet;

/// Sets with this number of repetitions or more have no defined Brzycki estimate.
pub const BRZYCKI_REPS_LIMIT: u32 = 37;

#[derive(Debug, Clone, PartialEq)]
pub struct OneRepMax {
    pub achieved_at: NaiveDateTime,
    pub weight: f32,
    pub reps: u32,
    /// Rounded to whole kilograms, unless that would fall below a fractional `weight`, in
    /// which case it equals `weight`.
    pub estimated_max: f32,
}

/// Estimate the one-rep max using the Brzycki formula.
///
/// The estimate is never lower than the lifted weight and is rounded to whole kilograms.
/// Returns `None` for sets of 37 or more repetitions.
#[must_use]
pub fn brzycki(weight: f32, reps: u32) -> Option<f32> {
    if reps >= BRZYCKI_REPS_LIMIT {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let estimate = weight * (36.0 / (37.0 - reps as f32));

    Some(estimate.max(weight).round().max(weight))
}

/// Collect the one-rep max estimates of all distinct weight and repetition combinations in the
/// order they were first performed.
///
/// The result is sorted by the estimated max, highest first.
#[must_use]
pub fn one_rep_maxes(sets: &[WorkoutSet]) -> Vec<OneRepMax> {
    let mut candidates = sets.iter().filter(|s| s.is_weighted()).collect::<Vec<_>>();
    candidates.sort_by_key(|s| s.timestamp);

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut result = candidates
        .into_iter()
        .filter_map(|s| {
            let Some(estimated_max) = brzycki(s.weight, s.reps) else {
                debug!(
                    "ignoring set of {} kg x {} for one-rep max estimation",
                    s.weight, s.reps
                );
                return None;
            };
            if seen.insert((s.weight.to_bits(), s.reps)) {
                Some(OneRepMax {
                    achieved_at: s.timestamp,
                    weight: s.weight,
                    reps: s.reps,
                    estimated_max,
                })
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    result.sort_by(|a, b| b.estimated_max.total_cmp(&a.estimated_max));
    result
}
