use ironlog_domain::{
    Classification, Formula, OneRepMax, PersonalRecord, Point, PowerliftingScore, WorkoutSet,
    classification, exercises, one_rep_maxes, personal_records, powerlifting_score, series,
    sets_of,
};
use log::debug;

use crate::{ChartType, Settings};

/// Everything displayed for the exercise chosen on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub exercises: Vec<String>,
    pub exercise: Option<String>,
    pub chart_type: ChartType,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
    pub personal_records: Vec<PersonalRecord>,
    pub one_rep_maxes: Vec<OneRepMax>,
}

impl Dashboard {
    #[must_use]
    pub fn new(workouts: &[WorkoutSet], settings: &Settings) -> Self {
        let exercises = exercises(workouts);
        let exercise = settings.exercise(&exercises).map(ToString::to_string);

        if exercise.as_deref() != Some(settings.selected_exercise.as_str()) {
            debug!(
                "selected exercise {:?} not available, showing {exercise:?}",
                settings.selected_exercise
            );
        }

        let sets = exercise
            .as_deref()
            .map(|e| sets_of(workouts, e))
            .unwrap_or_default();

        Self {
            points: series(
                &sets,
                settings.x_axis,
                settings.y_axis,
                settings.series_options(),
            ),
            personal_records: personal_records(&sets, settings.single_reps_only),
            one_rep_maxes: one_rep_maxes(&sets),
            chart_type: settings.chart_type,
            x_label: settings.x_axis.to_string(),
            y_label: settings.y_axis.to_string(),
            exercises,
            exercise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub score: PowerliftingScore,
    pub dots: Classification,
    pub wilks: Classification,
}

/// Score a lifter total using the body weight and sex from the settings.
///
/// Returns `None` if no body weight is configured.
#[must_use]
pub fn score_card(total: f64, settings: &Settings) -> Option<ScoreCard> {
    let score = powerlifting_score(total, settings.body_weight?, settings.sex);
    Some(ScoreCard {
        score,
        dots: classification(score.dots, Formula::Dots),
        wilks: classification(score.wilks, Formula::Wilks),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ironlog_domain::{Coordinate, Field, Metric, Sex};
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(day: u32, exercise: &str, weight: f32, reps: u32) -> WorkoutSet {
        WorkoutSet {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            exercise: exercise.to_string(),
            weight,
            reps,
            distance: None,
            duration: None,
            rpe: None,
        }
    }

    fn workouts() -> Vec<WorkoutSet> {
        vec![
            set(1, "Bench Press (Barbell)", 60.0, 10),
            set(1, "Bench Press (Barbell)", 80.0, 5),
            set(1, "Squat (Barbell)", 100.0, 5),
            set(3, "Bench Press (Barbell)", 85.0, 1),
            set(3, "Squat (Barbell)", 120.0, 1),
        ]
    }

    #[test]
    fn test_dashboard_default_settings() {
        let dashboard = Dashboard::new(&workouts(), &Settings::default());

        assert_eq!(
            dashboard.exercises,
            vec![
                "Bench Press (Barbell)".to_string(),
                "Squat (Barbell)".to_string()
            ]
        );
        assert_eq!(dashboard.exercise.as_deref(), Some("Bench Press (Barbell)"));
        assert_eq!(dashboard.x_label, "Date");
        assert_eq!(dashboard.y_label, "Weight (kg)");
        assert_eq!(
            dashboard.points.iter().map(|p| p.y).collect::<Vec<_>>(),
            vec![80.0, 85.0]
        );
        assert_eq!(
            dashboard
                .personal_records
                .iter()
                .map(|r| r.weight)
                .collect::<Vec<_>>(),
            vec![85.0, 80.0, 60.0]
        );
        assert_eq!(
            dashboard
                .one_rep_maxes
                .iter()
                .map(|r| r.estimated_max)
                .collect::<Vec<_>>(),
            vec![90.0, 85.0, 80.0]
        );
    }

    #[test]
    fn test_dashboard_custom_settings() {
        let dashboard = Dashboard::new(
            &workouts(),
            &Settings {
                selected_exercise: "Squat (Barbell)".to_string(),
                x_axis: Field::Metric(Metric::Reps),
                show_top_sets: false,
                single_reps_only: true,
                ..Settings::default()
            },
        );

        assert_eq!(dashboard.exercise.as_deref(), Some("Squat (Barbell)"));
        assert_eq!(
            dashboard.points.iter().map(|p| p.x).collect::<Vec<_>>(),
            vec![Coordinate::Value(5.0), Coordinate::Value(1.0)]
        );
        assert_eq!(
            dashboard
                .personal_records
                .iter()
                .map(|r| (r.weight, r.reps))
                .collect::<Vec<_>>(),
            vec![(120.0, 1)]
        );
    }

    #[test]
    fn test_dashboard_without_workouts() {
        let dashboard = Dashboard::new(&[], &Settings::default());
        assert_eq!(dashboard.exercise, None);
        assert!(dashboard.points.is_empty());
        assert!(dashboard.personal_records.is_empty());
        assert!(dashboard.one_rep_maxes.is_empty());
    }

    #[test]
    fn test_score_card() {
        assert_eq!(score_card(500.0, &Settings::default()), None);

        let card = score_card(
            500.0,
            &Settings {
                body_weight: Some(90.0),
                sex: Sex::MALE,
                ..Settings::default()
            },
        )
        .unwrap();
        assert_eq!(card.score.dots, 356.25);
        assert_eq!(card.score.wilks, 319.2);
        assert_eq!(card.dots, Classification::Intermediate);
        assert_eq!(card.wilks, Classification::Intermediate);
    }
}
