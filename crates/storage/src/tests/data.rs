use chrono::NaiveDate;
use ironlog_domain as domain;

pub const WORKOUTS_JSON: &str = r#"[
    {
        "start_time": "2024-03-04 18:00",
        "exercise_title": "Bench Press (Barbell)",
        "weight_kg": 80.0,
        "reps": 5.0,
        "distance_km": null,
        "duration_seconds": null,
        "rpe": 8.0
    },
    {
        "start_time": "2024-03-04 18:00",
        "exercise_title": "Squat (Barbell)",
        "weight_kg": 100,
        "reps": 5
    },
    {
        "start_time": null,
        "exercise_title": "Deadlift (Barbell)",
        "weight_kg": 140.0,
        "reps": 3.0
    },
    {
        "start_time": "06 Mar 2024, 07:30",
        "exercise_title": "Running",
        "weight_kg": null,
        "reps": null,
        "distance_km": 5.0,
        "duration_seconds": 1800.0,
        "rpe": null
    },
    {
        "start_time": "2024-03-07 18:00",
        "exercise_title": "Squat (Barbell)",
        "weight_kg": "102.5",
        "reps": "1",
        "rpe": "n/a"
    }
]"#;

pub static WORKOUT_SETS: std::sync::LazyLock<Vec<domain::WorkoutSet>> =
    std::sync::LazyLock::new(|| {
        vec![
            domain::WorkoutSet {
                timestamp: NaiveDate::from_ymd_opt(2024, 3, 4)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
                exercise: "Bench Press (Barbell)".to_string(),
                weight: 80.0,
                reps: 5,
                distance: None,
                duration: None,
                rpe: Some(8.0),
            },
            domain::WorkoutSet {
                timestamp: NaiveDate::from_ymd_opt(2024, 3, 4)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
                exercise: "Squat (Barbell)".to_string(),
                weight: 100.0,
                reps: 5,
                distance: None,
                duration: None,
                rpe: None,
            },
            domain::WorkoutSet {
                timestamp: NaiveDate::from_ymd_opt(2024, 3, 6)
                    .unwrap()
                    .and_hms_opt(7, 30, 0)
                    .unwrap(),
                exercise: "Running".to_string(),
                weight: 0.0,
                reps: 0,
                distance: Some(5.0),
                duration: Some(1800),
                rpe: None,
            },
            domain::WorkoutSet {
                timestamp: NaiveDate::from_ymd_opt(2024, 3, 7)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
                exercise: "Squat (Barbell)".to_string(),
                weight: 102.5,
                reps: 1,
                distance: None,
                duration: None,
                rpe: None,
            },
        ]
    });
