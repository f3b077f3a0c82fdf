use std::collections::VecDeque;

use ironlog_domain::WorkoutService;

use crate::{Dashboard, Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> Service<R> {
    /// Build the dashboard from the stored settings and all workouts provided by `workouts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings or the workouts could not be read.
    pub async fn get_dashboard(&self, workouts: &impl WorkoutService) -> Result<Dashboard, String> {
        let settings = self.get_settings().await?;
        let workouts = workouts.get_workouts().await.map_err(|err| err.to_string())?;
        Ok(Dashboard::new(&workouts, &settings))
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().await
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use futures::executor::block_on;
    use ironlog_domain::{ReadError, StorageError, WorkoutSet};
    use ::log::Level;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::log::Service as _;

    #[derive(Default)]
    struct Repository {
        settings: Mutex<Settings>,
        entries: Mutex<VecDeque<log::Entry>>,
    }

    impl SettingsRepository for Repository {
        async fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.settings.lock().map_err(|e| e.to_string())?.clone())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.lock().map_err(|e| e.to_string())? = settings;
            Ok(())
        }
    }

    impl log::Repository for Repository {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.entries.lock().unwrap().push_front(entry);
            Ok(())
        }
    }

    struct Workouts(Option<Vec<WorkoutSet>>);

    impl WorkoutService for Workouts {
        async fn get_workouts(&self) -> Result<Vec<WorkoutSet>, ReadError> {
            self.0
                .clone()
                .ok_or(ReadError::Storage(StorageError::NoData))
        }
    }

    fn set(exercise: &str, weight: f32, reps: u32) -> WorkoutSet {
        WorkoutSet {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 4)
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

    #[test]
    fn test_settings() {
        let service = Service::new(Repository::default());
        assert_eq!(block_on(service.get_settings()).unwrap(), Settings::default());

        block_on(service.select_exercise("Squat (Barbell)")).unwrap();
        assert_eq!(
            block_on(service.get_settings()).unwrap().selected_exercise,
            "Squat (Barbell)"
        );
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(Repository::default());
        service
            .add_log_entry(log::Entry::new(Level::Info, "first".to_string()))
            .unwrap();
        service
            .add_log_entry(log::Entry::new(Level::Warn, "second".to_string()))
            .unwrap();
        assert_eq!(
            service
                .get_log_entries()
                .unwrap()
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>(),
            vec!["second".to_string(), "first".to_string()]
        );
    }

    #[test]
    fn test_get_dashboard() {
        let service = Service::new(Repository::default());
        block_on(service.select_exercise("Squat (Barbell)")).unwrap();

        let dashboard = block_on(service.get_dashboard(&Workouts(Some(vec![
            set("Bench Press (Barbell)", 80.0, 5),
            set("Squat (Barbell)", 100.0, 5),
        ]))))
        .unwrap();
        assert_eq!(dashboard.exercise.as_deref(), Some("Squat (Barbell)"));
        assert_eq!(dashboard.personal_records.len(), 1);

        assert_eq!(
            block_on(service.get_dashboard(&Workouts(None))),
            Err("no data".to_string())
        );
    }
}
