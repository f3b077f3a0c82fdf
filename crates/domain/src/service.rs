use log::{debug, error};

use crate::{ReadError, StorageError, WorkoutRepository, WorkoutService, WorkoutSet};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Log a failed repository read. A missing connection is expected when offline and only
/// logged for debugging.
macro_rules! log_on_error {
    ($result: expr, $what: literal) => {{
        let result = $result;
        if let Err(err) = &result {
            if matches!(err, ReadError::Storage(StorageError::NoConnection)) {
                debug!("failed to read {}: {err}", $what);
            } else {
                error!("failed to read {}: {err}", $what);
            }
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<WorkoutSet>, ReadError> {
        log_on_error!(self.repository.read_workouts().await, "workouts")
    }
}
