use std::{collections::VecDeque, sync::Mutex};

use ironlog_web_app::{Settings, SettingsRepository, log};

/// UI state kept for the lifetime of the process.
#[derive(Default)]
pub struct UI {
    settings: Mutex<Settings>,
}

impl UI {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsRepository for UI {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.settings
            .lock()
            .map(|settings| settings.clone())
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        *self.settings.lock().map_err(|err| err.to_string())? = settings;
        Ok(())
    }
}

#[derive(Default)]
pub struct Log {
    entries: Mutex<VecDeque<log::Entry>>,
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(log::CAPACITY);
        Ok(())
    }
}
