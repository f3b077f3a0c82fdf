use ironlog_domain::{Field, Metric, SeriesOptions, Sex};

pub const DEFAULT_EXERCISE: &str = "Bench Press (Barbell)";

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;

    async fn select_exercise(&self, exercise: &str) -> Result<Settings, String> {
        let settings = Settings {
            selected_exercise: exercise.to_string(),
            ..self.get_settings().await?
        };
        self.set_settings(settings.clone()).await?;
        Ok(settings)
    }
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    pub selected_exercise: String,
    pub chart_type: ChartType,
    pub x_axis: Field,
    pub y_axis: Metric,
    pub show_top_sets: bool,
    pub even_date_spacing: bool,
    pub single_reps_only: bool,
    pub theme: Theme,
    pub sex: Sex,
    pub body_weight: Option<f64>,
}

impl Settings {
    #[must_use]
    pub fn series_options(&self) -> SeriesOptions {
        SeriesOptions {
            top_sets_only: self.show_top_sets,
            even_date_spacing: self.even_date_spacing,
        }
    }

    /// Choose the exercise to display from the available exercises.
    ///
    /// The selected exercise is preferred, followed by the default exercise and the first
    /// available exercise.
    #[must_use]
    pub fn exercise<'a>(&'a self, exercises: &'a [String]) -> Option<&'a str> {
        [self.selected_exercise.as_str(), DEFAULT_EXERCISE]
            .into_iter()
            .find(|e| exercises.iter().any(|x| x == e))
            .or_else(|| exercises.first().map(String::as_str))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_exercise: DEFAULT_EXERCISE.to_string(),
            chart_type: ChartType::Line,
            x_axis: Field::StartTime,
            y_axis: Metric::Weight,
            show_top_sets: true,
            even_date_spacing: true,
            single_reps_only: false,
            theme: Theme::Dark,
            sex: Sex::MALE,
            body_weight: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum ChartType {
    Line,
    Bar,
    Scatter,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    System,
    Light,
    Dark,
}
