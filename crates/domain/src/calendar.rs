use std::{
    collections::{BTreeMap, BTreeSet},
    slice::Iter,
};

use chrono::{Datelike, NaiveDate};
use derive_more::Display;

use crate::WorkoutSet;

/// Assumed time needed for a set including rest.
pub const MINUTES_PER_SET: u32 = 2;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[display("chest")]
    Chest,
    #[display("legs")]
    Legs,
    #[display("back")]
    Back,
}

impl Category {
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 3] = [Category::Chest, Category::Legs, Category::Back];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &[
                "bench press",
                "incline bench",
                "decline bench",
                "chest press",
                "chest fly",
                "pec deck",
                "butterfly",
                "push up",
                "dip",
            ],
            Category::Legs => &[
                "squat",
                "leg press",
                "leg extension",
                "leg curl",
                "calf raise",
                "lunge",
                "bulgarian",
                "step up",
                "hip thrust",
                "glute",
                "romanian deadlift",
                "rdl",
            ],
            Category::Back => &[
                "conventional deadlift",
                "sumo deadlift",
                "deadlift (barbell)",
                "pull up",
                "chin up",
                "lat pulldown",
                "barbell row",
                "dumbbell row",
                "cable row",
                "iso-lateral",
                "seated row",
                "face pull",
                "bicep curl",
                "hammer curl",
                "preacher curl",
                "shrug",
                "upright row",
                "rear delt",
                "reverse fly",
            ],
        }
    }

    #[must_use]
    pub fn exclusions(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &[
                "wrist",
                "behind the back",
                "lateral",
                "delt",
                "shoulder",
                "tricep",
            ],
            Category::Legs => &["wrist", "tricep"],
            Category::Back => &[
                "wrist",
                "tricep",
                "chest",
                "romanian",
                "rdl",
                "lateral raise",
                "front raise",
            ],
        }
    }

    #[must_use]
    pub fn matches(self, exercise: &str) -> bool {
        let exercise = exercise.to_lowercase();
        !self.exclusions().iter().any(|e| exercise.contains(e))
            && self.keywords().iter().any(|k| exercise.contains(k))
    }
}

/// Determine all categories of an exercise. An exercise can belong to several categories.
#[must_use]
pub fn categories(exercise: &str) -> BTreeSet<Category> {
    Category::iter()
        .copied()
        .filter(|c| c.matches(exercise))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        Some(Self {
            first_day: NaiveDate::from_ymd_opt(year, month, 1)?,
        })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day.pred_opt().unwrap_or(self.first_day)
    }

    #[must_use]
    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_day..=self.last_day()).contains(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last_day = self.last_day();
        self.first_day.iter_days().take_while(move |d| *d <= last_day)
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        Self::from(self.first_day.pred_opt().unwrap_or(self.first_day))
    }

    #[must_use]
    pub fn next(&self) -> Self {
        match self.month() {
            12 => Self::new(self.year() + 1, 1),
            month => Self::new(self.year(), month + 1),
        }
        .unwrap_or(*self)
    }
}

impl From<NaiveDate> for Month {
    fn from(value: NaiveDate) -> Self {
        Self {
            first_day: value.with_day(1).unwrap_or(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub exercises: BTreeSet<String>,
    pub categories: BTreeSet<Category>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthlyStats {
    pub workout_days: u32,
    pub total_sets: u32,
    pub estimated_minutes: u32,
    pub category_counts: BTreeMap<Category, u32>,
}

impl MonthlyStats {
    #[must_use]
    pub fn estimated_hours(&self) -> u32 {
        (self.estimated_minutes + 30) / 60
    }

    /// Fraction of all sets which belong to a category.
    ///
    /// As exercises can belong to several categories, the shares of all categories do not
    /// necessarily add up to one.
    #[must_use]
    pub fn share(&self, category: Category) -> Option<f32> {
        if self.total_sets == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(
            self.category_counts.get(&category).copied().unwrap_or(0) as f32
                / self.total_sets as f32,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub workout_days: f32,
    pub total_sets: f32,
    pub category_counts: BTreeMap<Category, f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthOverview {
    pub month: Month,
    pub days: BTreeMap<NaiveDate, CalendarDay>,
    pub stats: MonthlyStats,
    pub projection: Option<Projection>,
}

/// Aggregate the sets performed in a month.
///
/// Only sets within `month` are considered. If `today` lies in `month`, the statistics are
/// additionally extrapolated linearly to the end of the month.
#[must_use]
pub fn month_overview(sets: &[WorkoutSet], month: Month, today: NaiveDate) -> MonthOverview {
    let mut days: BTreeMap<NaiveDate, CalendarDay> = BTreeMap::new();
    let mut stats = MonthlyStats::default();

    for set in sets.iter().filter(|s| month.contains(s.date())) {
        let date = set.date();
        let day = days.entry(date).or_insert_with(|| CalendarDay {
            date,
            exercises: BTreeSet::new(),
            categories: BTreeSet::new(),
        });
        day.exercises.insert(set.exercise.clone());

        stats.total_sets += 1;
        stats.estimated_minutes += MINUTES_PER_SET;

        for category in categories(&set.exercise) {
            day.categories.insert(category);
            *stats.category_counts.entry(category).or_insert(0) += 1;
        }
    }

    stats.workout_days = u32::try_from(days.len()).unwrap_or(u32::MAX);

    let projection = if month.contains(today) {
        Some(project(&stats, today.day(), month.num_days()))
    } else {
        None
    };

    MonthOverview {
        month,
        days,
        stats,
        projection,
    }
}

#[allow(clippy::cast_precision_loss)]
fn project(stats: &MonthlyStats, days_elapsed: u32, days_in_month: u32) -> Projection {
    let factor = days_in_month as f32 / days_elapsed as f32;
    Projection {
        workout_days: stats.workout_days as f32 * factor,
        total_sets: stats.total_sets as f32 * factor,
        category_counts: stats
            .category_counts
            .iter()
            .map(|(category, count)| (*category, *count as f32 * factor))
            .collect(),
    }
}
