use std::fmt;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerliftingScore {
    pub dots: f64,
    pub wilks: f64,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum Formula {
    #[display("DOTS")]
    Dots,
    #[display("Wilks")]
    Wilks,
}

impl Formula {
    /// Minimum scores of the novice, intermediate, advanced and elite tiers.
    #[must_use]
    pub fn thresholds(self) -> [f64; 4] {
        match self {
            Formula::Dots => [200.0, 275.0, 400.0, 500.0],
            Formula::Wilks => [175.0, 250.0, 325.0, 400.0],
        }
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

#[must_use]
pub fn classification(score: f64, formula: Formula) -> Classification {
    let [novice, intermediate, advanced, elite] = formula.thresholds();
    if score >= elite {
        Classification::Elite
    } else if score >= advanced {
        Classification::Advanced
    } else if score >= intermediate {
        Classification::Intermediate
    } else if score >= novice {
        Classification::Novice
    } else {
        Classification::Beginner
    }
}

const DOTS: [f64; 6] = [
    47.461_788_54,
    8.472_061_379,
    0.073_694_103_46,
    -0.002_395_190_333,
    0.000_033_265_984_6,
    -0.000_000_193_33,
];

const WILKS_MALE: [f64; 6] = [
    -216.047_514_4,
    16.260_633_9,
    -0.002_388_645,
    -0.001_137_32,
    7.018_63e-6,
    -1.291e-8,
];

const WILKS_FEMALE: [f64; 6] = [
    594.317_477_755_82,
    -27.238_425_364_47,
    0.821_122_268_71,
    -0.009_307_339_13,
    4.731_582e-5,
    -9.054e-8,
];

#[must_use]
pub fn dots(total: f64, body_weight: f64) -> f64 {
    normalized_score(total, body_weight, &DOTS)
}

#[must_use]
pub fn wilks(total: f64, body_weight: f64, sex: Sex) -> f64 {
    match sex {
        Sex::FEMALE => normalized_score(total, body_weight, &WILKS_FEMALE),
        Sex::MALE => normalized_score(total, body_weight, &WILKS_MALE),
    }
}

#[must_use]
pub fn powerlifting_score(total: f64, body_weight: f64, sex: Sex) -> PowerliftingScore {
    PowerliftingScore {
        dots: dots(total, body_weight),
        wilks: wilks(total, body_weight, sex),
    }
}

/// Normalize a total by a fifth-degree polynomial of the body weight.
///
/// Returns 0 if the polynomial is not positive or the result is not a finite, non-negative
/// number. The result is rounded to two decimal places.
fn normalized_score(total: f64, body_weight: f64, coefficients: &[f64; 6]) -> f64 {
    let denominator = coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * body_weight + c);

    if !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }

    let score = total * 500.0 / denominator;

    if !score.is_finite() || score < 0.0 {
        return 0.0;
    }

    (score * 100.0).round() / 100.0
}
