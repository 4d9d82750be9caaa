use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Normalize typed labels: lowercase, `_`/`-` read as spaces, runs of
/// whitespace folded to one space.
pub fn normalize_label(s: &str) -> String {
    s.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Biological sex, selecting the Mifflin-St Jeor constant term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Accepted spellings, as typed at the prompt.
    pub const NAMES: [&'static str; 2] = ["male", "female"];

    pub fn name(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sex {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(EstimatorError::InvalidProfile(format!(
                "unrecognized sex '{}'",
                other
            ))),
        }
    }
}

/// Daily activity category, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Accepted spellings, as typed at the prompt.
    pub const NAMES: [&'static str; 5] = [
        "sedentary",
        "lightly active",
        "moderately active",
        "very active",
        "extra active",
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::ExtraActive => "extra active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| {
                EstimatorError::InvalidProfile(format!("unrecognized activity level '{}'", s.trim()))
            })
    }
}

/// Body metrics that stay fixed for one simulation run.
///
/// Construct through [`BodyProfile::new`] so height and age are checked once,
/// up front, instead of inside the energy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyProfile {
    sex: Sex,
    height_inches: f64,
    age_years: u32,
    activity_level: ActivityLevel,
}

impl BodyProfile {
    pub fn new(
        sex: Sex,
        height_inches: f64,
        age_years: u32,
        activity_level: ActivityLevel,
    ) -> Result<Self> {
        if !height_inches.is_finite() || height_inches <= 0.0 {
            return Err(EstimatorError::InvalidProfile(format!(
                "height must be a positive number of inches, got {}",
                height_inches
            )));
        }
        if age_years == 0 {
            return Err(EstimatorError::InvalidProfile(
                "age must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            sex,
            height_inches,
            age_years,
            activity_level,
        })
    }

    /// Build a profile from raw text fields (e.g. "female", "very active").
    pub fn parse(sex: &str, height_inches: f64, age_years: u32, activity_level: &str) -> Result<Self> {
        Self::new(sex.parse()?, height_inches, age_years, activity_level.parse()?)
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn height_inches(&self) -> f64 {
        self.height_inches
    }

    #[inline]
    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    #[inline]
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
}
