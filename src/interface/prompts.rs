use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::error::{EstimatorError, Result};
use crate::interface::input::InputSource;
use crate::models::{normalize_label, ActivityLevel, BodyProfile, Sex};
use crate::simulation::MAX_TRAJECTORY_DAYS;

/// Similarity needed before a "Did you mean" hint is offered.
const SUGGESTION_THRESHOLD: f64 = 0.8;

// Upper limits keep answers inside the range the simulators accept.
const MAX_AGE_YEARS: i64 = 130;
const MAX_HEIGHT_INCHES: f64 = 120.0;
const MAX_WEIGHT_LBS: f64 = 1500.0;
const MAX_DAILY_INTAKE: i64 = 100_000;

/// A type that can be read from a prompt.
pub trait PromptValue: FromStr + PartialOrd + Display {
    /// Noun used in the "Please enter a valid ..." message.
    const KIND: &'static str;

    /// Values that parse but should still be refused (e.g. `NaN`).
    fn is_usable(&self) -> bool {
        true
    }
}

impl PromptValue for f64 {
    const KIND: &'static str = "number";

    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

impl PromptValue for i64 {
    const KIND: &'static str = "whole number";
}

impl PromptValue for Sex {
    const KIND: &'static str = "gender";
}

impl PromptValue for ActivityLevel {
    const KIND: &'static str = "activity level";
}

/// A prompt that repeats until the answer parses, passes an optional strict
/// minimum, and matches an optional list of accepted labels.
///
/// Validation failures are reported through [`InputSource::notify`] and the
/// prompt is shown again. Only a failing input source ends the loop.
#[derive(Debug, Clone)]
pub struct ValidatedPrompt<'a, T> {
    prompt: &'a str,
    min: Option<T>,
    max: Option<T>,
    error_message: Option<&'a str>,
    choices: Option<&'a [&'a str]>,
}

impl<'a, T: PromptValue> ValidatedPrompt<'a, T> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            min: None,
            max: None,
            error_message: None,
            choices: None,
        }
    }

    /// Require answers strictly greater than `min`.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Require answers no greater than `max`.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Message shown when the minimum or the choice list rejects an answer.
    pub fn error_message(mut self, message: &'a str) -> Self {
        self.error_message = Some(message);
        self
    }

    /// Accept only these labels (compared after [`normalize_label`]).
    pub fn choices(mut self, choices: &'a [&'a str]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn ask(&self, input: &mut impl InputSource) -> Result<T> {
        loop {
            let raw = input.read_line(self.prompt)?;
            let answer = raw.trim();

            if let Some(choices) = self.choices {
                let normalized = normalize_label(answer);
                if !choices.iter().any(|c| normalize_label(c) == normalized) {
                    let message = match self.error_message {
                        Some(message) => message.to_string(),
                        None => format!("Please choose one of: {}.", choices.join(", ")),
                    };
                    input.notify(&message);
                    if let Some(suggestion) = suggest(&normalized, choices) {
                        input.notify(&format!("Did you mean '{}'?", suggestion));
                    }
                    continue;
                }
            }

            let value = match answer.parse::<T>() {
                Ok(value) if value.is_usable() => value,
                _ => {
                    input.notify(&format!("Please enter a valid {}.", T::KIND));
                    continue;
                }
            };

            if let Some(min) = &self.min {
                if value <= *min {
                    let message = match self.error_message {
                        Some(message) => message.to_string(),
                        None => format!("Please enter a value greater than {}.", min),
                    };
                    input.notify(&message);
                    continue;
                }
            }

            if let Some(max) = &self.max {
                if value > *max {
                    input.notify(&format!("Please enter a value no greater than {}.", max));
                    continue;
                }
            }

            return Ok(value);
        }
    }
}

/// Closest accepted label, if any is similar enough.
fn suggest<'a>(answer: &str, choices: &[&'a str]) -> Option<&'a str> {
    if answer.is_empty() {
        return None;
    }

    choices
        .iter()
        .map(|c| (*c, jaro_winkler(answer, c)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

/// Answers shared by both tools.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileInputs {
    pub profile: BodyProfile,
    pub start_weight: f64,
}

/// Everything the goal estimator needs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalInputs {
    pub profile: BodyProfile,
    pub start_weight: f64,
    pub goal_weight: f64,
}

/// Everything the trajectory tool needs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrajectoryInputs {
    pub profile: BodyProfile,
    pub start_weight: f64,
    pub daily_intake: i64,
    pub days: u32,
}

pub fn prompt_sex(input: &mut impl InputSource) -> Result<Sex> {
    ValidatedPrompt::new("Enter your gender (male/female)")
        .choices(&Sex::NAMES)
        .error_message("Please choose 'male' or 'female'.")
        .ask(input)
}

/// Narrow a bounded whole-number answer.
fn to_u32(value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| EstimatorError::InvalidParameters(format!("{} is out of range", value)))
}

pub fn prompt_age(input: &mut impl InputSource) -> Result<u32> {
    let age: i64 = ValidatedPrompt::new("Enter your age")
        .min(14)
        .max(MAX_AGE_YEARS)
        .error_message("Age should be more than 14.")
        .ask(input)?;
    to_u32(age)
}

pub fn prompt_height(input: &mut impl InputSource) -> Result<f64> {
    ValidatedPrompt::new("Enter your height (in inches)")
        .min(47.9)
        .max(MAX_HEIGHT_INCHES)
        .error_message("Height should be more than 48 inches.")
        .ask(input)
}

pub fn prompt_start_weight(input: &mut impl InputSource) -> Result<f64> {
    ValidatedPrompt::new("Enter your starting weight (in lbs)")
        .min(89.9)
        .max(MAX_WEIGHT_LBS)
        .error_message("Weight should be more than 90 pounds.")
        .ask(input)
}

pub fn prompt_activity_level(input: &mut impl InputSource) -> Result<ActivityLevel> {
    ValidatedPrompt::new(
        "Enter your activity level (sedentary, lightly active, moderately active, very active, extra active)",
    )
    .choices(&ActivityLevel::NAMES)
    .error_message("Please choose a valid activity level.")
    .ask(input)
}

/// Goal weight, re-asked until it is positive and below `start_weight`.
pub fn prompt_goal_weight(input: &mut impl InputSource, start_weight: f64) -> Result<f64> {
    loop {
        let goal: f64 = ValidatedPrompt::new("Enter goal weight (lbs)")
            .min(0.0)
            .error_message("Goal weight should be a positive number.")
            .ask(input)?;

        if goal < start_weight {
            return Ok(goal);
        }
        input.notify("Goal weight should be less than your starting weight.");
    }
}

pub fn prompt_daily_intake(input: &mut impl InputSource) -> Result<i64> {
    ValidatedPrompt::new("Enter your daily caloric intake")
        .min(-1)
        .max(MAX_DAILY_INTAKE)
        .error_message("Daily caloric intake should be a positive number.")
        .ask(input)
}

pub fn prompt_days(input: &mut impl InputSource) -> Result<u32> {
    let days: i64 = ValidatedPrompt::new("Enter the number of days")
        .min(0)
        .max(i64::from(MAX_TRAJECTORY_DAYS))
        .error_message("Number of days should be more than 0.")
        .ask(input)?;
    to_u32(days)
}

/// Gender, age, height, starting weight and activity level, in that order.
pub fn collect_profile(input: &mut impl InputSource) -> Result<ProfileInputs> {
    let sex = prompt_sex(input)?;
    let age = prompt_age(input)?;
    let height = prompt_height(input)?;
    let start_weight = prompt_start_weight(input)?;
    let activity_level = prompt_activity_level(input)?;

    Ok(ProfileInputs {
        profile: BodyProfile::new(sex, height, age, activity_level)?,
        start_weight,
    })
}

/// Collect all answers for the goal estimator.
pub fn collect_goal_inputs(input: &mut impl InputSource) -> Result<GoalInputs> {
    let ProfileInputs {
        profile,
        start_weight,
    } = collect_profile(input)?;
    let goal_weight = prompt_goal_weight(input, start_weight)?;

    Ok(GoalInputs {
        profile,
        start_weight,
        goal_weight,
    })
}

/// Collect all answers for the trajectory tool.
pub fn collect_trajectory_inputs(input: &mut impl InputSource) -> Result<TrajectoryInputs> {
    let ProfileInputs {
        profile,
        start_weight,
    } = collect_profile(input)?;
    let daily_intake = prompt_daily_intake(input)?;
    let days = prompt_days(input)?;

    Ok(TrajectoryInputs {
        profile,
        start_weight,
        daily_intake,
        days,
    })
}
