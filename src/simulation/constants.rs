use crate::models::{ActivityLevel, Sex};

/// Energy equivalent of one pound of body mass (kcal).
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Pounds per kilogram, as used by the weight term.
pub const POUNDS_PER_KG: f64 = 2.2;

/// Centimeters per inch, as used by the height term.
pub const CM_PER_INCH: f64 = 2.54;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const MSJ_WEIGHT_COEFF: f64 = 10.0;

/// kcal per centimeter of height.
pub const MSJ_HEIGHT_COEFF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const MSJ_AGE_COEFF: f64 = 5.0;

pub const MSJ_MALE_OFFSET: f64 = 5.0;
pub const MSJ_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal search
// ─────────────────────────────────────────────────────────────────────────────

/// Spacing between candidate daily intakes (kcal).
pub const INTAKE_STEP: f64 = 500.0;

/// Default ceiling on simulated days per goal candidate.
pub const DEFAULT_MAX_DAYS: u64 = 100_000;

/// Most candidate intakes a goal search will generate.
pub const MAX_INTAKE_CANDIDATES: u64 = 1_000;

/// Longest trajectory that will be simulated, in days.
pub const MAX_TRAJECTORY_DAYS: u32 = 1_000_000;

/// Activity multiplier applied to BMR.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Sex-specific constant term of the BMR equation.
pub fn sex_offset(sex: Sex) -> f64 {
    match sex {
        Sex::Male => MSJ_MALE_OFFSET,
        Sex::Female => MSJ_FEMALE_OFFSET,
    }
}
