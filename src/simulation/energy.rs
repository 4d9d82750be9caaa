use crate::models::BodyProfile;
use crate::simulation::constants::*;

/// Basal metabolic rate (kcal/day) by the Mifflin-St Jeor equation.
///
/// Weight is in pounds and height in inches; both are converted to metric
/// before the coefficients are applied. The raw value is returned, so it can
/// go negative for implausibly small weights.
pub fn basal_metabolic_rate(profile: &BodyProfile, weight_lbs: f64) -> f64 {
    let weight_kg = weight_lbs / POUNDS_PER_KG;
    let height_cm = profile.height_inches() * CM_PER_INCH;

    MSJ_WEIGHT_COEFF * weight_kg + MSJ_HEIGHT_COEFF * height_cm
        - MSJ_AGE_COEFF * profile.age_years() as f64
        + sex_offset(profile.sex())
}

/// Total daily energy expenditure (kcal/day) at the given weight.
///
/// BMR scaled by the activity multiplier, floored at zero.
pub fn expenditure(profile: &BodyProfile, weight_lbs: f64) -> f64 {
    let tdee = basal_metabolic_rate(profile, weight_lbs) * activity_multiplier(profile.activity_level());
    tdee.max(0.0)
}

/// Pounds lost in one day at the given weight and intake.
///
/// Negative when intake exceeds expenditure (weight gain).
#[inline]
pub fn daily_weight_change(profile: &BodyProfile, weight_lbs: f64, daily_intake: f64) -> f64 {
    (expenditure(profile, weight_lbs) - daily_intake) / KCAL_PER_POUND
}
