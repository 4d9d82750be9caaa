use tracing::info;

use crate::error::{EstimatorError, Result};
use crate::models::{BodyProfile, Trajectory};
use crate::simulation::constants::MAX_TRAJECTORY_DAYS;
use crate::simulation::energy::daily_weight_change;

/// Simulate body weight for `days` days at a fixed daily intake.
///
/// Expenditure is recomputed from the previous day's weight before each day's
/// change is applied. Intake above expenditure gains weight; weight is
/// clamped at zero. Always runs the full day count, which must be between 1
/// and [`MAX_TRAJECTORY_DAYS`].
pub fn simulate_trajectory(
    profile: &BodyProfile,
    start_weight: f64,
    daily_intake: f64,
    days: u32,
) -> Result<Trajectory> {
    if days == 0 || days > MAX_TRAJECTORY_DAYS {
        return Err(EstimatorError::InvalidParameters(format!(
            "number of days must be between 1 and {}, got {}",
            MAX_TRAJECTORY_DAYS, days
        )));
    }
    if !daily_intake.is_finite() || daily_intake < 0.0 {
        return Err(EstimatorError::InvalidParameters(format!(
            "daily intake must be a finite non-negative number, got {}",
            daily_intake
        )));
    }
    if !start_weight.is_finite() || start_weight <= 0.0 {
        return Err(EstimatorError::InvalidParameters(format!(
            "start weight must be a positive number of pounds, got {}",
            start_weight
        )));
    }

    let mut trajectory = Trajectory::with_start(start_weight, days as usize);
    let mut weight = start_weight;

    for _ in 0..days {
        weight = (weight - daily_weight_change(profile, weight, daily_intake)).max(0.0);
        trajectory.push(weight);
    }

    info!(
        start_weight,
        final_weight = weight,
        daily_intake,
        days,
        "Simulated weight trajectory"
    );

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};
    use crate::simulation::energy::expenditure;
    use assert_float_eq::assert_float_absolute_eq;

    fn profile() -> BodyProfile {
        BodyProfile::new(Sex::Female, 64.0, 35, ActivityLevel::LightlyActive).unwrap()
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let p = profile();
        assert!(matches!(
            simulate_trajectory(&p, 160.0, 1800.0, 0),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            simulate_trajectory(&p, 160.0, 1800.0, 4_000_000_000),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            simulate_trajectory(&p, 160.0, -1.0, 10),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            simulate_trajectory(&p, 160.0, f64::INFINITY, 10),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            simulate_trajectory(&p, f64::NAN, 1800.0, 10),
            Err(EstimatorError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_longest_allowed_trajectory() {
        let trajectory = simulate_trajectory(&profile(), 160.0, 1800.0, MAX_TRAJECTORY_DAYS).unwrap();
        assert_eq!(trajectory.len(), MAX_TRAJECTORY_DAYS as usize + 1);
    }

    #[test]
    fn test_first_day_uses_start_weight_expenditure() {
        let p = profile();
        let intake = 1200.0;
        let trajectory = simulate_trajectory(&p, 160.0, intake, 3).unwrap();

        let expected = 160.0 - (expenditure(&p, 160.0) - intake) / 3500.0;
        assert_float_absolute_eq!(trajectory.weights()[1], expected, 1e-12);
    }

    #[test]
    fn test_surplus_gains_weight() {
        let p = profile();
        let trajectory = simulate_trajectory(&p, 160.0, 4000.0, 30).unwrap();
        assert!(trajectory.final_weight() > trajectory.start_weight());
    }
}
