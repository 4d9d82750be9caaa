use tracing::{debug, info, warn};

use crate::error::{EstimatorError, Result};
use crate::models::{BodyProfile, IntakeScenario};
use crate::simulation::constants::{
    DEFAULT_MAX_DAYS, INTAKE_STEP, KCAL_PER_POUND, MAX_INTAKE_CANDIDATES,
};
use crate::simulation::energy::expenditure;

/// Searches candidate daily intakes for how long each takes to reach a goal weight.
#[derive(Debug, Clone, Copy)]
pub struct GoalSimulator {
    max_days: u64,
}

impl Default for GoalSimulator {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

impl GoalSimulator {
    /// Simulator that gives up on a candidate after `max_days` simulated days.
    pub fn with_max_days(max_days: u64) -> Self {
        Self { max_days }
    }

    pub fn max_days(&self) -> u64 {
        self.max_days
    }

    /// Days to reach the goal for every candidate intake that gets there.
    ///
    /// Candidates run from zero deficit down to fasting, in that order.
    /// Candidates that can never reach the goal are left out of the result.
    pub fn simulate_to_goal(
        &self,
        profile: &BodyProfile,
        start_weight: f64,
        goal_weight: f64,
    ) -> Result<Vec<IntakeScenario>> {
        validate_goal(start_weight, goal_weight)?;

        let initial = expenditure(profile, start_weight);
        let candidates = candidate_intakes(initial)?;
        info!(
            initial_expenditure = initial,
            candidates = candidates.len(),
            "Simulating goal scenarios"
        );

        let mut scenarios = Vec::with_capacity(candidates.len());
        for intake in candidates {
            match self.days_to_goal_at(profile, start_weight, goal_weight, intake)? {
                Some(days) => {
                    debug!(intake, days, "Scenario reached goal");
                    scenarios.push(IntakeScenario::new(intake.round() as i64, days));
                }
                None => debug!(intake, "Scenario cannot reach goal, skipped"),
            }
        }

        Ok(scenarios)
    }

    /// Days needed to get from `start_weight` to `goal_weight` at a fixed intake.
    ///
    /// Returns `Ok(None)` when the intake never produces a deficit large
    /// enough to reach the goal. Expenditure is linear in weight, so the
    /// deficit shrinks as weight falls and is smallest at the goal itself:
    /// a deficit of zero or less there means weight only approaches an
    /// equilibrium above the goal.
    pub fn days_to_goal_at(
        &self,
        profile: &BodyProfile,
        start_weight: f64,
        goal_weight: f64,
        daily_intake: f64,
    ) -> Result<Option<u64>> {
        validate_goal(start_weight, goal_weight)?;
        if !daily_intake.is_finite() || daily_intake < 0.0 {
            return Err(EstimatorError::InvalidParameters(format!(
                "daily intake must be a finite non-negative number, got {}",
                daily_intake
            )));
        }

        if expenditure(profile, goal_weight) - daily_intake <= 0.0 {
            return Ok(None);
        }

        let mut weight = start_weight;
        let mut days = 0u64;

        while weight > goal_weight {
            let deficit = expenditure(profile, weight) - daily_intake;
            if deficit <= 0.0 {
                return Ok(None);
            }
            if days >= self.max_days {
                warn!(daily_intake, days, weight, "Goal simulation hit the day ceiling");
                return Err(EstimatorError::SimulationDivergence {
                    daily_calories: daily_intake,
                    days,
                });
            }

            weight -= deficit / KCAL_PER_POUND;
            days += 1;
        }

        Ok(Some(days))
    }
}

/// Candidate daily intakes: `initial - 500k` for every k keeping the value
/// non-negative, followed by a final zero.
///
/// Duplicates are kept, so an expenditure that is an exact multiple of the
/// step ends with two zero entries. Expenditures that are not finite, or
/// would need more than [`MAX_INTAKE_CANDIDATES`] steps, are rejected.
pub fn candidate_intakes(initial_expenditure: f64) -> Result<Vec<f64>> {
    let steps = (initial_expenditure / INTAKE_STEP).floor();
    if !steps.is_finite() || steps < 0.0 || steps >= MAX_INTAKE_CANDIDATES as f64 {
        return Err(EstimatorError::InvalidParameters(format!(
            "initial expenditure of {} kcal is outside the searchable range",
            initial_expenditure
        )));
    }

    let steps = steps as u64;
    let mut candidates: Vec<f64> = (0..=steps)
        .map(|k| initial_expenditure - INTAKE_STEP * k as f64)
        .filter(|intake| *intake >= 0.0)
        .collect();
    candidates.push(0.0);
    Ok(candidates)
}

/// Convenience wrapper using the default day ceiling.
pub fn simulate_to_goal(
    profile: &BodyProfile,
    start_weight: f64,
    goal_weight: f64,
) -> Result<Vec<IntakeScenario>> {
    GoalSimulator::default().simulate_to_goal(profile, start_weight, goal_weight)
}

fn validate_goal(start_weight: f64, goal_weight: f64) -> Result<()> {
    let ordered = start_weight.is_finite()
        && goal_weight.is_finite()
        && goal_weight > 0.0
        && start_weight > goal_weight;
    if ordered {
        Ok(())
    } else {
        Err(EstimatorError::InvalidGoal {
            start: start_weight,
            goal: goal_weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};

    fn reference_profile() -> BodyProfile {
        BodyProfile::new(Sex::Male, 70.0, 30, ActivityLevel::Sedentary).unwrap()
    }

    #[test]
    fn test_candidates_step_down_to_zero() {
        let candidates = candidate_intakes(2140.5).unwrap();
        assert_eq!(candidates, vec![2140.5, 1640.5, 1140.5, 640.5, 140.5, 0.0]);
    }

    #[test]
    fn test_candidates_keep_duplicate_zero() {
        let candidates = candidate_intakes(1000.0).unwrap();
        assert_eq!(candidates, vec![1000.0, 500.0, 0.0, 0.0]);
    }

    #[test]
    fn test_candidates_below_one_step() {
        assert_eq!(candidate_intakes(120.0).unwrap(), vec![120.0, 0.0]);
    }

    #[test]
    fn test_candidates_reject_unsearchable_expenditure() {
        for initial in [5.45e20, 1e12, f64::INFINITY, f64::NAN, -1.0] {
            assert!(
                matches!(
                    candidate_intakes(initial),
                    Err(EstimatorError::InvalidParameters(_))
                ),
                "{}",
                initial
            );
        }
    }

    #[test]
    fn test_huge_start_weight_fails_fast() {
        let p = reference_profile();
        assert!(matches!(
            simulate_to_goal(&p, 1e20, 150.0),
            Err(EstimatorError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let p = reference_profile();
        assert!(matches!(
            simulate_to_goal(&p, 150.0, 150.0),
            Err(EstimatorError::InvalidGoal { .. })
        ));
        assert!(matches!(
            simulate_to_goal(&p, 150.0, 180.0),
            Err(EstimatorError::InvalidGoal { .. })
        ));
        assert!(matches!(
            simulate_to_goal(&p, 150.0, 0.0),
            Err(EstimatorError::InvalidGoal { .. })
        ));
    }

    #[test]
    fn test_zero_deficit_candidate_is_skipped() {
        let p = reference_profile();
        let initial = expenditure(&p, 200.0);
        let days = GoalSimulator::default()
            .days_to_goal_at(&p, 200.0, 190.0, initial)
            .unwrap();
        assert_eq!(days, None);
    }

    #[test]
    fn test_equilibrium_above_goal_is_skipped() {
        let p = reference_profile();
        // Weight settles where expenditure meets intake, well above 150 lbs.
        let intake = expenditure(&p, 180.0);
        let days = GoalSimulator::default()
            .days_to_goal_at(&p, 200.0, 150.0, intake)
            .unwrap();
        assert_eq!(days, None);
    }

    #[test]
    fn test_day_ceiling_surfaces_divergence() {
        crate::logging::init_test();
        let p = reference_profile();
        let result = GoalSimulator::with_max_days(5).days_to_goal_at(&p, 200.0, 150.0, 0.0);
        assert!(matches!(
            result,
            Err(EstimatorError::SimulationDivergence { days: 5, .. })
        ));
    }

    #[test]
    fn test_calories_rounded_in_scenarios() {
        let p = reference_profile();
        let initial = expenditure(&p, 200.0).round() as i64;
        let scenarios = simulate_to_goal(&p, 200.0, 190.0).unwrap();

        assert!(!scenarios.is_empty());
        for s in scenarios.iter().filter(|s| s.daily_calories != 0) {
            assert_eq!((initial - s.daily_calories) % 500, 0, "{:?}", s);
        }
        assert_eq!(scenarios.last().map(|s| s.daily_calories), Some(0));
    }
}
