use serde::Serialize;

/// One candidate daily intake that reached the goal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntakeScenario {
    /// Daily calorie intake, rounded to whole kcal.
    pub daily_calories: i64,

    /// Simulated days until weight first dropped to or below the goal.
    pub days_to_goal: u64,
}

impl IntakeScenario {
    pub fn new(daily_calories: i64, days_to_goal: u64) -> Self {
        Self {
            daily_calories,
            days_to_goal,
        }
    }
}

/// Daily body weights in pounds; index 0 is the starting weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    weights: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_start(start_weight: f64, days: usize) -> Self {
        let mut weights = Vec::with_capacity(days + 1);
        weights.push(start_weight);
        Self { weights }
    }

    pub(crate) fn push(&mut self, weight: f64) {
        self.weights.push(weight);
    }

    /// Number of recorded points (simulated days + 1).
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of simulated days.
    pub fn days(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn start_weight(&self) -> f64 {
        self.weights.first().copied().unwrap_or(0.0)
    }

    pub fn final_weight(&self) -> f64 {
        self.weights.last().copied().unwrap_or(0.0)
    }

    /// `(day, weight)` pairs starting at day 0.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().copied().enumerate()
    }

    /// Lowest and highest weight on the trajectory.
    pub fn bounds(&self) -> (f64, f64) {
        self.weights
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &w| (lo.min(w), hi.max(w)))
    }
}
