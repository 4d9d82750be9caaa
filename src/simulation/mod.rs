pub mod constants;
pub mod energy;
pub mod goal;
pub mod trajectory;

pub use constants::*;
pub use energy::{basal_metabolic_rate, daily_weight_change, expenditure};
pub use goal::{candidate_intakes, simulate_to_goal, GoalSimulator};
pub use trajectory::simulate_trajectory;
