use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid goal: goal weight {goal} lbs must be positive and below start weight {start} lbs")]
    InvalidGoal { start: f64, goal: f64 },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error(
        "Simulation did not reach the goal within {days} days at {daily_calories:.0} kcal/day"
    )]
    SimulationDivergence { daily_calories: f64, days: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Input exhausted before all prompts were answered")]
    InputExhausted,
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
