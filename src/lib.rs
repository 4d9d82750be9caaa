pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod simulation;

pub use config::Config;
pub use error::{EstimatorError, Result};
pub use models::{ActivityLevel, BodyProfile, IntakeScenario, Sex, Trajectory};
