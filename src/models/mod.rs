pub mod profile;
pub mod scenario;

pub use profile::{normalize_label, ActivityLevel, BodyProfile, Sex};
pub use scenario::{IntakeScenario, Trajectory};
