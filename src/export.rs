use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::interface::{GoalInputs, TrajectoryInputs};
use crate::models::{IntakeScenario, Trajectory};

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write goal scenarios to a CSV file.
pub fn write_scenarios_csv(scenarios: &[IntakeScenario], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["daily_calorie_intake", "days_to_goal"])?;
    for scenario in scenarios {
        wtr.write_record([
            scenario.daily_calories.to_string(),
            scenario.days_to_goal.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write one row per day (day 0 included) to a CSV file.
pub fn write_trajectory_csv(trajectory: &Trajectory, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "weight_lbs"])?;
    for (day, weight) in trajectory.points() {
        wtr.write_record([day.to_string(), format!("{:.4}", weight)])?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct GoalReport<'a> {
    inputs: &'a GoalInputs,
    initial_expenditure: f64,
    scenarios: &'a [IntakeScenario],
}

#[derive(Serialize)]
struct TrajectoryReport<'a> {
    inputs: &'a TrajectoryInputs,
    final_weight: f64,
    weights: Vec<f64>,
}

/// Write the goal estimator inputs and results as pretty JSON.
pub fn write_goal_json(
    inputs: &GoalInputs,
    initial_expenditure: f64,
    scenarios: &[IntakeScenario],
    path: &Path,
) -> Result<()> {
    let report = GoalReport {
        inputs,
        initial_expenditure: round_to(initial_expenditure, 1),
        scenarios,
    };
    write_json(&report, path)
}

/// Write the trajectory inputs and daily weights as pretty JSON.
pub fn write_trajectory_json(
    inputs: &TrajectoryInputs,
    trajectory: &Trajectory,
    path: &Path,
) -> Result<()> {
    let report = TrajectoryReport {
        inputs,
        final_weight: round_to(trajectory.final_weight(), 2),
        weights: trajectory.weights().iter().map(|w| round_to(*w, 4)).collect(),
    };
    write_json(&report, path)
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    Ok(())
}
