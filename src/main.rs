use clap::Parser;

use weight_loss_estimator_rs::cli::GoalCli;
use weight_loss_estimator_rs::config::Config;
use weight_loss_estimator_rs::error::Result;
use weight_loss_estimator_rs::export::{write_goal_json, write_scenarios_csv};
use weight_loss_estimator_rs::interface::{collect_goal_inputs, display_scenarios, ConsoleInput};
use weight_loss_estimator_rs::logging;
use weight_loss_estimator_rs::simulation::expenditure;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = GoalCli::parse();
    let config = Config::load(cli.common.config.as_deref())?;
    logging::init_with_level(&config.logging.level);

    // Collect answers; bad values are re-prompted, never fatal
    let mut console = ConsoleInput::new();
    let inputs = collect_goal_inputs(&mut console)?;

    let initial_expenditure = expenditure(&inputs.profile, inputs.start_weight);
    let scenarios = config.goal_simulator().simulate_to_goal(
        &inputs.profile,
        inputs.start_weight,
        inputs.goal_weight,
    )?;

    display_scenarios(initial_expenditure, &scenarios);

    if let Some(path) = &cli.common.csv {
        write_scenarios_csv(&scenarios, path)?;
        println!("Wrote scenarios to {}", path.display());
    }

    if let Some(path) = &cli.common.json {
        write_goal_json(&inputs, initial_expenditure, &scenarios, path)?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}
