use clap::Parser;

use weight_loss_estimator_rs::cli::TrajectoryCli;
use weight_loss_estimator_rs::config::Config;
use weight_loss_estimator_rs::error::Result;
use weight_loss_estimator_rs::export::{write_trajectory_csv, write_trajectory_json};
use weight_loss_estimator_rs::interface::{
    collect_trajectory_inputs, display_trajectory, ConsoleInput,
};
use weight_loss_estimator_rs::logging;
use weight_loss_estimator_rs::simulation::simulate_trajectory;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = TrajectoryCli::parse();
    let config = Config::load(cli.common.config.as_deref())?;
    logging::init_with_level(&config.logging.level);

    let mut console = ConsoleInput::new();
    let inputs = collect_trajectory_inputs(&mut console)?;

    let trajectory = simulate_trajectory(
        &inputs.profile,
        inputs.start_weight,
        inputs.daily_intake as f64,
        inputs.days,
    )?;

    display_trajectory(&trajectory, &config.chart);

    if let Some(path) = &cli.common.csv {
        write_trajectory_csv(&trajectory, path)?;
        println!("Wrote daily weights to {}", path.display());
    }

    if let Some(path) = &cli.common.json {
        write_trajectory_json(&inputs, &trajectory, path)?;
        println!("Wrote report to {}", path.display());
    }

    Ok(())
}
