use weight_loss_estimator_rs::config::ChartConfig;
use weight_loss_estimator_rs::interface::{
    collect_goal_inputs, collect_trajectory_inputs, final_weight_summary, render_scenario_table,
    render_weight_chart, ScriptedInput,
};
use weight_loss_estimator_rs::models::{ActivityLevel, Sex};
use weight_loss_estimator_rs::simulation::{simulate_to_goal, simulate_trajectory};

#[test]
fn test_goal_flow_recovers_from_bad_answers() {
    let mut input = ScriptedInput::new([
        "robot", "Male", // gender
        "twelve", "14", "30", // age
        "47.9", "70", // height
        "85", "200", // starting weight
        "lazy", "sedentary", // activity level
        "0", "150", // goal weight
    ]);

    let inputs = collect_goal_inputs(&mut input).unwrap();

    assert_eq!(inputs.profile.sex(), Sex::Male);
    assert_eq!(inputs.profile.age_years(), 30);
    assert_eq!(inputs.profile.height_inches(), 70.0);
    assert_eq!(inputs.profile.activity_level(), ActivityLevel::Sedentary);
    assert_eq!(inputs.start_weight, 200.0);
    assert_eq!(inputs.goal_weight, 150.0);
    assert_eq!(input.remaining(), 0);
    assert_eq!(
        input.messages(),
        [
            "Please choose 'male' or 'female'.",
            "Please enter a valid whole number.",
            "Age should be more than 14.",
            "Height should be more than 48 inches.",
            "Weight should be more than 90 pounds.",
            "Please choose a valid activity level.",
            "Goal weight should be a positive number.",
        ]
    );

    let scenarios = simulate_to_goal(&inputs.profile, inputs.start_weight, inputs.goal_weight)
        .unwrap();
    let table = render_scenario_table(&scenarios);

    assert!(table.contains("Daily Calorie Intake"));
    assert!(table.contains("Days to Goal"));
    // Borders, header, separator, bottom border plus one row per scenario.
    assert_eq!(table.lines().count(), 4 + scenarios.len());
}

#[test]
fn test_trajectory_flow_produces_summary_and_chart() {
    let mut input = ScriptedInput::new([
        "female",
        "41",
        "63.5",
        "172.4",
        "Moderately_Active",
        "1400",
        "0",
        "90",
    ]);

    let inputs = collect_trajectory_inputs(&mut input).unwrap();
    assert_eq!(inputs.daily_intake, 1400);
    assert_eq!(inputs.days, 90);
    assert_eq!(input.messages(), ["Number of days should be more than 0."]);
    assert_eq!(input.prompts().len(), 8);

    let trajectory = simulate_trajectory(
        &inputs.profile,
        inputs.start_weight,
        inputs.daily_intake as f64,
        inputs.days,
    )
    .unwrap();

    assert_eq!(trajectory.len(), 91);
    assert!(trajectory.final_weight() < 172.4);

    let summary = final_weight_summary(&trajectory);
    assert!(summary.contains("after 90 days"));

    let chart = render_weight_chart(&trajectory, &ChartConfig::default());
    assert!(chart.starts_with("Weight (lbs)"));
    assert!(chart.trim_end().ends_with("Day"));
    assert!(chart.contains("172.4"));
}
