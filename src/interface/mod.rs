pub mod input;
pub mod prompts;
pub mod render;

pub use input::{ConsoleInput, InputSource, ScriptedInput};
pub use prompts::{
    collect_goal_inputs, collect_profile, collect_trajectory_inputs, GoalInputs, ProfileInputs,
    PromptValue, TrajectoryInputs, ValidatedPrompt,
};
pub use render::{
    display_scenarios, display_trajectory, final_weight_summary, render_scenario_table,
    render_weight_chart,
};
