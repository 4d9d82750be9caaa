use crate::config::ChartConfig;
use crate::models::{IntakeScenario, Trajectory};

const INTAKE_HEADER: &str = "Daily Calorie Intake";
const DAYS_HEADER: &str = "Days to Goal";

/// Render scenarios as a bordered table with centered cells.
pub fn render_scenario_table(scenarios: &[IntakeScenario]) -> String {
    let rows: Vec<[String; 2]> = scenarios
        .iter()
        .map(|s| [s.daily_calories.to_string(), s.days_to_goal.to_string()])
        .collect();

    let widths = [
        rows.iter()
            .map(|r| r[0].len())
            .chain([INTAKE_HEADER.len()])
            .max()
            .unwrap_or(0),
        rows.iter()
            .map(|r| r[1].len())
            .chain([DAYS_HEADER.len()])
            .max()
            .unwrap_or(0),
    ];

    let border = format!("+-{}-+-{}-+", "-".repeat(widths[0]), "-".repeat(widths[1]));
    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!(
        "| {:^w0$} | {:^w1$} |\n",
        INTAKE_HEADER,
        DAYS_HEADER,
        w0 = widths[0],
        w1 = widths[1]
    ));
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&format!(
            "| {:^w0$} | {:^w1$} |\n",
            row[0],
            row[1],
            w0 = widths[0],
            w1 = widths[1]
        ));
    }
    out.push_str(&border);
    out.push('\n');

    out
}

/// Print the goal estimator report.
pub fn display_scenarios(initial_expenditure: f64, scenarios: &[IntakeScenario]) {
    println!();
    println!(
        "Estimated daily energy expenditure: {:.0} kcal",
        initial_expenditure
    );
    println!();

    if scenarios.is_empty() {
        println!("No intake level reaches the goal weight.");
        return;
    }

    print!("{}", render_scenario_table(scenarios));
}

/// One-line summary of where the trajectory ends.
pub fn final_weight_summary(trajectory: &Trajectory) -> String {
    format!(
        "Your weight after {} days will be approximately: {:.2} lbs.",
        trajectory.days(),
        trajectory.final_weight()
    )
}

/// Render the trajectory as a text line chart.
///
/// Day runs along the x-axis from 0 to the last day, weight along the
/// y-axis. When there are more days than columns, each column shows the day
/// nearest its position.
pub fn render_weight_chart(trajectory: &Trajectory, config: &ChartConfig) -> String {
    let width = config.width.max(2);
    let height = config.height.max(2);
    let days = trajectory.days();
    let weights = trajectory.weights();

    let (lo, hi) = trajectory.bounds();
    let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    };

    let columns = width.min(days + 1);
    let mut grid = vec![vec![' '; columns]; height];
    let mut previous_row: Option<usize> = None;

    for col in 0..columns {
        let day = if columns == 1 {
            0
        } else {
            (col as f64 * days as f64 / (columns - 1) as f64).round() as usize
        };
        let weight = weights[day.min(days)];
        let scaled = (weight - lo) / (hi - lo) * (height - 1) as f64;
        let row = height - 1 - (scaled.round() as usize).min(height - 1);

        // Join steep steps with a vertical run so the line stays connected.
        if let Some(prev) = previous_row {
            let (top, bottom) = if prev < row { (prev, row) } else { (row, prev) };
            for r in (top + 1)..bottom {
                grid[r][col] = '|';
            }
        }
        grid[row][col] = '*';
        previous_row = Some(row);
    }

    let top_label = format!("{:.1}", hi);
    let bottom_label = format!("{:.1}", lo);
    let label_width = top_label.len().max(bottom_label.len());

    let mut out = String::new();
    out.push_str("Weight (lbs)\n");
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            top_label.as_str()
        } else if i == height - 1 {
            bottom_label.as_str()
        } else {
            ""
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{:>w$} |{}\n", label, line.trim_end(), w = label_width));
    }

    out.push_str(&format!("{:>w$} +{}\n", "", "-".repeat(columns), w = label_width));

    let last_day = days.to_string();
    let gap = columns.saturating_sub(1 + last_day.len());
    out.push_str(&format!(
        "{:>w$}  0{}{}\n",
        "",
        " ".repeat(gap),
        if columns > last_day.len() { last_day.as_str() } else { "" },
        w = label_width
    ));
    out.push_str(&format!("{:>w$}  Day\n", "", w = label_width));

    out
}

/// Print the trajectory summary line followed by the chart.
pub fn display_trajectory(trajectory: &Trajectory, config: &ChartConfig) {
    println!();
    println!("{}", final_weight_summary(trajectory));
    println!();
    print!("{}", render_weight_chart(trajectory, config));
}
