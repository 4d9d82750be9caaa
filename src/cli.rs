use std::path::PathBuf;

use clap::{Args, Parser};

/// Options shared by both tools. All answers are still collected interactively.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write the results to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Also write inputs and results to this JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Estimate how many days each daily calorie intake takes to reach a goal weight.
#[derive(Parser, Debug)]
#[command(name = "days-to-goal")]
#[command(author, version, about, long_about = None)]
pub struct GoalCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Simulate body weight day by day for a fixed daily calorie intake.
#[derive(Parser, Debug)]
#[command(name = "weight-trajectory")]
#[command(author, version, about, long_about = None)]
pub struct TrajectoryCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_valid() {
        let cli = GoalCli::try_parse_from(["days-to-goal"]).unwrap();
        assert!(cli.common.config.is_none());
        assert!(cli.common.csv.is_none());
    }

    #[test]
    fn test_export_flags() {
        let cli = TrajectoryCli::try_parse_from([
            "weight-trajectory",
            "--csv",
            "out.csv",
            "--json",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.common.csv, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.common.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(GoalCli::try_parse_from(["days-to-goal", "--days", "3"]).is_err());
    }
}
