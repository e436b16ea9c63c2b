use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::DateTime;

use crate::cli::{DayArgs, KeyCommands, PlanCommands, TaskCommands, WatchArgs, WeekArgs};

/// Weekly study and task planner
///
/// Cadence keeps a weekly schedule of recurring and one-off tasks, tracks
/// whether each occurrence was completed or failed, and can generate a
/// seven-day study plan from a free-text description of your week. Run
/// without a command to see today.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pin the current local time, e.g. 2024-03-11T09:30
    #[arg(long, global = true, hide = true)]
    pub now: Option<DateTime>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the week overview
    #[command(alias = "w")]
    Week(WeekArgs),
    /// Show one day's tasks
    #[command(alias = "d")]
    Day(DayArgs),
    /// Manage tasks in the weekly schedule
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage the generated study plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage the OpenAI API key
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Keep a day view on screen, refreshing it periodically
    Watch(WatchArgs),
    /// Start the MCP server
    Serve,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_week_offsets_parse() {
        let args = Args::try_parse_from(["cadence", "week", "--offset", "-2"]).unwrap();
        match args.command {
            Some(Commands::Week(week)) => assert_eq!(week.offset, -2),
            _ => panic!("expected the week command"),
        }
    }

    #[test]
    fn test_pinned_time_parses() {
        let args = Args::try_parse_from(["cadence", "--now", "2024-03-11T09:30"]).unwrap();
        assert_eq!(
            args.now,
            Some(jiff::civil::date(2024, 3, 11).at(9, 30, 0, 0))
        );
        assert!(args.command.is_none());
    }
}
