//! Command-line arguments and the per-line session grammar.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use todo_core::{Priority, SortKey, TodoConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Interactive in-memory to-do list
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Priority for tasks added without `-p` (1 = most urgent)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub default_priority: i32,

    /// Order used by `list` when none is given (priority, date, created, none)
    #[arg(long, default_value = "priority")]
    pub sort: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Verbose logging to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings resolved from [`Cli`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub todo: TodoConfig,
    pub output: OutputFormat,
}

impl Cli {
    pub fn config(&self) -> CliConfig {
        CliConfig {
            todo: TodoConfig {
                default_priority: Priority::new(self.default_priority),
                default_sort: SortKey::from_name(&self.sort),
            },
            output: self.output,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// One line typed into the interactive session.
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a task: add [-p PRIORITY] [-d YYYY-MM-DD] NAME...
    Add {
        /// Priority (1 = most urgent, 5 = least)
        #[arg(short, long, allow_negative_numbers = true)]
        priority: Option<i32>,

        /// Due date, defaults to today
        #[arg(short, long)]
        due: Option<NaiveDate>,

        /// Task name
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List tasks: list [priority|date|created|none]
    #[command(alias = "ls")]
    List {
        /// Sort order; unknown values keep insertion order
        sort: Option<String>,
    },

    /// Mark a task as completed
    #[command(alias = "complete")]
    Done { id: u64 },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Undo the last add, done or delete
    Undo,

    /// Show the most urgent pending task
    Next,

    /// Search task names (case-insensitive); no keyword lists every task
    Search {
        /// Words are joined with single spaces
        #[arg(num_args = 0.., trailing_var_arg = true)]
        keyword: Vec<String>,
    },

    /// Show task counts
    Stats,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(line: &str) -> Result<SessionCommand, clap::Error> {
        SessionLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }

    #[test]
    fn add_joins_name_words() {
        assert_eq!(
            parse("add -p 2 -d 2026-11-01 Buy oat milk").unwrap(),
            SessionCommand::Add {
                priority: Some(2),
                due: NaiveDate::from_ymd_opt(2026, 11, 1),
                name: vec!["Buy".into(), "oat".into(), "milk".into()],
            }
        );
    }

    #[test]
    fn add_without_options() {
        assert_eq!(
            parse("add Walk dog").unwrap(),
            SessionCommand::Add {
                priority: None,
                due: None,
                name: vec!["Walk".into(), "dog".into()],
            }
        );
    }

    #[rstest]
    #[case::non_numeric_id("done abc")]
    #[case::non_numeric_priority("add -p high Something")]
    #[case::bad_date("add -d 2026-13-40 Something")]
    #[case::missing_name("add -p 1")]
    #[case::unknown_command("frobnicate")]
    fn malformed_input_is_rejected(#[case] line: &str) {
        assert!(parse(line).is_err());
    }

    #[rstest]
    #[case("done 3", SessionCommand::Done { id: 3 })]
    #[case("complete 3", SessionCommand::Done { id: 3 })]
    #[case("rm 4", SessionCommand::Delete { id: 4 })]
    #[case("ls", SessionCommand::List { sort: None })]
    #[case("list date", SessionCommand::List { sort: Some("date".into()) })]
    #[case("exit", SessionCommand::Quit)]
    #[case("search", SessionCommand::Search { keyword: vec![] })]
    fn aliases(#[case] line: &str, #[case] expected: SessionCommand) {
        assert_eq!(parse(line).unwrap(), expected);
    }

    #[test]
    fn cli_config_resolves_sort_and_priority() {
        let cli = Cli::try_parse_from(["todo", "--default-priority", "1", "--sort", "bogus", "-vv"])
            .unwrap();
        let config = cli.config();
        assert_eq!(config.todo.default_priority, Priority::new(1));
        assert_eq!(config.todo.default_sort, SortKey::Insertion);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }
}
