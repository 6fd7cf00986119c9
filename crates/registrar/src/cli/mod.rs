//! Command-line interface for registrar.
//!
//! This module provides the CLI structure for the `registrar` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CourseCommand, CoursesCommand, ShowCommand, StatusCommand, StudentsCommand,
};

/// registrar - Browse student records, registrations and tuition
///
/// Loads students and their courses from a records file and prints them as
/// tables, with optional name filtering.
#[derive(Debug, Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Records file to load (overrides the configured path)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List students with credit hours and tuition due
    Students(StudentsCommand),

    /// List all courses, or one student's registration
    Courses(CoursesCommand),

    /// Show one student's details
    Show(ShowCommand),

    /// Show one course
    Course(CourseCommand),

    /// Show registry totals
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::OutputFormat;
    use clap::CommandFactory;

    fn status_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            input: None,
            verbose,
            quiet,
            command: Command::Status(StatusCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "registrar");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(status_cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(status_cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(status_cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(status_cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_students() {
        let cli = Cli::try_parse_from(["registrar", "students"]).unwrap();
        match cli.command {
            Command::Students(cmd) => {
                assert!(cmd.filter.is_none());
                assert!(cmd.format.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_students_filter_and_format() {
        let cli = Cli::try_parse_from([
            "registrar", "students", "--filter", "hop", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Students(cmd) => {
                assert_eq!(cmd.filter.as_deref(), Some("hop"));
                assert_eq!(cmd.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_students_rejects_empty_filter() {
        let result = Cli::try_parse_from(["registrar", "students", "--filter", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_courses_for_student() {
        let cli =
            Cli::try_parse_from(["registrar", "courses", "--student", "Alan Turing"]).unwrap();
        match cli.command {
            Command::Courses(cmd) => assert_eq!(cmd.student.as_deref(), Some("Alan Turing")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["registrar", "show", "Grace Hopper", "--json"]).unwrap();
        match cli.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.name, "Grace Hopper");
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_input_after_subcommand() {
        let cli =
            Cli::try_parse_from(["registrar", "status", "-i", "/srv/records.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("/srv/records.txt")));
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["registrar", "-c", "/custom/config.toml", "status"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["registrar", "config", "validate", "--file", "x.toml"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }
}
