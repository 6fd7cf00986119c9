//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};

use crate::view::OutputFormat;

/// Students command arguments.
#[derive(Debug, Args)]
pub struct StudentsCommand {
    /// Only show students whose name contains this text (case-insensitive)
    #[arg(short = 'f', long, value_parser = NonEmptyStringValueParser::new())]
    pub filter: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Courses command arguments.
#[derive(Debug, Args)]
pub struct CoursesCommand {
    /// Show the registration of this student instead of all courses
    #[arg(short, long, value_name = "NAME")]
    pub student: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Student name (exact, case-insensitive)
    pub name: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Course lookup arguments.
#[derive(Debug, Args)]
pub struct CourseCommand {
    /// Course code (exact, case-insensitive)
    pub code: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_students_command_debug() {
        let cmd = StudentsCommand {
            filter: Some("hop".to_string()),
            format: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("filter"));
        assert!(debug_str.contains("hop"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
