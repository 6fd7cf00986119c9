//! `registrar` - CLI for the academic records manager
//!
//! This binary loads the records file and prints student and course tables.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use registrar::cli::{
    Cli, Command, ConfigCommand, CourseCommand, CoursesCommand, ShowCommand, StatusCommand,
    StudentsCommand,
};
use registrar::{init_logging, view, Config, CourseRow, Registry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;
    let input = config.input_path(cli.input.as_ref());

    match cli.command {
        Command::Students(cmd) => handle_students(&config, &input, &cmd),
        Command::Courses(cmd) => handle_courses(&config, &input, &cmd),
        Command::Show(cmd) => handle_show(&config, &input, &cmd),
        Command::Course(cmd) => handle_course(&config, &input, &cmd),
        Command::Status(cmd) => handle_status(&config, &input, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_registry(config: &Config, input: &Path) -> anyhow::Result<Registry> {
    let mut registry = Registry::with_capacity(config.data.initial_capacity);
    registry
        .load_data(input)
        .with_context(|| format!("could not load records from {}", input.display()))?;
    Ok(registry)
}

fn handle_students(config: &Config, input: &Path, cmd: &StudentsCommand) -> anyhow::Result<()> {
    let registry = load_registry(config, input)?;
    let filter = cmd.filter.as_deref();
    let rows = registry.student_rows(filter);
    print!(
        "{}",
        view::render_students(&rows, filter, config.format(cmd.format))?
    );
    Ok(())
}

fn handle_courses(config: &Config, input: &Path, cmd: &CoursesCommand) -> anyhow::Result<()> {
    let registry = load_registry(config, input)?;
    let format = config.format(cmd.format);

    let out = match &cmd.student {
        Some(name) => {
            let student = registry.require_student(name)?;
            let rows = registry.course_rows_for(student);
            view::render_courses(&rows, Some(student.name()), format)?
        }
        None => view::render_courses(&registry.course_rows(), None, format)?,
    };
    print!("{out}");
    Ok(())
}

fn handle_show(config: &Config, input: &Path, cmd: &ShowCommand) -> anyhow::Result<()> {
    let registry = load_registry(config, input)?;
    let student = registry.require_student(&cmd.name)?;

    if cmd.json {
        let details = serde_json::json!({
            "student": student,
            "status": student.status(),
            "total_credit": student.total_credit(),
            "tuition_due": format!("{:.2}", student.tuition_due()),
            "info": student.info(),
        });
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("{}", student.info());
        println!();
        print!("{}", student.introduction());
        println!();
        println!("Total credit hours: {}", student.total_credit());
        println!("Tuition due:        {:.2}", student.tuition_due());
    }
    Ok(())
}

fn handle_course(config: &Config, input: &Path, cmd: &CourseCommand) -> anyhow::Result<()> {
    let registry = load_registry(config, input)?;
    let course = registry.require_course(&cmd.code)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&CourseRow::from(course))?);
    } else {
        println!("{course}");
    }
    Ok(())
}

fn handle_status(config: &Config, input: &Path, cmd: &StatusCommand) -> anyhow::Result<()> {
    let registry = load_registry(config, input)?;
    let stats = registry.stats();

    if cmd.json {
        let status = serde_json::json!({
            "input_path": input,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("registrar status");
        println!("----------------");
        println!("Records file:    {}", input.display());
        println!("Students:        {}", stats.students);
        println!("  Graduate:      {}", stats.graduates);
        println!("  Undergraduate: {}", stats.undergraduates);
        println!("Courses:         {}", stats.courses);
        println!("Credit hours:    {}", stats.total_credit);
        println!("Tuition due:     {:.2}", stats.total_tuition);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Data]");
                println!("  Input path:         {}", config.data.input_path.display());
                println!("  Initial capacity:   {}", config.data.initial_capacity);
                println!();
                println!("[Display]");
                println!("  Format:             {:?}", config.display.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path: PathBuf = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
