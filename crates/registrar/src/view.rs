//! Text rendering of student and course tables.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{CourseRow, StudentRow};

/// Title of the student table.
pub const STUDENT_TABLE_TITLE: &str = "Student Information System";

/// Title of the full course table.
pub const COURSE_TABLE_TITLE: &str = "List of Courses";

/// Column headers of the student table.
pub const STUDENT_COLUMNS: [&str; 4] = ["Name", "Student Type", "Total Credit Hours", "Tuition Due"];

/// Column headers of course tables.
pub const COURSE_COLUMNS: [&str; 3] = ["Code", "Title", "Credit Hour"];

const COLUMN_GAP: &str = "  ";

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated rows, no header
    Plain,
    /// Aligned table with title and header
    #[default]
    Table,
    /// JSON array
    Json,
}

/// A value that can be shown as one table row.
pub trait TableRow: Serialize {
    /// Cell text in column order.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for StudentRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.student_type.clone(),
            self.total_credit.to_string(),
            self.tuition_due.clone(),
        ]
    }
}

impl TableRow for CourseRow {
    fn cells(&self) -> Vec<String> {
        vec![self.code.clone(), self.title.clone(), self.credit.to_string()]
    }
}

/// Title of the student table, noting the filter when one is applied.
#[must_use]
pub fn student_title(filter: Option<&str>) -> String {
    match filter {
        Some(key) => format!("{STUDENT_TABLE_TITLE} | Filtered: {key}"),
        None => STUDENT_TABLE_TITLE.to_string(),
    }
}

/// Title of a course table, naming the student for a registration.
#[must_use]
pub fn course_title(student: Option<&str>) -> String {
    match student {
        Some(name) => format!("Student Details: {name}"),
        None => COURSE_TABLE_TITLE.to_string(),
    }
}

/// Render the student table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_students(
    rows: &[StudentRow],
    filter: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    render(&student_title(filter), &STUDENT_COLUMNS, rows, format)
}

/// Render a course table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_courses(
    rows: &[CourseRow],
    student: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    render(&course_title(student), &COURSE_COLUMNS, rows, format)
}

/// Render rows in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render<R: TableRow>(
    title: &str,
    columns: &[&str],
    rows: &[R],
    format: OutputFormat,
) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows)? + "\n",
        OutputFormat::Plain => rows.iter().fold(String::new(), |mut out, row| {
            out.push_str(&row.cells().join("\t"));
            out.push('\n');
            out
        }),
        OutputFormat::Table => render_table(title, columns, rows),
    };
    Ok(out)
}

fn render_table<R: TableRow>(title: &str, columns: &[&str], rows: &[R]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let header: Vec<String> = columns.iter().map(ToString::to_string).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    if cells.is_empty() {
        out.push_str("(no records)\n");
    }
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
