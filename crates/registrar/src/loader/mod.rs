//! Records file loader.
//!
//! The records file is a flat text format:
//!
//! ```text
//! <student count>
//! <name line>
//! Graduate <thesis topic>          | Undergraduate <year level>
//! <course count>
//! <code> <credit> <title>          (one line per course)
//! ...
//! ```
//!
//! Parsing is all-or-nothing: the first malformed value aborts the load with
//! [`Error::Parse`](crate::Error::Parse) naming the line.

mod scanner;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::records::{Course, Student};

use scanner::Scanner;

/// Type token that marks a graduate student.
pub const GRADUATE_TOKEN: &str = "Graduate";

/// Type token that marks an undergraduate student.
pub const UNDERGRADUATE_TOKEN: &str = "Undergraduate";

/// Counts gathered while ingesting a records file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Student entries read from the file.
    pub students_read: usize,
    /// Students added to the registry (duplicates by name are skipped).
    pub students_added: usize,
    /// Course lines read across all students.
    pub enrollments_read: usize,
    /// Distinct courses added to the course catalog.
    pub courses_added: usize,
}

/// Read the whole records file into memory.
///
/// # Errors
///
/// Returns [`Error::InputOpen`] if the file does not exist or cannot be read.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading records from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::InputOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse records text into students, in file order, each with their courses.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a count, credit or year level is missing or not
/// a non-negative integer, or the input ends early.
pub fn parse(input: &str) -> Result<Vec<Student>> {
    let mut scanner = Scanner::new(input);

    let count: usize = scanner.next_number("a student count")?;
    scanner.rest_of_line();

    // The count is untrusted, so the vector grows as students are actually read.
    let mut students = Vec::new();
    for _ in 0..count {
        students.push(parse_student(&mut scanner)?);
    }

    debug!(students = students.len(), "Parsed records");
    Ok(students)
}

fn parse_student(scanner: &mut Scanner<'_>) -> Result<Student> {
    let line = scanner.line();
    let name = scanner
        .next_line()
        .ok_or_else(|| Error::parse(line, "unexpected end of input, expected a student name"))?;

    let type_token = scanner.expect_token("a student type")?;
    let mut student = if type_token == GRADUATE_TOKEN {
        let topic = scanner.rest_of_line().trim();
        Student::graduate(name, topic)
    } else {
        if type_token != UNDERGRADUATE_TOKEN {
            warn!(
                student = name,
                token = type_token,
                "Unknown student type, treating as undergraduate"
            );
        }
        let year_level: u32 = scanner.next_number("a year level")?;
        Student::undergraduate(name, year_level)
    };

    let course_count: usize = scanner.next_number("a course count")?;
    scanner.rest_of_line();

    for _ in 0..course_count {
        student.add_course(parse_course(scanner)?);
    }

    Ok(student)
}

fn parse_course(scanner: &mut Scanner<'_>) -> Result<Course> {
    let code = scanner.expect_token("a course code")?;
    let credit: u32 = scanner.next_number("a credit count")?;
    let title = scanner.rest_of_line().trim();
    Ok(Course::new(code, title, credit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::StudentKind;

    const SAMPLE: &str = "\
2
Grace Hopper
Graduate   Compiler Design
2
CS501 3 Advanced Compilers
CS510 4 Type Systems
Alan Turing
Undergraduate 2
1
MA101 4 Calculus I
";

    #[test]
    fn test_parse_sample() {
        let students = parse(SAMPLE).unwrap();
        assert_eq!(students.len(), 2);

        let grace = &students[0];
        assert_eq!(grace.name(), "Grace Hopper");
        assert_eq!(
            grace.kind(),
            &StudentKind::Graduate {
                thesis_topic: "Compiler Design".to_string()
            }
        );
        assert_eq!(grace.courses().len(), 2);
        assert_eq!(grace.courses()[1], Course::new("CS510", "Type Systems", 4));

        let alan = &students[1];
        assert_eq!(alan.kind(), &StudentKind::Undergraduate { year_level: 2 });
        assert_eq!(alan.total_credit(), 4);
    }

    #[test]
    fn test_parse_crlf() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let students = parse(&crlf).unwrap();
        assert_eq!(students[0].name(), "Grace Hopper");
        assert_eq!(students[0].courses()[0].title(), "Advanced Compilers");
        assert_eq!(students[1].name(), "Alan Turing");
    }

    #[test]
    fn test_parse_year_level_on_next_line() {
        let input = "1\nAda\nUndergraduate\n3\n0\n";
        let students = parse(input).unwrap();
        assert_eq!(students[0].kind(), &StudentKind::Undergraduate { year_level: 3 });
        assert!(students[0].courses().is_empty());
    }

    #[test]
    fn test_parse_unknown_type_token_is_undergraduate() {
        let input = "1\nAda\nSophomore 2\n0\n";
        let students = parse(input).unwrap();
        assert_eq!(students[0].status(), "Undergraduate");
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let input = "1\nAda\nGraduate Logic\n1\nPH300 3 Modal Logic";
        let students = parse(input).unwrap();
        assert_eq!(students[0].courses()[0].title(), "Modal Logic");
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse("0\n").unwrap().is_empty());
        assert!(parse("").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_parse_bad_credit() {
        let input = "1\nAda\nGraduate Logic\n1\nPH300 three Modal Logic\n";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 5: expected a credit count, found 'three'"
        );
    }

    #[test]
    fn test_parse_truncated() {
        let input = "2\nAda\nGraduate Logic\n0\n";
        let err = parse(input).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("student name"));
    }

    #[test]
    fn test_parse_missing_courses() {
        let input = "1\nAda\nUndergraduate 1\n2\nCS101 3 Intro\n";
        let err = parse(input).unwrap_err();
        assert!(err.to_string().contains("course code"));
    }

    #[test]
    fn test_parse_student_count_larger_than_file() {
        let input = "100000000000000000\nAda\nGraduate X\n0\n";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 5: unexpected end of input, expected a student name"
        );
    }

    #[test]
    fn test_parse_course_count_larger_than_file() {
        let input = "1\nAda\nGraduate X\n4294967295\n";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 5: unexpected end of input, expected a course code"
        );
    }

    #[test]
    fn test_parse_count_out_of_range() {
        let err = parse("184467440737095516160\n").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("expected a student count"));
    }

    #[test]
    fn test_parse_credit_out_of_range() {
        let input = "1\nAda\nGraduate X\n1\nCS1 4294967296 A\n";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 5: expected a credit count, found '4294967296'"
        );
    }

    #[test]
    fn test_parse_large_credits_sum_without_overflow() {
        let input = "1\nAda\nGraduate X\n2\nCS1 4294967295 A\nCS2 1 B\n";
        let students = parse(input).unwrap();
        assert_eq!(students[0].total_credit(), 4_294_967_296);
        assert!(students[0].tuition_due() > 1.0e12);
    }

    #[test]
    fn test_parse_many_students() {
        let mut input = String::from("20000\n");
        for i in 0..20_000 {
            input.push_str(&format!("Student {i}\nUndergraduate 1\n1\nCS{i} 3 Course {i}\n"));
        }
        input.push_str("trailing junk is ignored\n");

        let students = parse(&input).unwrap();
        assert_eq!(students.len(), 20_000);
        assert_eq!(students[19_999].name(), "Student 19999");
        assert_eq!(students[19_999].courses()[0].code(), "CS19999");
    }

    #[test]
    fn test_parse_error_line_deep_in_file() {
        let mut input = String::from("3\n");
        for i in 0..2 {
            input.push_str(&format!("Student {i}\nGraduate Topic\n1\nCS{i} 3 Title\n"));
        }
        input.push_str("Student 2\nUndergraduate two\n0\n");

        let err = parse(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 11: expected a year level, found 'two'"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/input_updated.txt").unwrap_err();
        assert!(matches!(err, Error::InputOpen { .. }));
        assert!(err.to_string().contains("/nonexistent/input_updated.txt"));
    }

    #[test]
    fn test_load_summary_default() {
        let summary = LoadSummary::default();
        assert_eq!(summary.students_read, 0);
        assert_eq!(summary.courses_added, 0);
    }
}
