//! In-memory registry of students and courses.
//!
//! The registry owns the two record lists, ingests parsed records, and hands
//! out row data for the views.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::list::{CourseList, StudentList, DEFAULT_CAPACITY};
use crate::loader::{self, LoadSummary};
use crate::records::{Course, Student, StudentKind};

/// One row of the student table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    /// Student name.
    pub name: String,
    /// `Graduate` or `Undergraduate`.
    pub student_type: String,
    /// Total credit hours.
    pub total_credit: u64,
    /// Tuition due, formatted with two decimals.
    pub tuition_due: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            student_type: student.status().to_string(),
            total_credit: student.total_credit(),
            tuition_due: format!("{:.2}", student.tuition_due()),
        }
    }
}

/// One row of a course table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    /// Course code.
    pub code: String,
    /// Course title.
    pub title: String,
    /// Credit hours.
    pub credit: u32,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            title: course.title().to_string(),
            credit: course.credit(),
        }
    }
}

/// Aggregate figures over the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryStats {
    /// Number of students.
    pub students: usize,
    /// Number of graduate students.
    pub graduates: usize,
    /// Number of undergraduate students.
    pub undergraduates: usize,
    /// Number of distinct courses.
    pub courses: usize,
    /// Credit hours summed over all students.
    pub total_credit: u64,
    /// Tuition summed over all students.
    pub total_tuition: f64,
}

/// Students and courses loaded from a records file.
#[derive(Debug, Clone)]
pub struct Registry {
    students: StudentList,
    courses: CourseList,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty registry whose lists start at `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            students: StudentList::with_capacity(capacity),
            courses: CourseList::with_capacity(capacity),
        }
    }

    /// Load a records file and add its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputOpen`] if the file cannot be read and
    /// [`Error::Parse`] if it is malformed. The registry is unchanged on error.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        let text = loader::read_file(path)?;
        let summary = self.load_str(&text)?;
        info!(
            students = summary.students_added,
            courses = summary.courses_added,
            "Loaded records from {}",
            path.display()
        );
        Ok(summary)
    }

    /// Parse records text and add its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is malformed. The registry is
    /// unchanged on error.
    pub fn load_str(&mut self, input: &str) -> Result<LoadSummary> {
        let students = loader::parse(input)?;
        Ok(self.ingest(students))
    }

    /// Add parsed students and every course they enroll in.
    pub fn ingest(&mut self, students: impl IntoIterator<Item = Student>) -> LoadSummary {
        let mut summary = LoadSummary::default();

        for student in students {
            summary.students_read += 1;
            for course in student.courses() {
                summary.enrollments_read += 1;
                if self.courses.add(course.clone()) {
                    summary.courses_added += 1;
                }
            }

            let name = student.name().to_string();
            if self.students.add(student) {
                summary.students_added += 1;
            } else {
                debug!(student = %name, "Student already registered");
            }
        }

        summary
    }

    /// All students.
    #[must_use]
    pub fn students(&self) -> &StudentList {
        &self.students
    }

    /// All distinct courses.
    #[must_use]
    pub fn courses(&self) -> &CourseList {
        &self.courses
    }

    /// Student table rows, optionally filtered by a name substring.
    #[must_use]
    pub fn student_rows(&self, filter: Option<&str>) -> Vec<StudentRow> {
        match filter {
            Some(key) => self.students.query(key).iter().map(StudentRow::from).collect(),
            None => self.students.iter().map(StudentRow::from).collect(),
        }
    }

    /// Rows for every distinct course.
    #[must_use]
    pub fn course_rows(&self) -> Vec<CourseRow> {
        self.courses.iter().map(CourseRow::from).collect()
    }

    /// Rows for the courses one student is registered in.
    #[must_use]
    pub fn course_rows_for(&self, student: &Student) -> Vec<CourseRow> {
        student.course_list().iter().map(CourseRow::from).collect()
    }

    /// Look up a student by exact name, ignoring case.
    #[must_use]
    pub fn student(&self, name: &str) -> Option<&Student> {
        self.students.find_match(name)
    }

    /// Look up a course by exact code, ignoring case.
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.find_match(code)
    }

    /// Look up a student, failing if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] if no student has that name.
    pub fn require_student(&self, name: &str) -> Result<&Student> {
        self.student(name).ok_or_else(|| Error::student_not_found(name))
    }

    /// Look up a course, failing if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CourseNotFound`] if no course has that code.
    pub fn require_course(&self, code: &str) -> Result<&Course> {
        self.course(code).ok_or_else(|| Error::course_not_found(code))
    }

    /// Aggregate counts and totals.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let graduates = self
            .students
            .iter()
            .filter(|s| matches!(s.kind(), StudentKind::Graduate { .. }))
            .count();

        RegistryStats {
            students: self.students.len(),
            graduates,
            undergraduates: self.students.len() - graduates,
            courses: self.courses.len(),
            total_credit: self.students.iter().map(Student::total_credit).sum(),
            total_tuition: self.students.iter().map(Student::tuition_due).sum(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
