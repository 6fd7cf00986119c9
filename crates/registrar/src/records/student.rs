//! Student records and tuition calculation.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::{contains_ignore_case, Course, Searchable};
use crate::list::CourseList;

/// Per-credit tuition for graduate students, in dollars.
pub const GRADUATE_TUITION_RATE: f64 = 369.95;

/// Per-credit tuition for undergraduate students, in dollars.
pub const UNDERGRADUATE_TUITION_RATE: f64 = 212.28;

/// What kind of student this is, with the data specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudentKind {
    /// A graduate student working on a thesis.
    Graduate {
        /// Thesis topic.
        thesis_topic: String,
    },
    /// An undergraduate student.
    Undergraduate {
        /// Year level, starting at 1.
        year_level: u32,
    },
}

impl StudentKind {
    /// Per-credit tuition rate for this kind of student.
    #[must_use]
    pub fn rate(&self) -> f64 {
        match self {
            Self::Graduate { .. } => GRADUATE_TUITION_RATE,
            Self::Undergraduate { .. } => UNDERGRADUATE_TUITION_RATE,
        }
    }

    /// Human-readable status label.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Graduate { .. } => "Graduate",
            Self::Undergraduate { .. } => "Undergraduate",
        }
    }
}

impl std::fmt::Display for StudentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.status())
    }
}

/// A student and the courses they are enrolled in.
///
/// The per-student course list keeps every enrollment in input order, even
/// repeated ones. Use [`Student::course_list`] for the de-duplicated view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    kind: StudentKind,
    courses: Vec<Course>,
}

impl Student {
    /// Create a student with no courses.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: StudentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            courses: Vec::new(),
        }
    }

    /// Create a graduate student.
    #[must_use]
    pub fn graduate(name: impl Into<String>, thesis_topic: impl Into<String>) -> Self {
        Self::new(
            name,
            StudentKind::Graduate {
                thesis_topic: thesis_topic.into(),
            },
        )
    }

    /// Create an undergraduate student.
    #[must_use]
    pub fn undergraduate(name: impl Into<String>, year_level: u32) -> Self {
        Self::new(name, StudentKind::Undergraduate { year_level })
    }

    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the student.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The student kind.
    #[must_use]
    pub fn kind(&self) -> &StudentKind {
        &self.kind
    }

    /// Mutable access to the student kind, e.g. to change a thesis topic.
    pub fn kind_mut(&mut self) -> &mut StudentKind {
        &mut self.kind
    }

    /// Enrolled courses in enrollment order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Enroll the student in a course.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Sum of credit hours over all enrollments.
    #[must_use]
    pub fn total_credit(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credit())).sum()
    }

    /// Per-credit tuition rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.kind.rate()
    }

    /// Tuition owed: total credit hours times the per-credit rate.
    #[must_use]
    pub fn tuition_due(&self) -> f64 {
        let credits: f64 = self.courses.iter().map(|c| f64::from(c.credit())).sum();
        credits * self.rate()
    }

    /// Status label, `Graduate` or `Undergraduate`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        self.kind.status()
    }

    /// One-line summary of the kind-specific details.
    #[must_use]
    pub fn info(&self) -> String {
        match &self.kind {
            StudentKind::Graduate { thesis_topic } => {
                format!("{} Thesis Topic is {}", self.name, thesis_topic)
            }
            StudentKind::Undergraduate { year_level } => {
                format!("{} Year Level is {}", self.name, year_level)
            }
        }
    }

    /// Multi-line introduction listing type, name and numbered courses.
    #[must_use]
    pub fn introduction(&self) -> String {
        let mut out = format!("Type: {}\nStudent Name: {}\n", self.status(), self.name);
        for (i, course) in self.courses.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "[{i}] {course}");
        }
        out
    }

    /// The student's courses as a duplicate-free list.
    #[must_use]
    pub fn course_list(&self) -> CourseList {
        let mut list = CourseList::new();
        for course in &self.courses {
            list.add(course.clone());
        }
        list
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Searchable for Student {
    fn is_match(&self, key: &str) -> bool {
        contains_ignore_case(&self.name, key)
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn grad() -> Student {
        let mut s = Student::graduate("Grace Hopper", "Compiler Design");
        s.add_course(Course::new("CS501", "Advanced Compilers", 3));
        s.add_course(Course::new("CS510", "Type Systems", 4));
        s
    }

    fn undergrad() -> Student {
        let mut s = Student::undergraduate("Alan Turing", 2);
        s.add_course(Course::new("MA101", "Calculus I", 4));
        s.add_course(Course::new("CS101", "Intro to Programming", 3));
        s
    }

    #[test]
    fn test_total_credit() {
        assert_eq!(grad().total_credit(), 7);
        assert_eq!(undergrad().total_credit(), 7);
        assert_eq!(Student::undergraduate("Nobody", 1).total_credit(), 0);
    }

    #[test]
    fn test_total_credit_past_u32_range() {
        let mut s = Student::undergraduate("Big Load", 1);
        s.add_course(Course::new("CS1", "A", u32::MAX));
        s.add_course(Course::new("CS2", "B", u32::MAX));
        assert_eq!(s.total_credit(), 2 * u64::from(u32::MAX));
        assert!(approx_eq(
            s.tuition_due(),
            2.0 * f64::from(u32::MAX) * 212.28
        ));
    }

    #[test]
    fn test_tuition_due_uses_kind_rate() {
        assert!(approx_eq(grad().tuition_due(), 7.0 * 369.95));
        assert!(approx_eq(undergrad().tuition_due(), 7.0 * 212.28));
        assert!(approx_eq(
            Student::graduate("Empty", "None").tuition_due(),
            0.0
        ));
    }

    #[test]
    fn test_tuition_formats_to_cents() {
        assert_eq!(format!("{:.2}", grad().tuition_due()), "2589.65");
        assert_eq!(format!("{:.2}", undergrad().tuition_due()), "1485.96");
    }

    #[test]
    fn test_status_and_info() {
        assert_eq!(grad().status(), "Graduate");
        assert_eq!(grad().info(), "Grace Hopper Thesis Topic is Compiler Design");
        assert_eq!(undergrad().status(), "Undergraduate");
        assert_eq!(undergrad().info(), "Alan Turing Year Level is 2");
    }

    #[test]
    fn test_introduction_lists_courses() {
        let intro = undergrad().introduction();
        let lines: Vec<&str> = intro.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Type: Undergraduate",
                "Student Name: Alan Turing",
                "[0] 4 - MA101: Calculus I",
                "[1] 3 - CS101: Intro to Programming",
            ]
        );
    }

    #[test]
    fn test_is_match_name_substring() {
        let s = grad();
        assert!(s.is_match("hop"));
        assert!(s.is_match("GRACE"));
        assert!(!s.is_match("turing"));
    }

    #[test]
    fn test_is_equal_by_name_only() {
        let a = Student::graduate("Sam", "Topology");
        let b = Student::undergraduate("Sam", 3);
        let c = Student::undergraduate("sam", 3);
        assert!(a.is_equal(&b));
        assert!(!a.is_equal(&c));
    }

    #[test]
    fn test_course_list_drops_repeated_enrollments() {
        let mut s = undergrad();
        s.add_course(Course::new("MA101", "Calculus I", 4));
        assert_eq!(s.courses().len(), 3);
        assert_eq!(s.total_credit(), 11);
        assert_eq!(s.course_list().len(), 2);
    }

    #[test]
    fn test_kind_mut() {
        let mut s = grad();
        if let StudentKind::Graduate { thesis_topic } = s.kind_mut() {
            *thesis_topic = "Garbage Collection".to_string();
        }
        assert_eq!(s.info(), "Grace Hopper Thesis Topic is Garbage Collection");
    }

    #[test]
    fn test_student_serialization() {
        let json = serde_json::to_string(&grad()).unwrap();
        assert!(json.contains("\"type\":\"graduate\""));
        assert!(json.contains("Compiler Design"));
    }
}
