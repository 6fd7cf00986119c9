//! Course records.

use serde::{Deserialize, Serialize};

use super::{contains_ignore_case, Searchable};

/// A course a student can enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credit: u32,
}

impl Course {
    /// Create a new course.
    #[must_use]
    pub fn new(code: impl Into<String>, title: impl Into<String>, credit: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credit,
        }
    }

    /// The course code, e.g. `CS101`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replace the course code.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the course title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Credit hours.
    #[must_use]
    pub fn credit(&self) -> u32 {
        self.credit
    }

    /// Replace the credit hours.
    pub fn set_credit(&mut self, credit: u32) {
        self.credit = credit;
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}: {}", self.credit, self.code, self.title)
    }
}

impl Searchable for Course {
    fn is_match(&self, key: &str) -> bool {
        contains_ignore_case(&self.code, key) || contains_ignore_case(&self.title, key)
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.code == other.code && self.title == other.title && self.credit == other.credit
    }

    fn key(&self) -> &str {
        &self.code
    }
}
