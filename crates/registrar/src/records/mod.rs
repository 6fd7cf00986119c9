//! Record types held by the registry.
//!
//! Every record stored in a [`RecordList`](crate::list::RecordList) implements
//! [`Searchable`], which supplies the substring match used by filters, the
//! equality rule used to reject duplicates, and the key used by exact lookups.

mod course;
mod student;

pub use course::Course;
pub use student::{Student, StudentKind, GRADUATE_TUITION_RATE, UNDERGRADUATE_TUITION_RATE};

/// Capability contract for records that can be stored, filtered and looked up.
pub trait Searchable {
    /// Case-insensitive substring match of `key` against the searchable fields.
    fn is_match(&self, key: &str) -> bool;

    /// Whether `other` counts as the same record.
    fn is_equal(&self, other: &Self) -> bool;

    /// Primary key used for exact, case-insensitive lookups.
    fn key(&self) -> &str;
}

/// Case-insensitive substring test shared by the record types.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
