//! Duplicate-free record containers.
//!
//! [`RecordList`] keeps records in insertion order and rejects any record that
//! is equal (under [`Searchable::is_equal`]) to one already stored. Lookups and
//! filters are linear scans.
//!
//! The list tracks its own logical capacity and doubles it whenever the next
//! insert would fill it, so `len() < capacity()` holds after every add. The
//! capacity is bookkeeping over a `Vec`: growing reserves room in the vector,
//! and moving the elements is left to `Vec` itself.

use tracing::{debug, trace};

use crate::records::{Course, Searchable, Student};

/// Capacity used by [`RecordList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Duplicate-free list of students.
pub type StudentList = RecordList<Student>;

/// Duplicate-free list of courses.
pub type CourseList = RecordList<Course>;

/// An insertion-ordered, duplicate-free collection of searchable records.
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Searchable> RecordList<T> {
    /// Create an empty list with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty list with the given initial capacity (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a record unless an equal one is already present.
    ///
    /// Returns `true` if the record was inserted.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            debug!(key = item.key(), "Skipping duplicate record");
            return false;
        }

        if self.items.len() + 1 >= self.capacity {
            self.grow();
        }

        self.items.push(item);
        true
    }

    /// Get the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of records stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether a record equal to `item` is stored.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_equal(item))
    }

    /// First record whose key equals `key`, ignoring case.
    #[must_use]
    pub fn find_match(&self, key: &str) -> Option<&T> {
        let key = key.to_lowercase();
        self.items
            .iter()
            .find(|item| item.key().to_lowercase() == key)
    }

    fn grow(&mut self) {
        let old = self.capacity;
        self.capacity = old * 2;
        self.items.reserve_exact(self.capacity - self.items.len());
        trace!(from = old, to = self.capacity, "Grew record list");
    }
}

impl<T: Searchable + Clone> RecordList<T> {
    /// New list of every record matching `key`, in order.
    #[must_use]
    pub fn query(&self, key: &str) -> Self {
        let mut result = Self::new();
        for item in self.items.iter().filter(|item| item.is_match(key)) {
            result.add(item.clone());
        }
        result
    }
}

impl<T: Searchable> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
