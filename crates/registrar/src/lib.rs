//! `registrar` - An academic records manager
//!
//! This library loads student and course records from a flat text file into
//! duplicate-free, searchable lists, and renders them as tables with tuition
//! totals and optional name filtering.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod loader;
pub mod logging;
pub mod records;
pub mod registry;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use list::{CourseList, RecordList, StudentList};
pub use loader::LoadSummary;
pub use logging::init_logging;
pub use records::{Course, Searchable, Student, StudentKind};
pub use registry::{CourseRow, Registry, RegistryStats, StudentRow};
pub use view::OutputFormat;
