//! # Storage Layer
//!
//! This module defines how the internship list survives between sessions. The
//! [`Storage`] trait is the seam between the in-memory list and wherever its
//! contents are kept.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production storage, one text file.
//!   - Saves go to a temp file in the same directory, then rename over the target
//!   - A successful load removes every other file in that directory
//!
//! - [`memory::InMemoryStorage`]: For testing
//!   - Keeps the encoded text in memory, so it runs the same codec as the file
//!     backend without touching the disk
//!
//! ## Storage Format
//!
//! ```text
//! Username (in line below):
//! Walter White
//! Google | SWE | 01-01-2025 | 8000 | Applied
//! Pipe%7CWorks | Intern | 15-12-2025 | 0 | Pending
//! ```
//!
//! The first line is a fixed header, the second the username (may be empty),
//! then one internship per line. See [`format`] for the field rules.
//!
//! Storage is write-through: the API saves the whole list after every
//! mutating command. There is no batching.

use crate::error::Result;
use crate::model::Internship;

pub mod format;
pub mod fs;
pub mod memory;

pub use format::{LoadWarning, SkipReason};

/// Everything recovered from storage.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub internships: Vec<Internship>,
    pub username: Option<String>,
    /// Lines that were dropped, in file order.
    pub warnings: Vec<LoadWarning>,
}

/// Abstract interface for persisting the internship list.
pub trait Storage {
    /// Read the stored list. A store that has never been written loads as empty.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the stored list. Must never leave a partially written copy visible.
    fn save(&mut self, internships: &[Internship], username: Option<&str>) -> Result<()>;
}
