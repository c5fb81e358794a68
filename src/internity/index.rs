//! # Display Indexes
//!
//! Internships have no stable id. They are addressed by their position in the
//! list, which shifts down by one for every record after a deleted one.
//!
//! Internally positions are 0-based. Users see and type 1-based numbers. The
//! [`DisplayIndex`] type is the boundary between the two: the CLI parses user
//! input into a `DisplayIndex`, and everything below the API deals in
//! positions via [`DisplayIndex::position`].
//!
//! Query results are returned as [`IndexedInternship`] values so a filtered
//! or sorted listing still shows each record's *original* number, the one the
//! user has to type to delete or update it.

use crate::model::Internship;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// The 0-based list position this index refers to.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Index must be a positive number".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s.trim())),
        }
    }
}

/// An internship paired with its index in the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedInternship {
    pub index: DisplayIndex,
    pub internship: Internship,
}

impl IndexedInternship {
    pub fn new(position: usize, internship: Internship) -> Self {
        Self {
            index: DisplayIndex::from_position(position),
            internship,
        }
    }
}
