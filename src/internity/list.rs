//! # The Internship List
//!
//! [`InternshipList`] is the in-memory record store: an ordered sequence of
//! [`Internship`]s plus the user's name. It is the only place internships are
//! mutated.
//!
//! Positions are 0-based and always refer to the *current* order, so deleting
//! position `i` shifts everything after it down by one. Errors report the
//! 1-based index the user typed (see [`crate::index`]).
//!
//! The list knows nothing about files. Loading and saving belong to the
//! storage layer, and the API facade saves after every mutating call.

use crate::error::{InternityError, Result};
use crate::index::IndexedInternship;
use crate::model::{Deadline, Internship, Status};
use std::cmp::Ordering;
use tracing::debug;

/// Display order for [`InternshipList::sorted_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Insertion order.
    #[default]
    Default,
    /// Earliest deadline first.
    Ascending,
    /// Latest deadline first.
    Descending,
}

/// Result of the nearest-deadline query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestDeadline {
    /// First internship in list order holding the chosen deadline.
    pub nearest: IndexedInternship,
    /// How many *other* internships share exactly that deadline.
    pub others: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InternshipList {
    internships: Vec<Internship>,
    username: Option<String>,
}

impl InternshipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(internships: Vec<Internship>, username: Option<String>) -> Self {
        let mut list = Self {
            internships,
            username: None,
        };
        if let Some(name) = username {
            list.set_username(name);
        }
        list
    }

    pub fn add(&mut self, internship: Internship) {
        debug!(company = internship.company(), role = internship.role(), "adding internship");
        self.internships.push(internship);
    }

    pub fn delete(&mut self, index: usize) -> Result<Internship> {
        self.check_index(index)?;
        debug!(index, "deleting internship");
        Ok(self.internships.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Internship> {
        self.internships
            .get(index)
            .ok_or(InternityError::InvalidIndex(index + 1))
    }

    pub fn size(&self) -> usize {
        self.internships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internships.is_empty()
    }

    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    pub fn update_status(&mut self, index: usize, status: Status) -> Result<()> {
        self.get_mut(index)?.set_status(status);
        Ok(())
    }

    pub fn update_company(&mut self, index: usize, company: &str) -> Result<()> {
        self.get_mut(index)?.set_company(company)
    }

    pub fn update_role(&mut self, index: usize, role: &str) -> Result<()> {
        self.get_mut(index)?.set_role(role)
    }

    pub fn update_deadline(&mut self, index: usize, deadline: Deadline) -> Result<()> {
        self.get_mut(index)?.set_deadline(deadline);
        Ok(())
    }

    pub fn update_pay(&mut self, index: usize, pay: u32) -> Result<()> {
        self.get_mut(index)?.set_pay(pay);
        Ok(())
    }

    /// Case-insensitive substring search over company and role.
    ///
    /// Matches keep their position in the full list. An empty keyword matches
    /// every internship.
    pub fn find(&self, keyword: &str) -> Vec<IndexedInternship> {
        let keyword = keyword.to_lowercase();
        let matches: Vec<IndexedInternship> = self
            .internships
            .iter()
            .enumerate()
            .filter(|(_, it)| {
                it.company().to_lowercase().contains(&keyword)
                    || it.role().to_lowercase().contains(&keyword)
            })
            .map(|(pos, it)| IndexedInternship::new(pos, it.clone()))
            .collect();
        debug!(keyword = %keyword, matches = matches.len(), "search completed");
        matches
    }

    /// A sorted copy of the list. The list itself is never reordered.
    ///
    /// Sorting is stable: internships with equal deadlines keep their
    /// insertion order in both directions.
    pub fn sorted_view(&self, order: ListOrder) -> Vec<IndexedInternship> {
        let mut view: Vec<IndexedInternship> = self
            .internships
            .iter()
            .enumerate()
            .map(|(pos, it)| IndexedInternship::new(pos, it.clone()))
            .collect();

        match order {
            ListOrder::Default => {}
            ListOrder::Ascending => view.sort_by_key(|e| e.internship.deadline()),
            ListOrder::Descending => view.sort_by(|a, b| {
                b.internship.deadline().cmp(&a.internship.deadline())
            }),
        }
        view
    }

    pub fn find_nearest_deadline(&self) -> Result<NearestDeadline> {
        self.find_nearest_deadline_from(Deadline::today())
    }

    /// The soonest deadline on or after `today`; failing that, the most recent
    /// past deadline.
    pub fn find_nearest_deadline_from(&self, today: Deadline) -> Result<NearestDeadline> {
        let (position, others) = self
            .extreme_deadline(|d| d >= today, Ordering::Less)
            .or_else(|| self.extreme_deadline(|_| true, Ordering::Greater))
            .ok_or(InternityError::EmptyStore)?;

        debug!(position, others, "nearest deadline found");
        Ok(NearestDeadline {
            nearest: IndexedInternship::new(position, self.internships[position].clone()),
            others,
        })
    }

    /// Per-status totals, in [`Status::ALL`] order.
    pub fn status_counts(&self) -> Vec<(Status, usize)> {
        Status::ALL
            .iter()
            .map(|&status| {
                let count = self
                    .internships
                    .iter()
                    .filter(|it| it.status() == status)
                    .count();
                (status, count)
            })
            .collect()
    }

    /// Blank names clear the username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        let trimmed = username.trim();
        self.username = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn clear(&mut self) {
        self.internships.clear();
        self.username = None;
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Internship> {
        self.internships
            .get_mut(index)
            .ok_or(InternityError::InvalidIndex(index + 1))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.internships.len() {
            Ok(())
        } else {
            Err(InternityError::InvalidIndex(index + 1))
        }
    }

    /// Scans in list order for the eligible deadline that wins under `wins`.
    /// Returns the first position holding it and the count of later ties.
    fn extreme_deadline<F>(&self, eligible: F, wins: Ordering) -> Option<(usize, usize)>
    where
        F: Fn(Deadline) -> bool,
    {
        let mut best: Option<(usize, usize)> = None;
        for (pos, it) in self.internships.iter().enumerate() {
            let deadline = it.deadline();
            if !eligible(deadline) {
                continue;
            }
            best = match best {
                None => Some((pos, 0)),
                Some((best_pos, ties)) => {
                    match deadline.cmp(&self.internships[best_pos].deadline()) {
                        Ordering::Equal => Some((best_pos, ties + 1)),
                        ord if ord == wins => Some((pos, 0)),
                        _ => Some((best_pos, ties)),
                    }
                }
            };
        }
        best
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn internship(company: &str, role: &str, deadline: &str, pay: u32) -> Internship {
        let deadline = deadline.parse().expect("fixture deadline must be valid");
        Internship::new(company, role, deadline, pay).expect("fixture internship must be valid")
    }

    pub struct ListFixture {
        pub list: InternshipList,
    }

    impl Default for ListFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self {
                list: InternshipList::new(),
            }
        }

        pub fn with(mut self, company: &str, role: &str, deadline: &str, pay: u32) -> Self {
            self.list.add(internship(company, role, deadline, pay));
            self
        }

        pub fn with_status(mut self, company: &str, deadline: &str, status: Status) -> Self {
            self.list
                .add(internship(company, "Intern", deadline, 1000).with_status(status));
            self
        }

        pub fn with_username(mut self, name: &str) -> Self {
            self.list.set_username(name);
            self
        }

        pub fn build(self) -> InternshipList {
            self.list
        }
    }
}
