//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every internity operation, whatever the UI.
//!
//! It owns two things: the [`InternshipList`] being worked on and the
//! [`Storage`] backend it is persisted to. Each method dispatches to the
//! matching `commands::*::run` and, for commands that change the list, saves
//! the whole list before returning. A successful mutating call therefore means
//! the change is on disk.
//!
//! Like the command layer, the API never prints and never exits. Load warnings
//! come back as [`CmdMessage`]s for the caller to show.
//!
//! `InternityApi<S: Storage>` is generic over the backend:
//! - Production: `InternityApi<FileStorage>`
//! - Testing: `InternityApi<InMemoryStorage>`

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::list::{InternshipList, ListOrder};
use crate::model::Internship;
use crate::store::Storage;

pub use crate::commands::update::InternshipUpdate;
pub use crate::commands::{CmdMessage, CmdResult, Dashboard, MessageLevel};

pub struct InternityApi<S: Storage> {
    storage: S,
    list: InternshipList,
}

impl<S: Storage> InternityApi<S> {
    /// Starts with an empty list. Call [`InternityApi::load`] to read what is stored.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            list: InternshipList::new(),
        }
    }

    /// Replaces the in-memory list with the stored one.
    pub fn load(&mut self) -> Result<CmdResult> {
        let snapshot = self.storage.load()?;
        self.list = InternshipList::from_parts(snapshot.internships, snapshot.username);

        let mut result = CmdResult::default();
        for warning in &snapshot.warnings {
            result.add_message(CmdMessage::warning(warning.to_string()));
        }
        Ok(result)
    }

    pub fn add(&mut self, internship: Internship) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.list, internship)?;
        self.persist()?;
        Ok(result)
    }

    pub fn delete(&mut self, index: DisplayIndex) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.list, index)?;
        self.persist()?;
        Ok(result)
    }

    pub fn update(&mut self, index: DisplayIndex, update: &InternshipUpdate) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.list, index, update)?;
        self.persist()?;
        Ok(result)
    }

    pub fn set_username(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::username::run(&mut self.list, name)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list(&self, order: ListOrder) -> Result<CmdResult> {
        commands::list::run(&self.list, order)
    }

    pub fn find(&self, keyword: &str) -> Result<CmdResult> {
        commands::find::run(&self.list, keyword)
    }

    pub fn dashboard(&self) -> Result<CmdResult> {
        commands::dashboard::run(&self.list)
    }

    pub fn username(&self) -> Option<&str> {
        self.list.username()
    }

    pub fn size(&self) -> usize {
        self.list.size()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        self.storage
            .save(self.list.internships(), self.list.username())
    }
}
