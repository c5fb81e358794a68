use super::{format, Snapshot, Storage};
use crate::error::Result;
use crate::model::Internship;

/// Holds the encoded list in memory. Goes through the same codec as [`super::fs::FileStorage`].
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    contents: Option<String>,
    saves: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw file text, as if it had been read from disk.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            saves: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> Result<Snapshot> {
        match &self.contents {
            Some(text) => format::parse(text),
            None => Ok(Snapshot::default()),
        }
    }

    fn save(&mut self, internships: &[Internship], username: Option<&str>) -> Result<()> {
        self.contents = Some(format::render(internships, username)?);
        self.saves += 1;
        Ok(())
    }
}
