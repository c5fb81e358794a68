use crate::index::IndexedInternship;
use crate::list::NearestDeadline;
use crate::model::Status;

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod find;
pub mod list;
pub mod update;
pub mod username;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Summary figures for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub username: Option<String>,
    pub total: usize,
    /// `None` when the list is empty.
    pub nearest: Option<NearestDeadline>,
    /// True when the nearest deadline is already behind us.
    pub overdue: bool,
    pub status_counts: Vec<(Status, usize)>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<IndexedInternship>,
    pub listed: Vec<IndexedInternship>,
    /// Line printed above a listing.
    pub heading: Option<String>,
    pub dashboard: Option<Dashboard>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, entries: Vec<IndexedInternship>) -> Self {
        self.affected = entries;
        self
    }

    pub fn with_listed(mut self, entries: Vec<IndexedInternship>) -> Self {
        self.listed = entries;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_dashboard(mut self, dashboard: Dashboard) -> Self {
        self.dashboard = Some(dashboard);
        self
    }
}

/// The trailing count line shared by add and delete.
pub(crate) fn count_message(size: usize) -> CmdMessage {
    CmdMessage::info(format!("Now you have {} internship(s) in the list.", size))
}
