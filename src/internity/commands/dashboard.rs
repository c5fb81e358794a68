use crate::commands::{CmdResult, Dashboard};
use crate::error::{InternityError, Result};
use crate::list::InternshipList;
use crate::model::Deadline;

pub fn run(list: &InternshipList) -> Result<CmdResult> {
    run_at(list, Deadline::today())
}

/// Same as [`run`] with a fixed idea of today.
pub fn run_at(list: &InternshipList, today: Deadline) -> Result<CmdResult> {
    let nearest = match list.find_nearest_deadline_from(today) {
        Ok(nearest) => Some(nearest),
        Err(InternityError::EmptyStore) => None,
        Err(e) => return Err(e),
    };
    let overdue = nearest
        .as_ref()
        .is_some_and(|n| n.nearest.internship.deadline() < today);

    Ok(CmdResult::default().with_dashboard(Dashboard {
        username: list.username().map(String::from),
        total: list.size(),
        nearest,
        overdue,
        status_counts: list.status_counts(),
    }))
}
