use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InternityError, Result};
use crate::index::{DisplayIndex, IndexedInternship};
use crate::list::InternshipList;
use crate::model::{Deadline, Status};

/// Fields to change on one internship. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipUpdate {
    pub company: Option<String>,
    pub role: Option<String>,
    pub deadline: Option<Deadline>,
    pub pay: Option<u32>,
    pub status: Option<Status>,
}

impl InternshipUpdate {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.role.is_none()
            && self.deadline.is_none()
            && self.pay.is_none()
            && self.status.is_none()
    }

    /// `(field, new value)` pairs for every field being changed.
    fn changes(&self) -> Vec<(&'static str, String)> {
        let mut changes = Vec::new();
        if let Some(company) = &self.company {
            changes.push(("company", company.trim().to_string()));
        }
        if let Some(role) = &self.role {
            changes.push(("role", role.trim().to_string()));
        }
        if let Some(deadline) = self.deadline {
            changes.push(("deadline", deadline.to_string()));
        }
        if let Some(pay) = self.pay {
            changes.push(("pay", pay.to_string()));
        }
        if let Some(status) = self.status {
            changes.push(("status", status.to_string()));
        }
        changes
    }
}

/// Applies every field or none of them.
pub fn run(
    list: &mut InternshipList,
    index: DisplayIndex,
    update: &InternshipUpdate,
) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(InternityError::validation(
            "Nothing to update: give at least one of company/, role/, deadline/, pay/, status/",
        ));
    }

    let position = index.position();
    let original = list.get(position)?.clone();

    // Validate against a scratch copy so a bad field leaves the stored record alone.
    let mut candidate = original.clone();
    if let Some(company) = &update.company {
        candidate.set_company(company)?;
    }
    if let Some(role) = &update.role {
        candidate.set_role(role)?;
    }

    if let Some(company) = &update.company {
        list.update_company(position, company)?;
    }
    if let Some(role) = &update.role {
        list.update_role(position, role)?;
    }
    if let Some(deadline) = update.deadline {
        list.update_deadline(position, deadline)?;
    }
    if let Some(pay) = update.pay {
        list.update_pay(position, pay)?;
    }
    if let Some(status) = update.status {
        list.update_status(position, status)?;
    }

    let updated = list.get(position)?.clone();
    let mut result = CmdResult::default()
        .with_affected(vec![IndexedInternship::new(position, updated.clone())]);

    let changes = update.changes();
    if let [(field, value)] = changes.as_slice() {
        result.add_message(CmdMessage::success(format!(
            "Internship {} at index {} successfully updated to: {}",
            field, index, value
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Internship at index {} successfully updated:",
            index
        )));
        result.add_message(CmdMessage::info(format!("Original:\n{}", original)));
        result.add_message(CmdMessage::info(format!("Updated:\n{}", updated)));
    }
    Ok(result)
}
