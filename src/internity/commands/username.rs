use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InternityError, Result};
use crate::list::InternshipList;
use crate::model::is_printable_ascii;

pub fn run(list: &mut InternshipList, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InternityError::validation("Username cannot be empty"));
    }
    if !is_printable_ascii(name) {
        return Err(InternityError::validation(
            "Username must contain only printable ASCII characters",
        ));
    }

    list.set_username(name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Username set to {}", name)));
    Ok(result)
}
