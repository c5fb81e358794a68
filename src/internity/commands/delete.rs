use crate::commands::{count_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, IndexedInternship};
use crate::list::InternshipList;

pub fn run(list: &mut InternshipList, index: DisplayIndex) -> Result<CmdResult> {
    let removed = list.delete(index.position())?;

    let mut result = CmdResult::default()
        .with_affected(vec![IndexedInternship::new(index.position(), removed.clone())]);
    result.add_message(CmdMessage::success("Removed this internship:"));
    result.add_message(CmdMessage::info(removed.to_string()));
    result.add_message(count_message(list.size()));
    Ok(result)
}
