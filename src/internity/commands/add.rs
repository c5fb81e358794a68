use crate::commands::{count_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexedInternship;
use crate::list::InternshipList;
use crate::model::Internship;

pub fn run(list: &mut InternshipList, internship: Internship) -> Result<CmdResult> {
    list.add(internship.clone());
    let position = list.size() - 1;

    let mut result = CmdResult::default()
        .with_affected(vec![IndexedInternship::new(position, internship.clone())]);
    result.add_message(CmdMessage::success("Added this internship:"));
    result.add_message(CmdMessage::info(internship.to_string()));
    result.add_message(count_message(list.size()));
    Ok(result)
}
