use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::InternshipList;

pub const NO_MATCHES: &str = "No internships with this company or role found.";

pub fn run(list: &InternshipList, keyword: &str) -> Result<CmdResult> {
    let matches = list.find(keyword);
    if matches.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_MATCHES));
        return Ok(result);
    }

    Ok(CmdResult::default()
        .with_heading("Here are the matching internships in your list:")
        .with_listed(matches))
}
