use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::{InternshipList, ListOrder};

pub const EMPTY_LIST: &str = "Your internship list is currently empty.";

fn heading(order: ListOrder) -> &'static str {
    match order {
        ListOrder::Default => "Here are the internships in your list (in order added):",
        ListOrder::Ascending => {
            "Here are the internships in your list (sorted by deadline ascending):"
        }
        ListOrder::Descending => {
            "Here are the internships in your list (sorted by deadline descending):"
        }
    }
}

pub fn run(list: &InternshipList, order: ListOrder) -> Result<CmdResult> {
    if list.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(EMPTY_LIST));
        return Ok(result);
    }

    Ok(CmdResult::default()
        .with_heading(heading(order))
        .with_listed(list.sorted_view(order)))
}
