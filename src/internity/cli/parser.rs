//! Turns one line of user input into a [`Command`].
//!
//! The first word picks the command, case-insensitively. Arguments use
//! `field/value` prefixes, where a value runs until the next recognised
//! ` field/` token, so values may contain spaces:
//!
//! ```text
//! add company/Jane Street role/Quant Intern deadline/01-12-2025 pay/9000
//! update 2 status/Interviewing pay/7500
//! ```

use internity::api::InternshipUpdate;
use internity::error::{InternityError, Result};
use internity::index::DisplayIndex;
use internity::list::ListOrder;
use internity::model::{parse_pay, Deadline, Internship, Status};
use tracing::debug;

const ADD_USAGE: &str = "add company/COMPANY role/ROLE deadline/DD-MM-YYYY pay/PAY";
const UPDATE_USAGE: &str = "update INDEX [company/..] [role/..] [deadline/..] [pay/..] [status/..]";

const ADD_FIELDS: &[&str] = &["company", "role", "deadline", "pay"];
const UPDATE_FIELDS: &[&str] = &["company", "role", "deadline", "pay", "status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Internship),
    Delete(DisplayIndex),
    List(ListOrder),
    Find(String),
    Update {
        index: DisplayIndex,
        update: InternshipUpdate,
    },
    Username(String),
    Dashboard,
    Help,
    Exit,
}

pub fn parse_line(input: &str) -> Result<Command> {
    validate_ascii(input)?;

    let input = input.trim();
    if input.is_empty() {
        return Err(InternityError::parse(
            "Please enter a command. Type 'help' to see the available commands.",
        ));
    }

    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (input, ""),
    };
    let word = word.to_ascii_lowercase();
    debug!(command = %word, args, "parsed command word");

    match word.as_str() {
        "add" => parse_add(args),
        "delete" => parse_index(args, "delete INDEX").map(Command::Delete),
        "list" => parse_list(args),
        "find" => parse_find(args),
        "update" => parse_update(args),
        "username" => Ok(Command::Username(args.to_string())),
        "dashboard" => Ok(Command::Dashboard),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(InternityError::parse(format!("Unknown command: {}", word))),
    }
}

/// Only printable ASCII (space through tilde) is accepted.
fn validate_ascii(input: &str) -> Result<()> {
    match input.chars().find(|c| !(' '..='~').contains(c)) {
        Some(c) => Err(InternityError::parse(format!(
            "Invalid character detected: '{}'",
            c
        ))),
        None => Ok(()),
    }
}

fn parse_add(args: &str) -> Result<Command> {
    let fields = split_fields(args, ADD_FIELDS, ADD_USAGE)?;

    let missing: Vec<String> = ADD_FIELDS
        .iter()
        .filter(|name| !fields.iter().any(|(field, _)| field == *name))
        .map(|name| format!("{}/", name))
        .collect();
    if !missing.is_empty() {
        return Err(InternityError::parse(format!(
            "Missing {}. Usage: {}",
            missing.join(", "),
            ADD_USAGE
        )));
    }

    let value = |name: &str| {
        fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
            .unwrap_or_default()
    };

    let deadline: Deadline = value("deadline").parse()?;
    let pay = parse_pay(value("pay"))?;
    let internship = Internship::new(value("company"), value("role"), deadline, pay)?;
    Ok(Command::Add(internship))
}

fn parse_index(args: &str, usage: &str) -> Result<DisplayIndex> {
    if args.is_empty() {
        return Err(InternityError::parse(format!(
            "Missing index. Usage: {}",
            usage
        )));
    }
    args.parse::<DisplayIndex>().map_err(InternityError::Parse)
}

fn parse_list(args: &str) -> Result<Command> {
    if args.is_empty() {
        return Ok(Command::List(ListOrder::Default));
    }
    match args.to_ascii_lowercase().as_str() {
        "sort/asc" => Ok(Command::List(ListOrder::Ascending)),
        "sort/desc" => Ok(Command::List(ListOrder::Descending)),
        _ => Err(InternityError::parse(format!(
            "Invalid list option: {}. Use sort/asc or sort/desc",
            args
        ))),
    }
}

fn parse_find(args: &str) -> Result<Command> {
    if args.is_empty() {
        return Err(InternityError::validation(
            "Please provide a keyword to search for. Usage: find KEYWORD",
        ));
    }
    Ok(Command::Find(args.to_string()))
}

fn parse_update(args: &str) -> Result<Command> {
    let (index_str, rest) = match args.split_once(char::is_whitespace) {
        Some((index, rest)) => (index, rest.trim()),
        None => (args, ""),
    };
    let index = parse_index(index_str, UPDATE_USAGE)?;
    if rest.is_empty() {
        return Err(InternityError::parse(format!(
            "Nothing to update. Usage: {}",
            UPDATE_USAGE
        )));
    }

    let mut update = InternshipUpdate::default();
    for (field, value) in split_fields(rest, UPDATE_FIELDS, UPDATE_USAGE)? {
        match field {
            "company" => update.company = Some(value.to_string()),
            "role" => update.role = Some(value.to_string()),
            "deadline" => update.deadline = Some(value.parse()?),
            "pay" => update.pay = Some(parse_pay(value)?),
            "status" => update.status = Some(value.parse::<Status>()?),
            _ => {}
        }
    }
    Ok(Command::Update { index, update })
}

/// Splits `args` into `(field, value)` pairs in input order.
///
/// A field marker is `name/` at the start of `args` or right after
/// whitespace. Text before the first marker, empty values and repeated
/// fields are rejected.
fn split_fields<'a>(
    args: &'a str,
    names: &[&'static str],
    usage: &str,
) -> Result<Vec<(&'static str, &'a str)>> {
    let mut markers: Vec<(usize, &'static str)> = Vec::new();
    let mut at_word_start = true;
    for (pos, c) in args.char_indices() {
        if at_word_start {
            let rest = &args[pos..];
            if let Some(name) = names
                .iter()
                .copied()
                .find(|name| rest.starts_with(name) && rest[name.len()..].starts_with('/'))
            {
                markers.push((pos, name));
            }
        }
        at_word_start = c.is_whitespace();
    }

    let leading = match markers.first() {
        Some((start, _)) => &args[..*start],
        None => args,
    };
    if !leading.trim().is_empty() {
        return Err(InternityError::parse(format!(
            "Unexpected text: {}. Usage: {}",
            leading.trim(),
            usage
        )));
    }

    let mut fields: Vec<(&'static str, &'a str)> = Vec::with_capacity(markers.len());
    for (i, &(start, name)) in markers.iter().enumerate() {
        if fields.iter().any(|(seen, _)| *seen == name) {
            return Err(InternityError::parse(format!("Duplicate field: {}/", name)));
        }
        let value_start = start + name.len() + 1;
        let value_end = markers.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim();
        if value.is_empty() {
            return Err(InternityError::parse(format!(
                "Missing value for {}/. Usage: {}",
                name, usage
            )));
        }
        fields.push((name, value));
    }
    Ok(fields)
}
