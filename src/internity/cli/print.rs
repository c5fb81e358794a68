use super::render::{
    render_banner, render_error, render_goodbye, render_greeting, render_help, render_result,
};
use internity::api::CmdResult;
use std::io::Write;

pub(super) fn print_result(result: &CmdResult) {
    print!("{}", render_result(result));
}

pub(super) fn print_error(message: &str) {
    print!("{}", render_error(message));
}

/// Load warnings go to stderr so one-shot output stays clean.
pub(super) fn print_load_warnings(result: &CmdResult) {
    for message in &result.messages {
        eprintln!("{}", message.content);
    }
}

pub(super) fn print_help() {
    print!("{}", render_help());
}

pub(super) fn print_welcome(show_banner: bool, username: Option<&str>) {
    if show_banner {
        print!("{}", render_banner());
    }
    print!("{}", render_greeting(username));
}

pub(super) fn print_goodbye() {
    print!("{}", render_goodbye());
}

pub(super) fn print_prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
