//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String`; printing happens in `print.rs`.
//!
//! Column widths are applied to the plain text *before* styling, so escape
//! codes never throw the table out of line. The `_internal` variants take a
//! colour override: `Some(false)` gives plain text for tests, `None` lets
//! `console` decide from the terminal.

use super::setup::{CommandGroup, LINE_COMMANDS};
use super::styles::INTERNITY_THEME;
use console::Style;
use internity::api::{CmdMessage, CmdResult, Dashboard, MessageLevel};
use internity::index::IndexedInternship;

const INDEX_WIDTH: usize = 5;
const COMPANY_WIDTH: usize = 30;
const ROLE_WIDTH: usize = 30;
const DEADLINE_WIDTH: usize = 15;
const PAY_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 10;
const RULE_WIDTH: usize = 109;
const INDENT: &str = "  ";

const LOGO: &str = r" ___       _                  _ _
|_ _|_ __ | |_ ___ _ __ _ __ (_) |_ _   _
 | || '_ \| __/ _ \ '__| '_ \| | __| | | |
 | || | | | ||  __/ |  | | | | | |_| |_| |
|___|_| |_|\__\___|_|  |_| |_|_|\__|\__, |
                                    |___/";

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(force) => style.clone().force_styling(force).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}

fn rule(use_color: Option<bool>) -> String {
    paint(&INTERNITY_THEME.rule, &"_".repeat(RULE_WIDTH), use_color)
}

/// Renders everything a command produced, in a fixed order: listing, dashboard, messages.
pub fn render_result(result: &CmdResult) -> String {
    render_result_internal(result, None)
}

pub(crate) fn render_result_internal(result: &CmdResult, use_color: Option<bool>) -> String {
    let mut output = String::new();
    if !result.listed.is_empty() {
        output.push_str(&render_table_internal(
            result.heading.as_deref(),
            &result.listed,
            use_color,
        ));
    }
    if let Some(dashboard) = &result.dashboard {
        output.push_str(&render_dashboard_internal(dashboard, use_color));
    }
    output.push_str(&render_messages_internal(&result.messages, use_color));
    output
}

pub(crate) fn render_table_internal(
    heading: Option<&str>,
    entries: &[IndexedInternship],
    use_color: Option<bool>,
) -> String {
    let theme = &*INTERNITY_THEME;
    let mut output = String::new();

    if let Some(heading) = heading {
        output.push_str(heading);
        output.push('\n');
    }
    output.push_str(&rule(use_color));
    output.push('\n');
    let header = format!(
        "{:>iw$} {:<cw$} {:<rw$} {:<dw$} {:<pw$} {:<sw$}",
        "No.",
        "Company",
        "Role",
        "Deadline",
        "Pay",
        "Status",
        iw = INDEX_WIDTH,
        cw = COMPANY_WIDTH,
        rw = ROLE_WIDTH,
        dw = DEADLINE_WIDTH,
        pw = PAY_WIDTH,
        sw = STATUS_WIDTH,
    );
    output.push_str(&paint(&theme.heading, &header, use_color));
    output.push('\n');
    output.push_str(&rule(use_color));
    output.push('\n');

    for entry in entries {
        let it = &entry.internship;
        let index = format!("{:>w$}", entry.index.get(), w = INDEX_WIDTH);
        let status = format!("{:<w$}", it.status().as_str(), w = STATUS_WIDTH);
        output.push_str(&format!(
            "{} {:<cw$} {:<rw$} {:<dw$} {:<pw$} {}\n",
            paint(&theme.index, &index, use_color),
            it.company(),
            it.role(),
            it.deadline().to_string(),
            it.pay(),
            paint(theme.status(it.status()), &status, use_color),
            cw = COMPANY_WIDTH,
            rw = ROLE_WIDTH,
            dw = DEADLINE_WIDTH,
            pw = PAY_WIDTH,
        ));
    }
    output
}

pub(crate) fn render_dashboard_internal(dashboard: &Dashboard, use_color: Option<bool>) -> String {
    let theme = &*INTERNITY_THEME;
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        paint(&theme.label, "User:", use_color),
        dashboard.username.as_deref().unwrap_or("Guest")
    ));
    output.push_str(&format!(
        "{} {}\n",
        paint(&theme.label, "Total Internships:", use_color),
        dashboard.total
    ));

    output.push('\n');
    match &dashboard.nearest {
        None => output.push_str(&format!(
            "{} No internships found.\n",
            paint(&theme.label, "Nearest Deadline:", use_color)
        )),
        Some(nearest) => {
            let it = &nearest.nearest.internship;
            output.push_str(&paint(&theme.label, "Nearest Deadline:", use_color));
            output.push('\n');
            output.push_str(&format!(
                "{}{} | {} @ {}",
                INDENT,
                it.deadline(),
                it.role(),
                it.company()
            ));
            if dashboard.overdue {
                output.push(' ');
                output.push_str(&paint(&theme.overdue, "(OVERDUE!)", use_color));
            }
            output.push('\n');
            if nearest.others > 0 {
                output.push_str(&format!(
                    "{}(Found {} other internship(s) with the same deadline)\n",
                    INDENT, nearest.others
                ));
            }
        }
    }

    output.push('\n');
    if dashboard.total == 0 {
        output.push_str(&format!(
            "{} No internships found.\n",
            paint(&theme.label, "Status Overview:", use_color)
        ));
    } else {
        output.push_str(&paint(&theme.label, "Status Overview:", use_color));
        output.push('\n');
        for (status, count) in &dashboard.status_counts {
            let name = format!("{:<15}", status.as_str());
            output.push_str(&format!(
                "{}{} : {}\n",
                INDENT,
                paint(theme.status(*status), &name, use_color),
                count
            ));
        }
    }
    output
}

pub(crate) fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let theme = &*INTERNITY_THEME;
    let mut output = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &theme.info,
            MessageLevel::Success => &theme.success,
            MessageLevel::Warning => &theme.warning,
        };
        output.push_str(&paint(style, &message.content, use_color));
        output.push('\n');
    }
    output
}

pub fn render_help() -> String {
    render_help_internal(None)
}

pub(crate) fn render_help_internal(use_color: Option<bool>) -> String {
    let theme = &*INTERNITY_THEME;
    let mut output = String::from("Here are the available commands:\n");

    for group in CommandGroup::all() {
        output.push('\n');
        output.push_str(&paint(&theme.heading, group.heading(), use_color));
        output.push('\n');
        for cmd in LINE_COMMANDS
            .iter()
            .filter(|cmd| CommandGroup::for_command(cmd.name) == Some(*group))
        {
            output.push_str(&format!("{}- {:<9} : {}\n", INDENT, cmd.name, cmd.about));
        }
    }

    output.push_str("\nFor verbose instructions, refer to the user guide.\n");
    output
}

pub fn render_banner() -> String {
    render_banner_internal(None)
}

pub(crate) fn render_banner_internal(use_color: Option<bool>) -> String {
    format!(
        "Hello, welcome to\n{}\nBe on top of your internships management with the Internity chatbot!\n",
        paint(&INTERNITY_THEME.banner, LOGO, use_color)
    )
}

pub fn render_greeting(username: Option<&str>) -> String {
    format!("Hello, {}!\n", username.unwrap_or("Guest"))
}

pub fn render_goodbye() -> String {
    "Thank you for using Internity! Goodbye!\n".to_string()
}

pub fn render_error(message: &str) -> String {
    render_error_internal(message, None)
}

pub(crate) fn render_error_internal(message: &str, use_color: Option<bool>) -> String {
    format!("{}\n", paint(&INTERNITY_THEME.error, message, use_color))
}
