//! Text encoding of the internship list.
//!
//! Each internship is one line, `company | role | DD-MM-YYYY | pay | status`.
//! A `|` inside company or role is written as `%7C` and a `%` as `%25`, so
//! decoding gives back exactly what was encoded.
//!
//! Escaping `%` is an extension of the plain pipe-only format. Files that only
//! escape `|` still load, except that a literal `%25` or `%7C` typed into a
//! company or role there comes back as `%` or `|`.

use super::Snapshot;
use crate::error::{InternityError, Result};
use crate::model::{is_printable_ascii, Deadline, Internship, Status, COMPANY_MAX_LEN, ROLE_MAX_LEN};
use std::fmt;
use tracing::warn;

pub const HEADER: &str = "Username (in line below):";

const FIELD_COUNT: usize = 5;
const IDX_COMPANY: usize = 0;
const IDX_ROLE: usize = 1;
const IDX_DEADLINE: usize = 2;
const IDX_PAY: usize = 3;
const IDX_STATUS: usize = 4;

/// Why a stored line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    EmptyCompanyOrRole,
    NonAsciiCompany,
    NonAsciiRole,
    CompanyTooLong,
    RoleTooLong,
    InvalidPay,
    NegativePay,
    InvalidStatus(String),
    InvalidDate(String),
    Rejected(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => {
                write!(f, "invalid number of fields ({} instead of {})", n, FIELD_COUNT)
            }
            SkipReason::EmptyCompanyOrRole => write!(f, "empty company or role"),
            SkipReason::NonAsciiCompany => write!(f, "non-ASCII characters in company name"),
            SkipReason::NonAsciiRole => write!(f, "non-ASCII characters in role"),
            SkipReason::CompanyTooLong => {
                write!(f, "company name exceeding {} characters", COMPANY_MAX_LEN)
            }
            SkipReason::RoleTooLong => write!(f, "role exceeding {} characters", ROLE_MAX_LEN),
            SkipReason::InvalidPay => write!(f, "invalid pay format"),
            SkipReason::NegativePay => write!(f, "negative pay amount"),
            SkipReason::InvalidStatus(s) => write!(f, "invalid status '{}'", s),
            SkipReason::InvalidDate(e) => write!(f, "{}", e),
            SkipReason::Rejected(e) => write!(f, "{}", e),
        }
    }
}

/// A dropped line. Loading continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// 1-based line number in the file.
    pub line_number: usize,
    pub reason: SkipReason,
    pub line: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: Skipped line {} ({}): {}",
            self.line_number, self.reason, self.line
        )
    }
}

pub fn encode_field(value: &str) -> String {
    value.replace('%', "%25").replace('|', "%7C")
}

pub fn decode_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with("%25") {
            out.push('%');
            rest = &tail[3..];
        } else if tail.starts_with("%7C") || tail.starts_with("%7c") {
            out.push('|');
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

pub fn format_line(internship: &Internship) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        encode_field(internship.company()),
        encode_field(internship.role()),
        internship.deadline(),
        internship.pay(),
        internship.status()
    )
}

/// Parses one stored line. Checks run in a fixed order and the first failure wins.
pub fn parse_line(line: &str) -> std::result::Result<Internship, SkipReason> {
    let mut parts: Vec<&str> = line.split('|').collect();
    // Empty trailing segments are not fields: `a | b | c | d | e|` has five.
    while parts.len() > 1 && parts.last() == Some(&"") {
        parts.pop();
    }
    let parts: Vec<&str> = parts.into_iter().map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(parts.len()));
    }

    let company = decode_field(parts[IDX_COMPANY]);
    let role = decode_field(parts[IDX_ROLE]);

    if company.is_empty() || role.is_empty() {
        return Err(SkipReason::EmptyCompanyOrRole);
    }
    if !is_printable_ascii(&company) {
        return Err(SkipReason::NonAsciiCompany);
    }
    if !is_printable_ascii(&role) {
        return Err(SkipReason::NonAsciiRole);
    }
    if company.len() > COMPANY_MAX_LEN {
        return Err(SkipReason::CompanyTooLong);
    }
    if role.len() > ROLE_MAX_LEN {
        return Err(SkipReason::RoleTooLong);
    }

    let pay = match parts[IDX_PAY].parse::<i64>() {
        Ok(n) if n < 0 => return Err(SkipReason::NegativePay),
        Ok(n) => u32::try_from(n).map_err(|_| SkipReason::InvalidPay)?,
        Err(_) => return Err(SkipReason::InvalidPay),
    };

    let status: Status = parts[IDX_STATUS]
        .parse()
        .map_err(|_| SkipReason::InvalidStatus(parts[IDX_STATUS].to_string()))?;

    let deadline: Deadline = parts[IDX_DEADLINE]
        .parse()
        .map_err(|e: InternityError| SkipReason::InvalidDate(e.to_string()))?;

    Internship::new(&company, &role, deadline, pay)
        .map(|it| it.with_status(status))
        .map_err(|e| SkipReason::Rejected(e.to_string()))
}

/// Encodes the whole file.
pub fn render(internships: &[Internship], username: Option<&str>) -> Result<String> {
    let username = username.unwrap_or("");
    if username.contains(['\n', '\r']) {
        return Err(InternityError::Format(
            "username cannot contain line breaks".to_string(),
        ));
    }

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(username);
    out.push('\n');
    for internship in internships {
        out.push_str(&format_line(internship));
        out.push('\n');
    }
    Ok(out)
}

/// Decodes the whole file. Only a bad header is fatal; bad record lines become warnings.
pub fn parse(content: &str) -> Result<Snapshot> {
    let mut lines = content.lines();

    if lines.next() != Some(HEADER) {
        warn!("storage file is missing the username header");
        return Err(InternityError::Format(
            "missing username header".to_string(),
        ));
    }

    let username = lines
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);

    let mut snapshot = Snapshot {
        username,
        ..Snapshot::default()
    };

    // Records start on the third line of the file.
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 3;
        match parse_line(line) {
            Ok(internship) => snapshot.internships.push(internship),
            Err(reason) => {
                warn!(line_number, reason = %reason, "skipping stored line");
                snapshot.warnings.push(LoadWarning {
                    line_number,
                    reason,
                    line: line.to_string(),
                });
            }
        }
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::fixtures::internship;

    #[test]
    fn formats_the_documented_layout() {
        let it = internship("Google", "SWE", "1-1-2025", 8000).with_status(Status::Applied);
        assert_eq!(format_line(&it), "Google | SWE | 01-01-2025 | 8000 | Applied");
    }

    #[test]
    fn round_trips_a_record() {
        let it = internship("Umbrella Corp", "Researcher", "10-10-2025", 1000)
            .with_status(Status::Interviewing);
        assert_eq!(parse_line(&format_line(&it)).unwrap(), it);
    }

    #[test]
    fn round_trips_delimiters_and_percent_signs() {
        let it = internship("A|B Corp", "50% | remote", "29-02-2024", 0);
        let line = format_line(&it);
        assert!(line.starts_with("A%7CB Corp | 50%25 %7C remote |"));
        assert_eq!(parse_line(&line).unwrap(), it);

        let tricky = internship("lit%7Ceral", "x", "01-01-2025", 1);
        assert_eq!(parse_line(&format_line(&tricky)).unwrap(), tricky);
    }

    #[test]
    fn decode_keeps_unknown_percent_sequences() {
        assert_eq!(decode_field("100%"), "100%");
        assert_eq!(decode_field("a%7cb"), "a|b");
        assert_eq!(decode_field("%41"), "%41");
    }

    #[test]
    fn trailing_empty_fields_are_ignored() {
        let it = parse_line("Google | SWE | 01-01-2025 | 1 | Pending|").unwrap();
        assert_eq!(it.company(), "Google");
        assert_eq!(it.status(), Status::Pending);
        assert!(parse_line("Google | SWE | 01-01-2025 | 1 | Pending||").is_ok());

        // A trailing segment holding spaces still counts.
        assert_eq!(
            parse_line("Google | SWE | 01-01-2025 | 1 | Pending| ").unwrap_err(),
            SkipReason::FieldCount(6)
        );
    }

    #[test]
    fn status_is_canonicalised_on_parse() {
        let it = parse_line("Google | SWE | 01-01-2025 | 1 | oFfEr").unwrap();
        assert_eq!(it.status(), Status::Offer);
    }

    #[test]
    fn reports_the_first_failing_check() {
        let cases = [
            ("a | b | c", SkipReason::FieldCount(3)),
            (" | SWE | 01-01-2025 | 1 | Pending", SkipReason::EmptyCompanyOrRole),
            ("Gööгle | SWE | 01-01-2025 | 1 | Pending", SkipReason::NonAsciiCompany),
            ("Google | Ingénieur | 01-01-2025 | 1 | Pending", SkipReason::NonAsciiRole),
            ("Google | SWE | 01-01-2025 | ten | Pending", SkipReason::InvalidPay),
            ("Google | SWE | 01-01-2025 | -5 | Pending", SkipReason::NegativePay),
            (
                "Google | SWE | 01-01-2025 | 5 | Ghosted",
                SkipReason::InvalidStatus("Ghosted".to_string()),
            ),
        ];
        for (line, expected) in cases {
            assert_eq!(parse_line(line).unwrap_err(), expected, "line: {line}");
        }

        let long = format!("{} | SWE | 01-01-2025 | 1 | Pending", "c".repeat(31));
        assert_eq!(parse_line(&long).unwrap_err(), SkipReason::CompanyTooLong);
        let long = format!("Google | {} | 01-01-2025 | 1 | Pending", "r".repeat(31));
        assert_eq!(parse_line(&long).unwrap_err(), SkipReason::RoleTooLong);

        assert!(matches!(
            parse_line("Google | SWE | 31-02-2025 | 1 | Pending"),
            Err(SkipReason::InvalidDate(_))
        ));
        assert!(matches!(
            parse_line("Google | SWE | 2025-01-01 | 1 | Pending"),
            Err(SkipReason::InvalidDate(_))
        ));
    }

    #[test]
    fn render_writes_header_and_username() {
        let items = vec![internship("Google", "SWE", "01-01-2025", 8000)];
        let text = render(&items, Some("Walter")).unwrap();
        assert_eq!(
            text,
            "Username (in line below):\nWalter\nGoogle | SWE | 01-01-2025 | 8000 | Pending\n"
        );
    }

    #[test]
    fn render_without_username_leaves_blank_line() {
        let text = render(&[], None).unwrap();
        assert_eq!(text, "Username (in line below):\n\n");
    }

    #[test]
    fn render_refuses_multiline_username() {
        let err = render(&[], Some("Walter\nWhite")).unwrap_err();
        assert!(matches!(err, InternityError::Format(_)));
    }

    #[test]
    fn parse_requires_exact_header() {
        assert!(matches!(parse(""), Err(InternityError::Format(_))));
        assert!(matches!(
            parse("Username:\nbob\n"),
            Err(InternityError::Format(_))
        ));
    }

    #[test]
    fn parse_trims_username_and_treats_blank_as_absent() {
        let snap = parse("Username (in line below):\n  Skyler  \n").unwrap();
        assert_eq!(snap.username.as_deref(), Some("Skyler"));
        let snap = parse("Username (in line below):\n   \n").unwrap();
        assert_eq!(snap.username, None);
        let snap = parse("Username (in line below):").unwrap();
        assert_eq!(snap.username, None);
        assert!(snap.internships.is_empty());
    }

    #[test]
    fn malformed_line_is_skipped_with_a_warning() {
        let content = "Username (in line below):\n\
                       Hank\n\
                       Google | SWE | 01-01-2025 | 8000 | Applied\n\
                       Amazon | Intern | 15-11-2025\n\
                       Netflix | Ops | 01-02-2026 | 9000 | Offer\n\
                       Meta | PM | 03-03-2026 | 7000 | Pending\n";
        let snap = parse(content).unwrap();
        assert_eq!(snap.internships.len(), 3);
        assert_eq!(snap.warnings.len(), 1);
        assert_eq!(snap.warnings[0].line_number, 4);
        assert_eq!(snap.warnings[0].reason, SkipReason::FieldCount(3));
        assert!(snap.warnings[0]
            .to_string()
            .starts_with("Warning: Skipped line 4"));
    }

    #[test]
    fn parse_accepts_crlf_line_endings() {
        let content = "Username (in line below):\r\nMarie\r\nGoogle | SWE | 01-01-2025 | 1 | Pending\r\n";
        let snap = parse(content).unwrap();
        assert_eq!(snap.username.as_deref(), Some("Marie"));
        assert_eq!(snap.internships.len(), 1);
    }
}
