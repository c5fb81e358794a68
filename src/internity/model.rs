use crate::error::{InternityError, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const COMPANY_MAX_LEN: usize = 30;
pub const ROLE_MAX_LEN: usize = 30;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    Interested,
    Applied,
    Interviewing,
    Offer,
    Accepted,
    Rejected,
}

impl Status {
    /// Every status, in the order the dashboard reports them.
    pub const ALL: [Status; 7] = [
        Status::Pending,
        Status::Interested,
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Accepted,
        Status::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Interested => "Interested",
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; always yields the canonical spelling.
impl FromStr for Status {
    type Err = InternityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
                InternityError::validation(format!(
                    "Invalid status: {}. Valid statuses are: {}",
                    wanted,
                    valid.join(", ")
                ))
            })
    }
}

/// An application deadline. Always a real calendar date; written as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(NaiveDate);

impl Deadline {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Deadline)
            .ok_or_else(|| {
                InternityError::validation(format!(
                    "Invalid date: {:02}-{:02}-{:04} is not a valid calendar date",
                    day, month, year
                ))
            })
    }

    pub fn today() -> Self {
        Deadline(Local::now().date_naive())
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl FromStr for Deadline {
    type Err = InternityError;

    /// Accepts `D-M-YYYY` up to `DD-MM-YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let format_error = || {
            InternityError::validation(format!(
                "Invalid date format: {} (expected DD-MM-YYYY)",
                s
            ))
        };

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(format_error());
        }
        let (day, month, year) = (parts[0], parts[1], parts[2]);

        let is_digits = |p: &str, min: usize, max: usize| {
            (min..=max).contains(&p.len()) && p.chars().all(|c| c.is_ascii_digit())
        };
        if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
            return Err(format_error());
        }

        let day = day.parse().map_err(|_| format_error())?;
        let month = month.parse().map_err(|_| format_error())?;
        let year = year.parse().map_err(|_| format_error())?;
        Deadline::new(day, month, year)
    }
}

/// One internship application.
///
/// Fields are private so every value that reaches an `Internship` has passed
/// through the same validation, whether it came from the user or from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Internship {
    company: String,
    role: String,
    deadline: Deadline,
    pay: u32,
    status: Status,
}

impl Internship {
    pub fn new(company: &str, role: &str, deadline: Deadline, pay: u32) -> Result<Self> {
        Ok(Self {
            company: validate_company(company)?,
            role: validate_role(role)?,
            deadline,
            pay,
            status: Status::default(),
        })
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn pay(&self) -> u32 {
        self.pay
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_company(&mut self, company: &str) -> Result<()> {
        self.company = validate_company(company)?;
        Ok(())
    }

    pub fn set_role(&mut self, role: &str) -> Result<()> {
        self.role = validate_role(role)?;
        Ok(())
    }

    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = deadline;
    }

    pub fn set_pay(&mut self, pay: u32) {
        self.pay = pay;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl fmt::Display for Internship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} (deadline: {}, pay: {}, status: {})",
            self.role, self.company, self.deadline, self.pay, self.status
        )
    }
}

/// Printable ASCII only: space (32) through tilde (126).
pub fn is_printable_ascii(s: &str) -> bool {
    s.chars().all(|c| (' '..='~').contains(&c))
}

pub fn validate_company(value: &str) -> Result<String> {
    validate_text("Company", value, COMPANY_MAX_LEN)
}

pub fn validate_role(value: &str) -> Result<String> {
    validate_text("Role", value, ROLE_MAX_LEN)
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InternityError::validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    if !is_printable_ascii(trimmed) {
        return Err(InternityError::validation(format!(
            "{} must contain only printable ASCII characters",
            field
        )));
    }
    if trimmed.len() > max_len {
        return Err(InternityError::validation(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}

pub fn parse_pay(value: &str) -> Result<u32> {
    let value = value.trim();
    match value.parse::<i64>() {
        Ok(n) if n < 0 => Err(InternityError::validation("Pay cannot be negative")),
        Ok(n) => u32::try_from(n)
            .map_err(|_| InternityError::validation(format!("Pay is too large: {}", n))),
        Err(_) => Err(InternityError::validation(format!(
            "Pay must be a whole number: {}",
            value
        ))),
    }
}
