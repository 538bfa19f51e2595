use crate::error::{Error, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-selected calendar date.
///
/// Parsed by reading the literal digit fields of a `YYYY-MM-DD` string,
/// never by constructing a timezone-aware instant and re-extracting fields.
/// Month and day render zero-padded when building request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSelection {
    /// Parse a `YYYY-MM-DD` string into a selection.
    ///
    /// Rejects empty input, malformed strings, and dates that don't exist
    /// on the calendar (e.g. `2024-02-30`).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::InvalidDate("no date selected".to_string()));
        }

        let mut parts = input.splitn(3, '-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => {
                return Err(Error::InvalidDate(format!(
                    "expected YYYY-MM-DD, got '{}'",
                    input
                )));
            }
        };

        let year: i32 = parse_field(year, input)?;
        let month: u32 = parse_field(month, input)?;
        let day: u32 = parse_field(day, input)?;

        // Calendar validity only; the parsed fields stay as entered.
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(Error::InvalidDate(format!(
                "'{}' is not a calendar date",
                input
            )));
        }

        Ok(Self { year, month, day })
    }

    /// Today's date in the local calendar.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    /// Whether this selection lies after today.
    pub fn is_future(&self) -> bool {
        let today = Self::today();
        (self.year, self.month, self.day) > (today.year, today.month, today.day)
    }

    /// Two-character zero-padded month, as used in request paths.
    pub fn mm(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Two-character zero-padded day, as used in request paths.
    pub fn dd(&self) -> String {
        format!("{:02}", self.day)
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, input: &str) -> Result<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(format!(
            "expected YYYY-MM-DD, got '{}'",
            input
        )));
    }
    field
        .parse()
        .map_err(|_| Error::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", input)))
}
