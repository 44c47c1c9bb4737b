//! Date selection for export
//!
//! Up to two `YYYY-MM-DD` strings pick the days to export: none means
//! everything, one means a single day, two mean an inclusive range.

use crate::error::{ResmartError, Result};
use crate::types::Record;
use jiff::civil::Date;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("date pattern is valid")
    })
}

/// Parse a `YYYY-MM-DD` date (month and day may drop the leading zero)
pub fn parse_date(text: &str) -> Result<Date> {
    let invalid = || {
        ResmartError::InvalidDateRange(format!(
            "'{text}' is not a valid date, expected YYYY-MM-DD"
        ))
    };

    let caps = date_pattern().captures(text.trim()).ok_or_else(invalid)?;
    let year: i16 = caps[1].parse().map_err(|_| invalid())?;
    let month: i8 = caps[2].parse().map_err(|_| invalid())?;
    let day: i8 = caps[3].parse().map_err(|_| invalid())?;
    if year == 0 {
        return Err(invalid());
    }

    Date::new(year, month, day).map_err(|_| invalid())
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(ResmartError::InvalidDateRange(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// The user's date request, before it is resolved against the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelection {
    #[default]
    All,
    Range(DateRange),
}

impl DateSelection {
    /// Build a selection from zero, one or two date strings
    pub fn from_args<S: AsRef<str>>(dates: &[S]) -> Result<Self> {
        match dates {
            [] => Ok(DateSelection::All),
            [day] => Ok(DateSelection::Range(DateRange::day(parse_date(
                day.as_ref(),
            )?))),
            [start, end] => Ok(DateSelection::Range(DateRange::new(
                parse_date(start.as_ref())?,
                parse_date(end.as_ref())?,
            )?)),
            _ => Err(ResmartError::InvalidDateRange(format!(
                "expected at most two dates, got {}",
                dates.len()
            ))),
        }
    }

    /// First requested day, if any
    pub fn start(&self) -> Option<Date> {
        match self {
            DateSelection::All => None,
            DateSelection::Range(range) => Some(range.start),
        }
    }

    /// Effective range for `records`. `All` spans first to last record;
    /// with no records there is nothing to span.
    pub fn resolve(&self, records: &[Record]) -> Option<DateRange> {
        match self {
            DateSelection::Range(range) => Some(*range),
            DateSelection::All => {
                let first = records.first()?.date();
                let last = records.last()?.date();
                // Out-of-order data can end on an earlier day than it starts
                Some(DateRange {
                    start: first.min(last),
                    end: first.max(last),
                })
            }
        }
    }
}

/// Records inside `range`, in their original order
pub fn filter_records(records: &[Record], range: Option<DateRange>) -> Vec<&Record> {
    match range {
        Some(range) => records
            .iter()
            .filter(|record| range.contains(record.date()))
            .collect(),
        None => Vec::new(),
    }
}
