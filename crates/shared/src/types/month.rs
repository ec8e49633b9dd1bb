//! Month granularity for income payment periods.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`YearMonth`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    /// Month outside 1..=12 or year outside the calendar range.
    #[error("Invalid year-month: {year}-{month}")]
    OutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
    },

    /// Text is not in `YYYY-MM` form.
    #[error("Cannot parse year-month from '{0}'")]
    Unparseable(String),
}

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, validating the month number.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MonthError::OutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if `self` lies in `[from, to]`, inclusive.
    #[must_use]
    pub fn is_within(&self, from: Self, to: Self) -> bool {
        from <= *self && *self <= to
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || MonthError::Unparseable(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(unparseable)?;
        let year = year.parse().map_err(|_| unparseable())?;
        let month = month.parse().map_err(|_| unparseable())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let month = ym("2019-02");
        assert_eq!(month.year(), 2019);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2019-02");
    }

    #[rstest]
    #[case("2019-13")]
    #[case("2019-00")]
    #[case("2019")]
    #[case("abcd-01")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(input.parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_and_window() {
        assert!(ym("2018-12") < ym("2019-01"));
        assert!(ym("2019-02").is_within(ym("2019-01"), ym("2019-02")));
        assert!(!ym("2018-12").is_within(ym("2019-01"), ym("2019-02")));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2019, 5, 17).unwrap();
        assert_eq!(YearMonth::from_date(date), ym("2019-05"));
    }
}
