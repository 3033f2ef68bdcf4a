//! Month tokens: which calendar month to show, and month arithmetic

use crate::error::{JotcalError, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Earliest year a month token may name
pub const MIN_YEAR: i32 = 1;
/// Latest year a month token may name
pub const MAX_YEAR: i32 = 9999;

/// A (year, month) pair, displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthToken {
    first: NaiveDate,
}

impl MonthToken {
    /// Build a token for `year`/`month`; None for impossible values
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| MonthToken { first })
    }

    /// The month `date` falls in
    pub fn current(date: NaiveDate) -> Self {
        MonthToken {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Strictly parse a `YYYY-MM` token.
    ///
    /// The year must be exactly four digits and the month one or two.
    pub fn parse(token: &str) -> Result<Self> {
        Some(token)
            .filter(|raw| has_month_shape(raw))
            .and_then(|raw| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok())
            .and_then(|date| Self::new(date.year(), date.month()))
            .ok_or_else(|| JotcalError::InvalidMonth(token.to_string()))
    }

    /// Resolve an optional, user-supplied token to a month.
    ///
    /// A missing or unparsable token yields the month of `today`.
    pub fn resolve(token: Option<&str>, today: NaiveDate) -> Self {
        let requested = token.and_then(|raw| match Self::parse(raw) {
            Ok(month) => Some(month),
            Err(_) => {
                log::debug!("Ignoring invalid month token '{}'", raw);
                None
            }
        });

        requested.unwrap_or_else(|| Self::current(today))
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-based
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        // Years stop at MAX_YEAR, well inside chrono's range
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next_first| next_first.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Every date of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |day| self.first.with_day(day))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// One month earlier; None before the supported range
    pub fn previous(&self) -> Option<Self> {
        match self.month() {
            1 => Self::new(self.year() - 1, 12),
            m => Self::new(self.year(), m - 1),
        }
    }

    /// One month later; None past the supported range
    pub fn next(&self) -> Option<Self> {
        match self.month() {
            12 => Self::new(self.year() + 1, 1),
            m => Self::new(self.year(), m + 1),
        }
    }

    /// Previous and next month, for navigation
    pub fn adjacent(&self) -> (Option<Self>, Option<Self>) {
        (self.previous(), self.next())
    }

    /// Human label such as "March 2024"
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

fn has_month_shape(token: &str) -> bool {
    let Some((year, month)) = token.split_once('-') else {
        return false;
    };
    year.len() == 4
        && (1..=2).contains(&month.len())
        && year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
