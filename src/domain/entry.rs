//! Journal entries and their calendar projection

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dated journal entry as kept by the entry store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    /// Set once on creation; the calendar buckets entries by its date.
    pub created: NaiveDateTime,
}

impl JournalEntry {
    /// Calendar date the entry was created on
    pub fn date(&self) -> NaiveDate {
        self.created.date()
    }

    /// Lightweight projection used by the calendar (no content)
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            id: self.id,
            title: self.title.clone(),
            date: self.date(),
        }
    }
}

/// Entry id, title and creation date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub id: EntryId,
    pub title: String,
    pub date: NaiveDate,
}

impl EntrySummary {
    pub fn new(id: EntryId, title: impl Into<String>, date: NaiveDate) -> Self {
        EntrySummary {
            id,
            title: title.into(),
            date,
        }
    }
}

/// Title suggested for a new entry started from a calendar day.
///
/// Returns None when `date_hint` is not a `YYYY-MM-DD` date.
pub fn suggested_title(date_hint: &str) -> Option<String> {
    NaiveDate::parse_from_str(date_hint, "%Y-%m-%d")
        .ok()
        .map(|date| format!("Entry for {}", date.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(created: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId(7),
            title: "Rainy day".to_string(),
            content: "Stayed in and read.".to_string(),
            created: NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S").unwrap(),
        }
    }

    #[test]
    fn test_date_drops_time_of_day() {
        let e = entry("2024-03-05T23:59:59");
        assert_eq!(e.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_summary_has_no_content() {
        let e = entry("2024-03-05T08:00:00");
        let summary = e.summary();
        assert_eq!(summary.id, EntryId(7));
        assert_eq!(summary.title, "Rainy day");
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_suggested_title_from_date() {
        assert_eq!(
            suggested_title("2024-03-05"),
            Some("Entry for 2024-03-05".to_string())
        );
    }

    #[test]
    fn test_suggested_title_ignores_bad_dates() {
        assert_eq!(suggested_title("2024-02-30"), None);
        assert_eq!(suggested_title("tomorrow"), None);
        assert_eq!(suggested_title(""), None);
    }

    #[test]
    fn test_entry_id_display() {
        assert_eq!(EntryId(12).to_string(), "12");
    }
}
