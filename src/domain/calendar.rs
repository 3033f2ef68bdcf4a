//! Month calendar grid annotated with journal entries

use crate::domain::{EntrySummary, MonthToken};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Days per grid row
pub const DAYS_PER_WEEK: usize = 7;

/// One position of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// None for padding cells outside the month
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub entry: Option<EntrySummary>,
}

impl DayCell {
    /// Placeholder cell before the first or after the last day of the month
    pub fn padding() -> Self {
        DayCell {
            date: None,
            is_today: false,
            entry: None,
        }
    }

    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }
}

/// A Monday-first week of exactly seven cells
pub type WeekRow = [DayCell; DAYS_PER_WEEK];

/// Rows of a month calendar, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthToken,
    pub weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// Lay out `month` and annotate it with `entries`.
    ///
    /// `entries` are expected to be created within `month`, in creation
    /// order. When several share a date the last one is shown.
    pub fn build(month: MonthToken, today: NaiveDate, entries: &[EntrySummary]) -> Self {
        let index = EntryDateIndex::new(entries);

        let leading = month.first_day().weekday().num_days_from_monday() as usize;
        let mut cells: Vec<DayCell> = std::iter::repeat_with(DayCell::padding)
            .take(leading)
            .chain(month.days().map(|date| DayCell {
                date: Some(date),
                is_today: date == today,
                entry: index.get(date).cloned(),
            }))
            .collect();

        let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
        cells.extend(std::iter::repeat_with(DayCell::padding).take(trailing));

        // cells.len() is a multiple of DAYS_PER_WEEK, so every chunk converts
        let weeks: Vec<WeekRow> = cells
            .chunks_exact(DAYS_PER_WEEK)
            .filter_map(|week| week.to_vec().try_into().ok())
            .collect();

        MonthGrid { month, weeks }
    }

    /// Cells with a real date, in reading order
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter(|cell| !cell.is_padding())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == Some(date))
    }

    /// Entries shown in the grid, in date order
    pub fn entries(&self) -> impl Iterator<Item = &EntrySummary> {
        self.days().filter_map(|cell| cell.entry.as_ref())
    }
}

/// Creation date → entry shown for that day
struct EntryDateIndex<'a> {
    by_date: BTreeMap<NaiveDate, &'a EntrySummary>,
}

impl<'a> EntryDateIndex<'a> {
    fn new(entries: &'a [EntrySummary]) -> Self {
        let mut by_date = BTreeMap::new();
        for entry in entries {
            by_date.insert(entry.date, entry);
        }
        EntryDateIndex { by_date }
    }

    fn get(&self, date: NaiveDate) -> Option<&'a EntrySummary> {
        self.by_date.get(&date).copied()
    }
}
