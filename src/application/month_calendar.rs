//! Month calendar use case

use crate::application::Session;
use crate::domain::{MonthGrid, MonthToken};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// Everything needed to render one month of the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    pub month: MonthToken,
    pub grid: MonthGrid,
    pub previous: Option<MonthToken>,
    pub next: Option<MonthToken>,
}

/// Service for building the month calendar view
pub struct MonthCalendarService<S> {
    store: S,
    user: String,
}

impl<S: EntryStore> MonthCalendarService<S> {
    pub fn new(store: S, session: &Session) -> Self {
        MonthCalendarService {
            store,
            user: session.user().to_string(),
        }
    }

    /// Build the calendar for the month named by `month_token`.
    /// Missing or invalid tokens show the month containing `today`.
    pub fn execute(&self, month_token: Option<&str>, today: NaiveDate) -> Result<CalendarPage> {
        let month = MonthToken::resolve(month_token, today);
        let entries = self.store.list_by_month(month)?;
        log::debug!(
            "Building calendar {} for {} with {} entries",
            month,
            self.user,
            entries.len()
        );

        let grid = MonthGrid::build(month, today, &entries);
        let (previous, next) = month.adjacent();

        Ok(CalendarPage {
            month,
            grid,
            previous,
            next,
        })
    }
}
