//! Domain layer - Business logic and domain models

pub mod calendar;
pub mod entry;
pub mod month;

pub use calendar::{DayCell, MonthGrid, WeekRow};
pub use entry::{suggested_title, EntryId, EntrySummary, JournalEntry};
pub use month::MonthToken;
