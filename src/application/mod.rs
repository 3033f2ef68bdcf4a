//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod manage_config;
pub mod month_calendar;
pub mod session;

pub use entries::{EntryChanges, EntryService, NewEntry};
pub use manage_config::ConfigService;
pub use month_calendar::{CalendarPage, MonthCalendarService};
pub use session::Session;
