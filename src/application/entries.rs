//! Entry create/read/update/delete use cases

use crate::application::Session;
use crate::domain::{suggested_title, EntryId, JournalEntry, MonthToken};
use crate::error::{JotcalError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDateTime;

pub const CREATED_MESSAGE: &str = "Your new entry was created!";
pub const UPDATED_MESSAGE: &str = "Your entry was updated!";
pub const DELETED_MESSAGE: &str = "Your entry was deleted!";

/// Input for a new entry
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: Option<String>,
    pub content: String,
    /// `YYYY-MM-DD` day the entry was started from; used to pre-fill the title
    pub date_hint: Option<String>,
}

/// Changes to an existing entry; None keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Service for managing journal entries
pub struct EntryService<S> {
    store: S,
    user: String,
}

impl<S: EntryStore> EntryService<S> {
    pub fn new(store: S, session: &Session) -> Self {
        EntryService {
            store,
            user: session.user().to_string(),
        }
    }

    /// Entries newest first, optionally limited to one month
    pub fn list(&self, month: Option<MonthToken>, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
        let mut entries = self.store.list_all()?;

        if let Some(month) = month {
            entries.retain(|entry| month.contains(entry.date()));
        }
        if let Some(n) = limit {
            entries.truncate(n);
        }

        Ok(entries)
    }

    pub fn show(&self, id: EntryId) -> Result<JournalEntry> {
        self.store.get(id)
    }

    /// Create an entry stamped with `now`
    pub fn create(&mut self, new_entry: NewEntry, now: NaiveDateTime) -> Result<JournalEntry> {
        let title = new_entry
            .title
            .or_else(|| new_entry.date_hint.as_deref().and_then(suggested_title))
            .unwrap_or_default();
        let title = validated_title(&title)?;

        log::debug!("{} is creating entry '{}'", self.user, title);
        self.store.create(title, &new_entry.content, now)
    }

    pub fn update(&mut self, id: EntryId, changes: EntryChanges) -> Result<JournalEntry> {
        let current = self.store.get(id)?;

        let title = changes.title.unwrap_or(current.title);
        let title = validated_title(&title)?;
        let content = changes.content.unwrap_or(current.content);

        log::debug!("{} is updating entry {}", self.user, id);
        self.store.update(id, title, &content)
    }

    pub fn delete(&mut self, id: EntryId) -> Result<()> {
        log::debug!("{} is deleting entry {}", self.user, id);
        self.store.delete(id)
    }
}

fn validated_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(JotcalError::Validation("Title is required".to_string()));
    }
    Ok(trimmed)
}
