//! File system repository

use crate::domain::{EntryId, EntrySummary, JournalEntry, MonthToken};
use crate::error::{JotcalError, Result};
use crate::infrastructure::config::JOURNAL_DIR;
use crate::infrastructure::Config;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the journal root holding one TOML file per entry
pub const ENTRIES_DIR: &str = "entries";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .jotcal/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .jotcal/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .jotcal directory exists
    fn is_initialized(&self) -> bool;

    /// Create .jotcal directory structure
    fn initialize(&self) -> Result<()>;
}

/// Storage of journal entries
pub trait EntryStore {
    /// All entries, newest first
    fn list_all(&self) -> Result<Vec<JournalEntry>>;

    /// Entries created within `month`, oldest first, without content
    fn list_by_month(&self, month: MonthToken) -> Result<Vec<EntrySummary>>;

    fn get(&self, id: EntryId) -> Result<JournalEntry>;

    fn create(&mut self, title: &str, content: &str, created: NaiveDateTime)
        -> Result<JournalEntry>;

    /// Replace title and content; the creation timestamp is kept
    fn update(&mut self, id: EntryId, title: &str, content: &str) -> Result<JournalEntry>;

    fn delete(&mut self, id: EntryId) -> Result<()>;
}

/// The fields of an entry file the calendar needs; content is never parsed
#[derive(Debug, Deserialize)]
struct EntryHeader {
    id: EntryId,
    title: String,
    created: NaiveDateTime,
}

impl EntryHeader {
    fn into_summary(self) -> EntrySummary {
        EntrySummary::new(self.id, self.title, self.created.date())
    }
}

/// File system implementation of JournalRepository and EntryStore
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks JOTCAL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("JOTCAL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JotcalError::Config(format!(
                    "JOTCAL_ROOT is set to '{}' but no .jotcal directory found. \
                    Run 'jotcal init' in that directory or unset JOTCAL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(JotcalError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .jotcal directory
    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    fn entry_path(&self, id: EntryId) -> PathBuf {
        self.entries_dir().join(format!("{}.toml", id))
    }

    fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write an entry file using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    fn write_entry(&self, entry: &JournalEntry) -> Result<()> {
        let dir = self.entries_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let contents = toml::to_string_pretty(entry)?;
        let path = self.entry_path(entry.id);
        let tmp_path = dir.join(format!("{}.toml.jotcal-tmp-{}", entry.id, std::process::id()));

        let replaced = fs::write(&tmp_path, contents).and_then(|()| {
            if path.exists() {
                // rename does not overwrite on Windows
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        });

        if let Err(e) = replaced {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                log::debug!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Load every readable entry file as `T`; unreadable ones are skipped
    fn load_entries<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let dir = self.entries_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for item in fs::read_dir(&dir)? {
            let Ok(item) = item else {
                continue;
            };
            let path = item.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }

            match Self::read_entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("Skipping unreadable entry {}: {}", path.display(), e),
            }
        }

        Ok(entries)
    }

    fn next_id(&self) -> Result<EntryId> {
        let max = self
            .load_entries::<EntryHeader>()?
            .iter()
            .map(|header| header.id.0)
            .max()
            .unwrap_or(0);
        Ok(EntryId(max + 1))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(JotcalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        fs::create_dir_all(self.entries_dir())?;
        Ok(())
    }
}

impl EntryStore for FileSystemRepository {
    fn list_all(&self) -> Result<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self.load_entries()?;
        entries.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    fn list_by_month(&self, month: MonthToken) -> Result<Vec<EntrySummary>> {
        let mut headers: Vec<EntryHeader> = self
            .load_entries::<EntryHeader>()?
            .into_iter()
            .filter(|header| month.contains(header.created.date()))
            .collect();
        headers.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(headers.into_iter().map(EntryHeader::into_summary).collect())
    }

    fn get(&self, id: EntryId) -> Result<JournalEntry> {
        let path = self.entry_path(id);
        if !path.is_file() {
            return Err(JotcalError::EntryNotFound(id));
        }
        Self::read_entry(&path)
    }

    fn create(
        &mut self,
        title: &str,
        content: &str,
        created: NaiveDateTime,
    ) -> Result<JournalEntry> {
        let entry = JournalEntry {
            id: self.next_id()?,
            title: title.to_string(),
            content: content.to_string(),
            created,
        };
        self.write_entry(&entry)?;
        log::info!("Created entry {} in {}", entry.id, self.root.display());
        Ok(entry)
    }

    fn update(&mut self, id: EntryId, title: &str, content: &str) -> Result<JournalEntry> {
        let mut entry = self.get(id)?;
        entry.title = title.to_string();
        entry.content = content.to_string();
        self.write_entry(&entry)?;
        log::info!("Updated entry {}", id);
        Ok(entry)
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        let path = self.entry_path(id);
        if !path.is_file() {
            return Err(JotcalError::EntryNotFound(id));
        }
        fs::remove_file(&path)?;
        log::info!("Deleted entry {}", id);
        Ok(())
    }
}
