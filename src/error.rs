//! Error types for jotcal

use crate::domain::EntryId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jotcal application
#[derive(Debug, Error)]
pub enum JotcalError {
    #[error("Not a jotcal directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Login required: {0}")]
    LoginRequired(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

impl JotcalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotcalError::NotJournalDirectory(_) => 2,
            JotcalError::InvalidMonth(_) => 3,
            JotcalError::EntryNotFound(_) => 4,
            JotcalError::LoginRequired(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotcalError::NotJournalDirectory(path) => {
                format!(
                    "Not a jotcal directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'jotcal init' in this directory to create a new journal\n\
                    • Navigate to an existing jotcal directory\n\
                    • Set JOTCAL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JotcalError::LoginRequired(reason) => {
                format!(
                    "Login required: {}\n\n\
                    Suggestions:\n\
                    • Pass your name with --user <NAME>\n\
                    • Set JOTCAL_USER environment variable to the journal owner\n\
                    • Check the owner with: jotcal config owner",
                    reason
                )
            }
            JotcalError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'jotcal list' to see existing entries and their ids\n\
                    • The entry may have been deleted",
                    id
                )
            }
            JotcalError::InvalidMonth(token) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Expected format: YYYY-MM\n\
                    Example: jotcal list --month 2024-03",
                    token
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotcalError
pub type Result<T> = std::result::Result<T, JotcalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_journal_directory_suggestion() {
        let err = JotcalError::NotJournalDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("jotcal init"));
        assert!(msg.contains("JOTCAL_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_login_required_suggestions() {
        let err = JotcalError::LoginRequired("no user given".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Login required: no user given"));
        assert!(msg.contains("--user"));
        assert!(msg.contains("JOTCAL_USER"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = JotcalError::EntryNotFound(EntryId(42));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Entry not found: 42"));
        assert!(msg.contains("jotcal list"));
    }

    #[test]
    fn test_invalid_month_example() {
        let err = JotcalError::InvalidMonth("2024-13".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'2024-13'"));
        assert!(msg.contains("YYYY-MM"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            JotcalError::NotJournalDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(JotcalError::InvalidMonth("x".to_string()).exit_code(), 3);
        assert_eq!(JotcalError::EntryNotFound(EntryId(1)).exit_code(), 4);
        assert_eq!(JotcalError::LoginRequired("x".to_string()).exit_code(), 5);
        assert_eq!(JotcalError::Validation("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = JotcalError::Validation("Title is required".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid entry: Title is required");
    }
}
