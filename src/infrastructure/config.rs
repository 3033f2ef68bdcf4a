//! Configuration management

use crate::error::{JotcalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the directory marking a journal root
pub const JOURNAL_DIR: &str = ".jotcal";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The only user allowed to read or change entries
    pub owner: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config owned by `owner`, or by the detected login name
    pub fn new(owner: Option<String>) -> Self {
        Config {
            owner: owner.unwrap_or_else(Self::detect_default_owner),
            created: Utc::now(),
        }
    }

    /// Load config from .jotcal/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JotcalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JotcalError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JotcalError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jotcal/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JotcalError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Detect the login name from the environment
    fn detect_default_owner() -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "owner".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_with_owner() {
        let config = Config::new(Some("ada".to_string()));
        assert_eq!(config.owner, "ada");
    }

    #[test]
    fn test_new_config_detects_owner() {
        let config = Config::new(None);
        assert!(!config.owner.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(Some("ada".to_string()));

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".jotcal").exists());
        assert!(temp.path().join(".jotcal/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.owner, config.owner);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            JotcalError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_corrupt_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".jotcal")).unwrap();
        fs::write(temp.path().join(".jotcal/config.toml"), "owner = ").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            JotcalError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
