//! Config management use case

use crate::error::{JotcalError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "owner" => Ok(config.owner),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JotcalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: owner, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "owner" => {
                let owner = value.trim();
                if owner.is_empty() {
                    return Err(JotcalError::Config("Owner cannot be empty".to_string()));
                }
                config.owner = owner.to_string();
            }
            "created" => {
                return Err(JotcalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JotcalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: owner",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(Some("ada".to_string())))
            .unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_owner() {
        let (_temp, service) = service();
        assert_eq!(service.get("owner").unwrap(), "ada");
    }

    #[test]
    fn test_set_owner() {
        let (_temp, service) = service();
        service.set("owner", "grace").unwrap();
        assert_eq!(service.list().unwrap().owner, "grace");
    }

    #[test]
    fn test_set_blank_owner_fails() {
        let (_temp, service) = service();
        assert!(service.set("owner", "  ").is_err());
        assert_eq!(service.get("owner").unwrap(), "ada");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.get("created").is_ok());
        match service.set("created", "2020-01-01").unwrap_err() {
            JotcalError::Config(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        match service.get("mode").unwrap_err() {
            JotcalError::Config(msg) => assert!(msg.contains("Unknown config key: 'mode'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
