//! Login check shared by every entry operation

use crate::error::{JotcalError, Result};
use crate::infrastructure::Config;

/// Proof that the caller is the journal owner.
///
/// Entry and calendar services can only be built from a session, so an
/// operation never runs before the login check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
}

impl Session {
    /// Check `user` against the owner named in `config`
    pub fn login(config: &Config, user: Option<&str>) -> Result<Self> {
        let user = user.map(str::trim).filter(|name| !name.is_empty());

        match user {
            None => Err(JotcalError::LoginRequired(
                "no user given".to_string(),
            )),
            Some(name) if name == config.owner => {
                log::debug!("Logged in as {}", name);
                Ok(Session {
                    user: name.to_string(),
                })
            }
            Some(name) => Err(JotcalError::LoginRequired(format!(
                "'{}' is not the owner of this journal",
                name
            ))),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new(Some("ada".to_string()))
    }

    #[test]
    fn test_owner_logs_in() {
        let session = Session::login(&config(), Some("ada")).unwrap();
        assert_eq!(session.user(), "ada");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(Session::login(&config(), Some("  ada ")).is_ok());
    }

    #[test]
    fn test_missing_user_is_rejected() {
        for user in [None, Some(""), Some("   ")] {
            match Session::login(&config(), user).unwrap_err() {
                JotcalError::LoginRequired(reason) => assert_eq!(reason, "no user given"),
                other => panic!("Expected LoginRequired error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_user_is_rejected() {
        match Session::login(&config(), Some("mallory")).unwrap_err() {
            JotcalError::LoginRequired(reason) => assert!(reason.contains("mallory")),
            other => panic!("Expected LoginRequired error, got {:?}", other),
        }
    }
}
