//! Development bootstrap: seeds one admin account and a session for it.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::UserId;
use crate::domain::session::SessionToken;

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Id of the admin account to create at start-up
    pub admin_id: Option<String>,

    /// Username for the seeded admin
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    /// Bearer token issued to the seeded admin
    pub admin_token: Option<String>,
}

/// A validated bootstrap admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub id: UserId,
    pub username: String,
    pub token: SessionToken,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_id: None,
            admin_username: default_admin_username(),
            admin_token: None,
        }
    }
}

impl BootstrapConfig {
    /// `None` when no admin id is configured.
    ///
    /// Without a configured token a random one is generated.
    pub fn admin(&self) -> Result<Option<BootstrapAdmin>, ValidationError> {
        let Some(raw_id) = &self.admin_id else {
            return Ok(None);
        };
        let id = UserId::new(raw_id.clone())
            .map_err(|_| ValidationError::InvalidBootstrap("admin_id"))?;
        let token = match &self.admin_token {
            Some(raw) => SessionToken::new(raw.clone())
                .map_err(|_| ValidationError::InvalidBootstrap("admin_token"))?,
            None => SessionToken::generate(),
        };
        Ok(Some(BootstrapAdmin {
            id,
            username: self.admin_username.clone(),
            token,
        }))
    }

    pub fn is_enabled(&self) -> bool {
        self.admin_id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.admin().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let config = BootstrapConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.admin().unwrap(), None);
    }

    #[test]
    fn configured_token_is_used() {
        let config = BootstrapConfig {
            admin_id: Some("root".to_string()),
            admin_username: "root".to_string(),
            admin_token: Some("dev-token".to_string()),
        };
        let admin = config.admin().unwrap().unwrap();
        assert_eq!(admin.id.as_str(), "root");
        assert_eq!(admin.token.as_str(), "dev-token");
    }

    #[test]
    fn missing_token_is_generated() {
        let config = BootstrapConfig {
            admin_id: Some("root".to_string()),
            ..Default::default()
        };
        let admin = config.admin().unwrap().unwrap();
        assert!(!admin.token.as_str().is_empty());
    }

    #[test]
    fn blank_values_are_rejected() {
        let config = BootstrapConfig {
            admin_id: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBootstrap("admin_id")));

        let config = BootstrapConfig {
            admin_id: Some("root".to_string()),
            admin_token: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBootstrap("admin_token")));
    }
}
