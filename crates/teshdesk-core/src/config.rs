//! Configuration for the TeshDesk console
//!
//! Loaded from TOML. Every key has a default, so an empty document is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pagination::PageSize;

/// Whether add/edit/delete also reach the remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Changes stay in memory.
    #[default]
    Demo,
    /// Changes are sent to the update/delete endpoints.
    Live,
}

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// User record source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_users_path")]
    pub users_path: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub mode: NetworkMode,
}

/// Session gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

/// List view defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default)]
    pub page_size: PageSize,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.freeapi.app".to_string()
}
fn default_users_path() -> String {
    "/api/v1/public/randomusers".to_string()
}
fn default_page() -> u32 {
    1
}
fn default_limit() -> u32 {
    500
}
fn default_email() -> String {
    "onlyteshcodes@gmail.com".to_string()
}
fn default_password() -> String {
    "password@1.".to_string()
}
fn default_session_key() -> String {
    "isLoggedIn".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            page: default_page(),
            limit: default_limit(),
            mode: NetworkMode::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
            session_key: default_session_key(),
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the console cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }
        if !self.api.users_path.starts_with('/') {
            return Err(Error::Config("api.users_path must start with '/'".to_string()));
        }
        if self.api.limit == 0 {
            return Err(Error::Config("api.limit must be positive".to_string()));
        }
        if self.auth.session_key.is_empty() {
            return Err(Error::Config("auth.session_key must not be empty".to_string()));
        }
        Ok(())
    }
}

impl ApiConfig {
    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.users_path)
    }

    /// `GET` URL for the whole collection.
    pub fn users_url(&self) -> String {
        format!("{}?page={}&limit={}", self.collection_url(), self.page, self.limit)
    }

    /// `PUT`/`DELETE` URL for one record; the id is percent-encoded.
    pub fn user_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    pub fn is_live(&self) -> bool {
        self.mode == NetworkMode::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.auth.session_key, "isLoggedIn");
        assert_eq!(config.ui.page_size, PageSize::TwentyFive);
        assert_eq!(config.api.mode, NetworkMode::Demo);
    }

    #[test]
    fn test_urls() {
        let api = ApiConfig::default();
        assert_eq!(
            api.users_url(),
            "https://api.freeapi.app/api/v1/public/randomusers?page=1&limit=500"
        );
        assert_eq!(
            api.user_url("abc"),
            "https://api.freeapi.app/api/v1/public/randomusers/abc"
        );
    }

    #[test]
    fn test_user_url_escapes_id() {
        let api = ApiConfig::default();
        assert_eq!(
            api.user_url("a/b?c d"),
            "https://api.freeapi.app/api/v1/public/randomusers/a%2Fb%3Fc%20d"
        );
    }

    #[test]
    fn test_partial_override() {
        let config = ConsoleConfig::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:8080/"
            mode = "live"

            [ui]
            page_size = 50
            "#,
        )
        .unwrap();
        assert!(config.api.is_live());
        assert_eq!(config.api.limit, 500);
        assert_eq!(config.ui.page_size, PageSize::Fifty);
        assert_eq!(
            config.api.user_url("1"),
            "http://localhost:8080/api/v1/public/randomusers/1"
        );
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let err = ConsoleConfig::from_toml_str("[ui]\npage_size = 20\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validation() {
        let err = ConsoleConfig::from_toml_str("[api]\nlimit = 0\n").unwrap_err();
        assert!(err.to_string().contains("limit"));
    }
}
