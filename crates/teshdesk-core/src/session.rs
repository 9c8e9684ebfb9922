//! Session Gate
//!
//! A single persisted flag decides whether the console is signed in. The flag
//! is read once when the session context is created; after that the context is
//! the source of truth and storage is only written on login and logout.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::route::{guard, GuardDecision, Route};

const FLAG_VALUE: &str = "true";

// =============================================================================
// Storage
// =============================================================================

/// Key/value store backing the persisted session flag.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// The single accepted email/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl From<&AuthConfig> for Credentials {
    fn from(config: &AuthConfig) -> Self {
        Self::new(&config.email, &config.password)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Session context handed to the route guard.
#[derive(Debug, Clone)]
pub struct Session<S: SessionStorage> {
    storage: S,
    key: String,
    credentials: Credentials,
    authenticated: bool,
}

impl<S: SessionStorage> Session<S> {
    /// Read the persisted flag once and build the context.
    ///
    /// A storage failure starts the session signed out.
    pub fn init(storage: S, config: &AuthConfig) -> Self {
        let authenticated = match storage.get(&config.session_key) {
            Ok(value) => value.as_deref() == Some(FLAG_VALUE),
            Err(e) => {
                warn!(error = %e, "Could not read session flag");
                false
            }
        };
        info!(authenticated, "Session initialised");
        Self {
            storage,
            key: config.session_key.clone(),
            credentials: Credentials::from(config),
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sign in. Any mismatch reports the same generic error.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if !self.credentials.matches(email, password) {
            warn!("Login rejected");
            return Err(Error::InvalidCredentials);
        }
        self.storage.set(&self.key, FLAG_VALUE)?;
        self.authenticated = true;
        info!("Logged in");
        Ok(())
    }

    /// Sign out and clear the persisted flag.
    pub fn teardown(&mut self) {
        self.storage.remove(&self.key);
        self.authenticated = false;
        info!("Logged out");
    }

    /// Route guard bound to this session.
    pub fn guard(&self, route: &Route) -> GuardDecision {
        guard(self.authenticated, route)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn test_init_reads_flag() {
        let storage = MemoryStorage::new();
        assert!(!Session::init(storage.clone(), &config()).is_authenticated());

        storage.set("isLoggedIn", "true").unwrap();
        assert!(Session::init(storage.clone(), &config()).is_authenticated());

        storage.set("isLoggedIn", "false").unwrap();
        assert!(!Session::init(storage, &config()).is_authenticated());
    }

    #[test]
    fn test_login_success_sets_flag() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(storage.clone(), &config());
        session
            .login("onlyteshcodes@gmail.com", "password@1.")
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(storage.get("isLoggedIn").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(storage.clone(), &config());
        let err = session
            .login("OnlyTeshCodes@gmail.com", "password@1.")
            .unwrap_err();
        assert_eq!(err, Error::InvalidCredentials);
        assert!(!session.is_authenticated());
        assert_eq!(storage.get("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn test_teardown_clears_flag() {
        let storage = MemoryStorage::new();
        storage.set("isLoggedIn", "true").unwrap();
        let mut session = Session::init(storage.clone(), &config());
        session.teardown();
        assert!(!session.is_authenticated());
        assert_eq!(storage.get("isLoggedIn").unwrap(), None);
        assert_eq!(
            session.guard(&Route::Users),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_custom_session_key() {
        let storage = MemoryStorage::new();
        let config = AuthConfig {
            session_key: "desk.session".into(),
            ..AuthConfig::default()
        };
        let mut session = Session::init(storage.clone(), &config);
        session.login(&config.email, &config.password).unwrap();
        assert!(storage.get("desk.session").unwrap().is_some());
        assert!(storage.get("isLoggedIn").unwrap().is_none());
    }
}
