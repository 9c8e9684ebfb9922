//! Error Types - TeshDesk Core Error Handling
//!
//! One error enum covers every failure the console can surface: credential
//! mismatches, form validation, transport and decode failures from the user
//! record source, session storage problems and bad configuration. None of them
//! is fatal; each is contained to the view that raised it.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use thiserror::Error;

use crate::form::UserField;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for TeshDesk operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Submitted credentials did not match the configured pair.
    ///
    /// The message never says which of the two fields was wrong.
    #[error("Invalid credentials!")]
    InvalidCredentials,

    /// One or more required form fields were empty.
    #[error("Please fill in all required fields ({} missing)", .fields.len())]
    Validation {
        /// Fields that failed the required check, in form order.
        fields: Vec<UserField>,
    },

    /// The user record source answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// A response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Reading or writing the persisted session flag failed.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Build an HTTP error from a status and message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for TeshDesk operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_generic() {
        let msg = Error::InvalidCredentials.to_string();
        assert_eq!(msg, "Invalid credentials!");
        assert!(!msg.to_lowercase().contains("password"));
        assert!(!msg.to_lowercase().contains("email"));
    }

    #[test]
    fn test_validation_message_counts_fields() {
        let err = Error::Validation {
            fields: vec![UserField::FirstName, UserField::Email],
        };
        assert!(err.to_string().contains("2 missing"));
    }

    #[test]
    fn test_http_status() {
        let err = Error::http(404, "not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: not found");
        assert_eq!(Error::Transport("offline".into()).status(), None);
    }
}
