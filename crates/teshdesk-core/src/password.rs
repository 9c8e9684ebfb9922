//! Password strength meter for the reset-password page.

use serde::{Deserialize, Serialize};

/// Strength bucket shown under the new-password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Rate a candidate password.
    ///
    /// Strong: at least 8 characters with upper case, lower case, a digit and
    /// a symbol. Medium: at least 6 characters with a letter and a digit.
    pub fn rate(password: &str) -> Self {
        let len = password.chars().count();
        let upper = password.chars().any(char::is_uppercase);
        let lower = password.chars().any(char::is_lowercase);
        let digit = password.chars().any(|c| c.is_ascii_digit());
        let symbol = password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

        if len >= 8 && upper && lower && digit && symbol {
            Self::Strong
        } else if len >= 6 && (upper || lower) && digit {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }
}
