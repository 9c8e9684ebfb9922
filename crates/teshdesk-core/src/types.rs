//! Data types for TeshDesk
//!
//! These types mirror the records served by the remote user API. Every
//! attribute except the identifier is optional; rendering falls back to
//! [`PLACEHOLDER`] or to the documented defaults.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Text shown in place of an absent attribute.
pub const PLACEHOLDER: &str = "N/A";

// =============================================================================
// Permission & Status
// =============================================================================

/// Role assigned to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Permission {
    /// Regular account.
    #[default]
    User,
    /// Administrator.
    Admin,
    /// Administrator with full control.
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    /// No role assigned yet.
    Uncategorised,
}

impl Permission {
    /// Every permission, in menu order.
    pub const ALL: [Permission; 4] = [
        Permission::User,
        Permission::Admin,
        Permission::SuperAdmin,
        Permission::Uncategorised,
    ];

    /// Label as stored on records and shown in menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
            Self::Uncategorised => "Uncategorised",
        }
    }

    /// Parse a record/menu label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Option value used by the add/edit form select.
    pub fn form_value(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
            Self::Uncategorised => "uncategorised",
        }
    }

    /// Parse a form option value.
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.form_value() == value)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Account status of a user record.
///
/// Records carry status as free text; these are the values the console
/// offers in its filter and bulk-action menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Account in use.
    #[default]
    Active,
    /// Account disabled.
    Inactive,
    /// Account awaiting activation.
    Pending,
}

impl AccountStatus {
    /// Every status, in filter-menu order.
    pub const ALL: [AccountStatus; 3] = [
        AccountStatus::Active,
        AccountStatus::Inactive,
        AccountStatus::Pending,
    ];

    /// Statuses offered by the "Change Status" bulk action.
    pub const BULK_CHOICES: [AccountStatus; 2] = [AccountStatus::Active, AccountStatus::Inactive];

    /// Label as stored on records.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    /// Parse a record label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Badge CSS class for a raw status string.
    pub fn badge_class(label: &str) -> &'static str {
        match Self::from_label(label) {
            Some(Self::Active) => "badge-success",
            Some(Self::Pending) => "badge-warning",
            _ => "badge-error",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// User Record
// =============================================================================

/// Given and family name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Where the user lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Registration metadata. The date is kept as sent and parsed on demand so a
/// bad timestamp never drops the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One user entity as returned by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUser")]
pub struct UserRecord {
    /// Opaque identifier, unique within a fetched collection.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<Registration>,
}

impl UserRecord {
    /// Create a record with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            location: None,
            status: None,
            permission: None,
            registered: None,
        }
    }

    /// Set given and family name.
    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.name = Some(PersonName {
            first: Some(first.into()),
            last: Some(last.into()),
        });
        self
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the raw status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the raw permission label.
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.location = Some(Location {
            country: Some(country.into()),
        });
        self
    }

    /// Set the raw registration timestamp.
    #[must_use]
    pub fn with_registered(mut self, date: impl Into<String>) -> Self {
        self.registered = Some(Registration {
            date: Some(date.into()),
        });
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.first.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.last.as_deref())
    }

    /// "First Last", skipping absent parts. Empty when both are absent.
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Full name, or the placeholder.
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            name
        }
    }

    /// Email, or the placeholder.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or(PLACEHOLDER)
    }

    /// Country, or the placeholder.
    pub fn display_country(&self) -> &str {
        self.location
            .as_ref()
            .and_then(|l| l.country.as_deref())
            .filter(|c| !c.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Status label; "Active" when absent.
    pub fn status(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(AccountStatus::default().label())
    }

    /// Permission label; "User" when absent.
    pub fn permission(&self) -> &str {
        self.permission
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(Permission::default().label())
    }

    /// Registration day, accepting RFC 3339 timestamps or plain dates.
    pub fn registered_on(&self) -> Option<NaiveDate> {
        let raw = self.registered.as_ref()?.date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Registration day formatted for display, or the placeholder.
    pub fn display_registered(&self) -> String {
        self.registered_on()
            .map_or_else(|| PLACEHOLDER.to_string(), |d| d.format("%-m/%-d/%Y").to_string())
    }
}

// =============================================================================
// Wire Decoding
// =============================================================================

/// Identifier as sent by the API: some deployments use strings, others numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawUser {
    #[serde(rename = "_id", default)]
    underscore_id: Option<RawId>,
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    name: Option<PersonName>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    permission: Option<String>,
    #[serde(default)]
    registered: Option<Registration>,
}

impl TryFrom<RawUser> for UserRecord {
    type Error = String;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        let id = raw
            .underscore_id
            .or(raw.id)
            .map(RawId::into_string)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| "user record has no identifier".to_string())?;

        Ok(Self {
            id,
            name: raw.name,
            email: raw.email,
            location: raw.location,
            status: raw.status,
            permission: raw.permission,
            registered: raw.registered,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
