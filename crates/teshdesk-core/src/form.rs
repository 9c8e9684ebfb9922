//! User Forms - Add and Edit State Machines
//!
//! The add form walks `Editing -> Submitting -> Success`, bouncing back to
//! `Editing` with an invalid-field map when required fields are blank. The edit
//! form tracks a working copy against the loaded record and only allows a save
//! while the two differ.
//!
//! Neither form talks to the network. Callers decide whether a successful
//! submit or save is also sent to the remote source.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{AccountStatus, Permission, PersonName, UserRecord, PLACEHOLDER};

// =============================================================================
// Fields
// =============================================================================

/// Inputs on the add/edit user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Username,
    Phone,
    Department,
    Permission,
}

impl UserField {
    /// Every field, in form order.
    pub const ALL: [UserField; 7] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::Username,
        UserField::Phone,
        UserField::Department,
        UserField::Permission,
    ];

    /// Fields that must be non-blank to submit the add form.
    pub const REQUIRED: [UserField; 5] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::Department,
        UserField::Permission,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Phone => "Phone Number",
            Self::Department => "Department",
            Self::Permission => "Permission",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter first name",
            Self::LastName => "Enter last name",
            Self::Email => "Enter email address",
            Self::Username => "Enter username",
            Self::Phone => "Enter phone number",
            Self::Department => "Select department",
            Self::Permission => "Select permission",
        }
    }

    /// Stable key for DOM ids and form names.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Username => "username",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Permission => "permission",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Select options for this field, or `None` for free-text inputs.
    pub fn options(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::Department => Some(DEPARTMENT_OPTIONS),
            Self::Permission => Some(PERMISSION_OPTIONS),
            _ => None,
        }
    }
}

/// `(value, label)` pairs for the department select.
pub const DEPARTMENT_OPTIONS: &[(&str, &str)] = &[
    ("engineering", "Engineering"),
    ("marketing", "Marketing"),
    ("hr", "Human Resources"),
    ("finance", "Finance"),
    ("sales", "Sales"),
    ("operations", "Operations"),
    ("it", "IT Support"),
];

/// `(value, label)` pairs for the permission select.
pub const PERMISSION_OPTIONS: &[(&str, &str)] = &[
    ("user", "User"),
    ("admin", "Admin"),
    ("superadmin", "Super Admin"),
];

fn option_label(options: &'static [(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    options.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}

// =============================================================================
// Draft
// =============================================================================

/// Field values as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDraft(BTreeMap<UserField, String>);

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`; empty when never set.
    pub fn get(&self, field: UserField) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_required(&self) -> Vec<UserField> {
        UserField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.get(UserField::FirstName).trim(),
            self.get(UserField::LastName).trim()
        )
        .trim()
        .to_string()
    }

    /// Seed a draft from an existing record.
    ///
    /// Unknown permissions leave the select empty rather than guessing.
    pub fn from_record(record: &UserRecord) -> Self {
        let mut draft = Self::new();
        draft.set(UserField::FirstName, record.first_name().unwrap_or_default());
        draft.set(UserField::LastName, record.last_name().unwrap_or_default());
        draft.set(UserField::Email, record.email.clone().unwrap_or_default());
        let permission = Permission::from_label(record.permission())
            .map(Permission::form_value)
            .filter(|v| PERMISSION_OPTIONS.iter().any(|(o, _)| o == v))
            .unwrap_or_default();
        draft.set(UserField::Permission, permission);
        draft
    }
}

/// Read-only summary shown after a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub full_name: String,
    pub email: String,
    pub permission: String,
}

impl UserSummary {
    pub fn from_draft(draft: &UserDraft) -> Self {
        let or_placeholder = |s: String| {
            if s.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                s
            }
        };
        let permission = draft.get(UserField::Permission);
        let permission = option_label(PERMISSION_OPTIONS, permission)
            .map_or_else(|| permission.trim().to_string(), str::to_string);

        Self {
            full_name: or_placeholder(draft.full_name()),
            email: or_placeholder(draft.get(UserField::Email).trim().to_string()),
            permission: or_placeholder(permission),
        }
    }
}

// =============================================================================
// Add Form
// =============================================================================

/// Phase of the add-user form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Success(UserSummary),
}

/// Add-user form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddUserForm {
    draft: UserDraft,
    invalid: BTreeSet<UserField>,
    phase: FormPhase,
    alert: bool,
}

impl AddUserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn value(&self, field: UserField) -> &str {
        self.draft.get(field)
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_invalid(&self, field: UserField) -> bool {
        self.invalid.contains(&field)
    }

    /// Fields currently flagged invalid, in form order.
    pub fn invalid_fields(&self) -> Vec<UserField> {
        self.invalid.iter().copied().collect()
    }

    /// Whether the "fill in all required fields" banner is showing.
    pub fn show_alert(&self) -> bool {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = false;
    }

    /// Update a field; a non-blank value clears its invalid flag.
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.invalid.remove(&field);
        }
        self.draft.set(field, value);
    }

    /// Validate and enter `Submitting`.
    ///
    /// On failure the form stays in `Editing` with exactly the blank required
    /// fields flagged and the alert shown; typed values are kept.
    pub fn begin_submit(&mut self) -> Result<()> {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            debug!(missing = missing.len(), "Add user rejected");
            self.invalid = missing.iter().copied().collect();
            self.alert = true;
            self.phase = FormPhase::Editing;
            return Err(Error::Validation { fields: missing });
        }
        self.invalid.clear();
        self.alert = false;
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Finish a submit started with [`begin_submit`](Self::begin_submit).
    pub fn complete_submit(&mut self) -> UserSummary {
        let summary = UserSummary::from_draft(&self.draft);
        debug!(name = %summary.full_name, "Add user succeeded");
        self.phase = FormPhase::Success(summary.clone());
        summary
    }

    /// Return to `Editing` after a failed remote write.
    pub fn fail_submit(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Validate and complete in one step.
    pub fn submit(&mut self) -> Result<UserSummary> {
        self.begin_submit()?;
        Ok(self.complete_submit())
    }

    /// "Add another": back to a blank form.
    pub fn add_another(&mut self) {
        *self = Self::new();
    }

    /// "Finish": reset before returning to the list.
    pub fn finish(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// Edit Form
// =============================================================================

/// Phase of the edit-user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Editing,
    Saving,
    Saved,
}

/// Partial record sent on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: UpdateName,
    pub email: String,
    pub permission: String,
    pub status: String,
    /// Contact fields the listing does not carry; sent only when filled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Name portion of a [`UserUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateName {
    pub first: String,
    pub last: String,
}

impl UserUpdate {
    /// Write these values onto the in-memory record.
    ///
    /// Contact fields are not part of [`UserRecord`] and are skipped.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.name = Some(PersonName {
            first: Some(self.name.first.clone()),
            last: Some(self.name.last.clone()),
        });
        record.email = (!self.email.is_empty()).then(|| self.email.clone());
        record.permission = Some(self.permission.clone());
        record.status = Some(self.status.clone());
    }
}

/// Edit-user form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUserForm {
    user_id: String,
    original: UserDraft,
    working: UserDraft,
    original_active: bool,
    active: bool,
    /// Labels as loaded; written back while the matching input is untouched.
    original_status: String,
    original_permission: String,
    phase: EditPhase,
    error: Option<String>,
}

impl EditUserForm {
    /// Seed from a record. The toggle is on unless the record is inactive.
    pub fn from_record(record: &UserRecord) -> Self {
        let draft = UserDraft::from_record(record);
        let active = record.status() != AccountStatus::Inactive.label();
        Self {
            user_id: record.id.clone(),
            original: draft.clone(),
            working: draft,
            original_active: active,
            active,
            original_status: record.status().to_string(),
            original_permission: record.permission().to_string(),
            phase: EditPhase::Editing,
            error: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn value(&self, field: UserField) -> &str {
        self.working.get(field)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        self.working.set(field, value);
        self.after_edit();
    }

    pub fn toggle_status(&mut self) {
        self.active = !self.active;
        self.after_edit();
    }

    fn after_edit(&mut self) {
        if self.phase == EditPhase::Saved {
            self.phase = EditPhase::Editing;
        }
    }

    /// Whether the working copy differs from the loaded values.
    pub fn is_dirty(&self) -> bool {
        self.active != self.original_active
            || UserField::ALL
                .into_iter()
                .any(|f| self.working.get(f) != self.original.get(f))
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && self.phase != EditPhase::Saving
    }

    /// Enter `Saving` and produce the update body. `None` when nothing changed.
    pub fn begin_save(&mut self) -> Option<UserUpdate> {
        if !self.can_save() {
            return None;
        }
        self.phase = EditPhase::Saving;
        self.error = None;

        Some(UserUpdate {
            name: UpdateName {
                first: self.working.get(UserField::FirstName).trim().to_string(),
                last: self.working.get(UserField::LastName).trim().to_string(),
            },
            email: self.working.get(UserField::Email).trim().to_string(),
            permission: self.permission_label(),
            status: self.status_label(),
            username: self.filled(UserField::Username),
            phone: self.filled(UserField::Phone),
            department: self.filled(UserField::Department),
        })
    }

    fn permission_label(&self) -> String {
        let value = self.working.get(UserField::Permission);
        if value == self.original.get(UserField::Permission) {
            return self.original_permission.clone();
        }
        Permission::from_form_value(value).map_or_else(|| value.to_string(), |p| p.label().to_string())
    }

    fn status_label(&self) -> String {
        if self.active == self.original_active {
            return self.original_status.clone();
        }
        let status = if self.active {
            AccountStatus::Active
        } else {
            AccountStatus::Inactive
        };
        status.label().to_string()
    }

    fn filled(&self, field: UserField) -> Option<String> {
        let value = self.working.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Rebase onto the saved values; the form is clean afterwards.
    pub fn complete_save(&mut self) {
        self.original_permission = self.permission_label();
        self.original_status = self.status_label();
        self.original = self.working.clone();
        self.original_active = self.active;
        self.phase = EditPhase::Saved;
        debug!(user_id = %self.user_id, "User saved");
    }

    /// Back to `Editing` with a recoverable error; edits are kept.
    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = EditPhase::Editing;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AddUserForm {
        let mut form = AddUserForm::new();
        form.set_field(UserField::FirstName, "Ada");
        form.set_field(UserField::LastName, "Lovelace");
        form.set_field(UserField::Email, "ada@example.com");
        form.set_field(UserField::Department, "engineering");
        form.set_field(UserField::Permission, "superadmin");
        form
    }

    #[test]
    fn test_empty_submit_flags_required_fields() {
        let mut form = AddUserForm::new();
        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            Error::Validation {
                fields: UserField::REQUIRED.to_vec()
            }
        );
        assert_eq!(form.invalid_fields(), UserField::REQUIRED.to_vec());
        assert!(!form.is_invalid(UserField::Username));
        assert!(!form.is_invalid(UserField::Phone));
        assert!(form.show_alert());
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.set_field(UserField::Email, "   ");
        assert!(form.submit().is_err());
        assert_eq!(form.invalid_fields(), vec![UserField::Email]);
    }

    #[test]
    fn test_typing_clears_invalid_flag() {
        let mut form = AddUserForm::new();
        let _ = form.submit();
        form.set_field(UserField::FirstName, "A");
        assert!(!form.is_invalid(UserField::FirstName));
        assert!(form.is_invalid(UserField::LastName));
        form.set_field(UserField::LastName, "");
        assert!(form.is_invalid(UserField::LastName));
    }

    #[test]
    fn test_rejection_keeps_values() {
        let mut form = AddUserForm::new();
        form.set_field(UserField::Username, "ada");
        let _ = form.submit();
        assert_eq!(form.value(UserField::Username), "ada");
    }

    #[test]
    fn test_successful_submit_summary() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.phase(), &FormPhase::Submitting);
        let summary = form.complete_submit();
        assert_eq!(summary.full_name, "Ada Lovelace");
        assert_eq!(summary.email, "ada@example.com");
        assert_eq!(summary.permission, "Super Admin");
        assert!(matches!(form.phase(), FormPhase::Success(_)));

        form.add_another();
        assert_eq!(form, AddUserForm::new());
    }

    #[test]
    fn test_dismiss_alert() {
        let mut form = AddUserForm::new();
        let _ = form.submit();
        form.dismiss_alert();
        assert!(!form.show_alert());
        assert!(form.is_invalid(UserField::Email));
    }

    #[test]
    fn test_summary_placeholders() {
        let summary = UserSummary::from_draft(&UserDraft::new());
        assert_eq!(summary.full_name, "N/A");
        assert_eq!(summary.email, "N/A");
        assert_eq!(summary.permission, "N/A");
    }

    #[test]
    fn test_edit_seeded_from_record() {
        let record = UserRecord::new("7")
            .with_name("Grace", "Hopper")
            .with_email("g@h.io")
            .with_permission("Admin");
        let form = EditUserForm::from_record(&record);
        assert_eq!(form.value(UserField::FirstName), "Grace");
        assert_eq!(form.value(UserField::Permission), "admin");
        assert!(form.is_active());
        assert!(!form.is_dirty());
        assert!(!form.can_save());
    }

    #[test]
    fn test_edit_dirty_and_rebase() {
        let record = UserRecord::new("7").with_name("Grace", "Hopper");
        let mut form = EditUserForm::from_record(&record);

        form.set_field(UserField::LastName, "Murray");
        assert!(form.is_dirty());

        let update = form.begin_save().unwrap();
        assert_eq!(form.phase(), EditPhase::Saving);
        assert!(!form.can_save());
        assert_eq!(update.name.last, "Murray");
        assert_eq!(update.status, "Active");

        form.complete_save();
        assert_eq!(form.phase(), EditPhase::Saved);
        assert!(!form.is_dirty());
        assert!(form.begin_save().is_none());
    }

    #[test]
    fn test_edit_revert_is_clean() {
        let record = UserRecord::new("7").with_name("Grace", "Hopper");
        let mut form = EditUserForm::from_record(&record);
        form.toggle_status();
        assert!(form.is_dirty());
        form.toggle_status();
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_edit_failure_keeps_edits() {
        let mut form = EditUserForm::from_record(&UserRecord::new("7"));
        form.toggle_status();
        let update = form.begin_save().unwrap();
        assert_eq!(update.status, "Inactive");
        form.fail_save("HTTP 500: boom");
        assert_eq!(form.error(), Some("HTTP 500: boom"));
        assert_eq!(form.phase(), EditPhase::Editing);
        assert!(form.is_dirty());
    }

    #[test]
    fn test_edit_keeps_untouched_status_and_permission() {
        let record = UserRecord::new("a")
            .with_name("Alan", "Turing")
            .with_status("Inactive")
            .with_permission("Uncategorised");
        let mut form = EditUserForm::from_record(&record);
        assert!(!form.is_active());
        assert_eq!(form.value(UserField::Permission), "");

        form.set_field(UserField::FirstName, "Al");
        let update = form.begin_save().unwrap();
        assert_eq!(update.status, "Inactive");
        assert_eq!(update.permission, "Uncategorised");
    }

    #[test]
    fn test_edit_keeps_unlisted_status_label() {
        let record = UserRecord::new("p").with_status("Pending");
        let mut form = EditUserForm::from_record(&record);
        assert!(form.is_active());
        form.set_field(UserField::Email, "p@x.io");
        let update = form.begin_save().unwrap();
        assert_eq!(update.status, "Pending");
        assert_eq!(update.permission, "User");

        form.complete_save();
        form.toggle_status();
        assert_eq!(form.begin_save().unwrap().status, "Inactive");
    }

    #[test]
    fn test_edit_contact_fields_sent_when_filled() {
        let mut form = EditUserForm::from_record(&UserRecord::new("7"));
        form.set_field(UserField::Phone, " +2348012345678 ");
        form.set_field(UserField::Department, "finance");
        let update = form.begin_save().unwrap();
        assert_eq!(update.phone.as_deref(), Some("+2348012345678"));
        assert_eq!(update.department.as_deref(), Some("finance"));
        assert_eq!(update.username, None);
    }

    #[test]
    fn test_update_applies_to_record() {
        let mut record = UserRecord::new("7").with_country("Peru");
        let update = UserUpdate {
            name: UpdateName {
                first: "A".into(),
                last: "B".into(),
            },
            email: "a@b.c".into(),
            permission: "Admin".into(),
            status: "Inactive".into(),
            username: None,
            phone: None,
            department: None,
        };
        update.apply_to(&mut record);
        assert_eq!(record.full_name(), "A B");
        assert_eq!(record.status(), "Inactive");
        assert_eq!(record.display_country(), "Peru");
    }
}
