//! Bulk Actions
//!
//! Actions applied to every selected record at once. Permission and status
//! changes are presentation-only; delete removes the records from the local
//! collection and clears their identifiers from the selection.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use serde::{Deserialize, Serialize};

use crate::selection::SelectionSet;
use crate::types::{AccountStatus, Permission, UserRecord};

/// A fully chosen bulk action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum BulkAction {
    /// Set the permission of every selected record.
    AssignPermission(Permission),
    /// Set the status of every selected record.
    ChangeStatus(AccountStatus),
    /// Remove every selected record.
    DeleteAll,
}

impl BulkAction {
    /// Which menu this action belongs to.
    pub fn menu(self) -> BulkMenu {
        match self {
            Self::AssignPermission(_) => BulkMenu::AssignPermission,
            Self::ChangeStatus(_) => BulkMenu::ChangeStatus,
            Self::DeleteAll => BulkMenu::DeleteAll,
        }
    }

    /// Label of the chosen item inside its menu.
    pub fn choice_label(self) -> &'static str {
        match self {
            Self::AssignPermission(p) => p.label(),
            Self::ChangeStatus(s) => s.label(),
            Self::DeleteAll => "Delete All",
        }
    }

    /// Human-readable summary for toasts.
    pub fn describe(self, count: usize) -> String {
        let noun = if count == 1 { "user" } else { "users" };
        match self {
            Self::AssignPermission(p) => format!("Assigned {p} to {count} {noun}"),
            Self::ChangeStatus(s) => format!("Marked {count} {noun} as {s}"),
            Self::DeleteAll => format!("Deleted {count} {noun}"),
        }
    }

    /// Apply to exactly the selected records. Returns how many were affected.
    ///
    /// Records outside the selection are left untouched.
    pub fn apply(self, records: &mut Vec<UserRecord>, selection: &mut SelectionSet) -> usize {
        match self {
            Self::AssignPermission(p) => {
                let mut count = 0;
                for record in records.iter_mut().filter(|r| selection.contains(&r.id)) {
                    record.permission = Some(p.label().to_string());
                    count += 1;
                }
                count
            }
            Self::ChangeStatus(s) => {
                let mut count = 0;
                for record in records.iter_mut().filter(|r| selection.contains(&r.id)) {
                    record.status = Some(s.label().to_string());
                    count += 1;
                }
                count
            }
            Self::DeleteAll => {
                let before = records.len();
                records.retain(|r| !selection.contains(&r.id));
                selection.clear();
                before - records.len()
            }
        }
    }
}

/// The three dropdowns in the bulk action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulkMenu {
    AssignPermission,
    ChangeStatus,
    DeleteAll,
}

impl BulkMenu {
    pub const ALL: [BulkMenu; 3] = [
        BulkMenu::AssignPermission,
        BulkMenu::ChangeStatus,
        BulkMenu::DeleteAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AssignPermission => "Assign Permission",
            Self::ChangeStatus => "Change Status",
            Self::DeleteAll => "Delete",
        }
    }

    /// Items offered inside this menu.
    pub fn choices(self) -> Vec<BulkAction> {
        match self {
            Self::AssignPermission => Permission::ALL
                .into_iter()
                .map(BulkAction::AssignPermission)
                .collect(),
            Self::ChangeStatus => AccountStatus::BULK_CHOICES
                .into_iter()
                .map(BulkAction::ChangeStatus)
                .collect(),
            Self::DeleteAll => vec![BulkAction::DeleteAll],
        }
    }
}

/// Staged choices in the bulk action bar, one per menu.
///
/// Clicking a staged item again unstages it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkActionMenu {
    permission: Option<BulkAction>,
    status: Option<BulkAction>,
    delete: Option<BulkAction>,
}

impl BulkActionMenu {
    fn slot(&mut self, menu: BulkMenu) -> &mut Option<BulkAction> {
        match menu {
            BulkMenu::AssignPermission => &mut self.permission,
            BulkMenu::ChangeStatus => &mut self.status,
            BulkMenu::DeleteAll => &mut self.delete,
        }
    }

    /// Stage `action`, or unstage it if it is already staged.
    pub fn toggle(&mut self, action: BulkAction) {
        let slot = self.slot(action.menu());
        if *slot == Some(action) {
            *slot = None;
        } else {
            *slot = Some(action);
        }
    }

    pub fn staged(&self, menu: BulkMenu) -> Option<BulkAction> {
        match menu {
            BulkMenu::AssignPermission => self.permission,
            BulkMenu::ChangeStatus => self.status,
            BulkMenu::DeleteAll => self.delete,
        }
    }

    pub fn is_staged(&self, action: BulkAction) -> bool {
        self.staged(action.menu()) == Some(action)
    }

    /// Remove and return the staged action for `menu`.
    pub fn take(&mut self, menu: BulkMenu) -> Option<BulkAction> {
        self.slot(menu).take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
