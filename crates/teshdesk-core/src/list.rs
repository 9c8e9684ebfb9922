//! User List View-Model
//!
//! Shared by the desktop table and the mobile list. It owns the fetched
//! collection together with filter, pagination, selection and bulk-menu state,
//! and derives the visible page on every read. Layouts only differ in how they
//! render a [`PageView`].
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use tracing::{debug, info};

use crate::bulk::{BulkAction, BulkActionMenu, BulkMenu};
use crate::filter::{filter_records, Criterion, FilterState};
use crate::form::UserUpdate;
use crate::pagination::{PageSize, Pagination};
use crate::selection::{CheckState, SelectionSet};
use crate::types::UserRecord;

/// Lifecycle of the collection fetch for one view mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Terminal for this mount; carries the message to show.
    Failed(String),
}

/// Rows and footer data for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<UserRecord>,
    pub range_start: usize,
    pub range_end: usize,
    pub total: usize,
    pub label: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

/// State behind the user management page.
#[derive(Debug, Clone, Default)]
pub struct UserListModel {
    records: Vec<UserRecord>,
    fetch: FetchState,
    filter: FilterState,
    pagination: Pagination,
    selection: SelectionSet,
    bulk: BulkActionMenu,
    expanded: Option<String>,
    pending_delete: Option<String>,
}

impl UserListModel {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Fetch
    // -------------------------------------------------------------------------

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    /// Enter `Loading`. Returns `false` when a fetch is already in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.fetch = FetchState::Loading;
        true
    }

    /// Settle the in-flight fetch.
    pub fn finish_fetch(&mut self, result: Result<Vec<UserRecord>, String>) {
        match result {
            Ok(records) => {
                info!(count = records.len(), "Users loaded");
                self.set_records(records);
                self.fetch = FetchState::Ready;
            }
            Err(message) => {
                self.fetch = FetchState::Failed(message);
            }
        }
    }

    /// Replace the collection, dropping selection of vanished ids.
    pub fn set_records(&mut self, records: Vec<UserRecord>) {
        self.records = records;
        let records = &self.records;
        self.selection
            .retain(|id| records.iter().any(|r| r.id == id));
        let expanded_gone = self
            .expanded
            .as_ref()
            .is_some_and(|id| !records.iter().any(|r| &r.id == id));
        if expanded_gone {
            self.expanded = None;
        }
        self.clamp_page();
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    // -------------------------------------------------------------------------
    // Filter & Pagination
    // -------------------------------------------------------------------------

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.pagination.reset();
    }

    pub fn set_status_filter(&mut self, criterion: Criterion) {
        self.filter.status = criterion;
        self.pagination.reset();
    }

    pub fn set_permission_filter(&mut self, criterion: Criterion) {
        self.filter.permission = criterion;
        self.pagination.reset();
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.pagination.set_page_size(size);
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.filtered().len();
        self.pagination.next(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    fn clamp_page(&mut self) {
        let total = self.filtered().len();
        self.pagination.clamp(total);
    }

    /// Records passing the current filter, in fetch order.
    pub fn filtered(&self) -> Vec<&UserRecord> {
        filter_records(&self.records, &self.filter)
    }

    /// The visible page.
    pub fn page(&self) -> PageView {
        let filtered = self.filtered();
        let window = self.pagination.window(&filtered);
        let label = window.label();
        PageView {
            rows: window.items.into_iter().cloned().collect(),
            range_start: window.range_start,
            range_end: window.range_end,
            total: window.total,
            label,
            has_prev: self.pagination.has_prev(),
            has_next: self.pagination.has_next(filtered.len()),
        }
    }

    /// Ids of the rows on the visible page.
    pub fn visible_ids(&self) -> Vec<String> {
        self.page().rows.into_iter().map(|r| r.id).collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn toggle_selected(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn header_state(&self) -> CheckState {
        let visible = self.visible_ids();
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        self.selection.header_state(&visible)
    }

    pub fn toggle_select_all_visible(&mut self) {
        let visible = self.visible_ids();
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        self.selection.toggle_all_visible(&visible);
    }

    // -------------------------------------------------------------------------
    // Bulk actions
    // -------------------------------------------------------------------------

    pub fn toggle_bulk(&mut self, action: BulkAction) {
        self.bulk.toggle(action);
    }

    pub fn staged(&self, menu: BulkMenu) -> Option<BulkAction> {
        self.bulk.staged(menu)
    }

    pub fn is_staged(&self, action: BulkAction) -> bool {
        self.bulk.is_staged(action)
    }

    /// Apply the action staged in `menu` to the current selection.
    ///
    /// Returns the action and how many records it touched, or `None` when
    /// nothing was staged.
    pub fn apply_bulk(&mut self, menu: BulkMenu) -> Option<(BulkAction, usize)> {
        let action = self.bulk.take(menu)?;
        let count = action.apply(&mut self.records, &mut self.selection);
        debug!(action = ?action, count, "Bulk action applied");
        if action == BulkAction::DeleteAll {
            self.expanded = None;
        }
        self.clamp_page();
        Some((action, count))
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Expand `id`, collapsing any other row; collapse it if already open.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Open the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: &str) {
        if self.record(id).is_some() {
            self.pending_delete = Some(id.to_string());
        }
    }

    /// Record awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&UserRecord> {
        self.pending_delete.as_deref().and_then(|id| self.record(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Remove the pending record locally and return it.
    pub fn confirm_delete(&mut self) -> Option<UserRecord> {
        let id = self.pending_delete.take()?;
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        self.selection.remove(&id);
        if self.is_expanded(&id) {
            self.expanded = None;
        }
        self.clamp_page();
        debug!(user_id = %id, "User removed");
        Some(removed)
    }

    /// Write a saved edit back onto the in-memory record.
    pub fn apply_update(&mut self, id: &str, update: &UserUpdate) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                update.apply_to(record);
                self.clamp_page();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Permission;

    fn model(n: usize) -> UserListModel {
        let mut m = UserListModel::new(PageSize::Ten);
        m.set_records(
            (1..=n)
                .map(|i| UserRecord::new(format!("u{i}")).with_email(format!("u{i}@x.io")))
                .collect(),
        );
        m
    }

    #[test]
    fn test_fetch_is_single_flight() {
        let mut m = UserListModel::default();
        assert!(m.begin_fetch());
        assert!(!m.begin_fetch());
        m.finish_fetch(Ok(vec![UserRecord::new("a")]));
        assert_eq!(m.fetch_state(), &FetchState::Ready);
        assert_eq!(m.records().len(), 1);
    }

    #[test]
    fn test_fetch_failure_is_terminal_state() {
        let mut m = UserListModel::default();
        m.begin_fetch();
        m.finish_fetch(Err("Network error: offline".into()));
        assert_eq!(
            m.fetch_state(),
            &FetchState::Failed("Network error: offline".into())
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut m = model(30);
        assert!(m.next_page());
        m.set_search("u1");
        assert_eq!(m.pagination().page_index, 0);

        m.next_page();
        m.set_status_filter(Criterion::All);
        assert_eq!(m.pagination().page_index, 0);
    }

    #[test]
    fn test_page_view() {
        let mut m = model(25);
        m.next_page();
        m.next_page();
        let page = m.page();
        assert_eq!(page.label, "21–25 of 25");
        assert!(page.has_prev);
        assert!(!page.has_next);
        assert!(!m.next_page());
    }

    #[test]
    fn test_refresh_shrink_clamps_and_prunes() {
        let mut m = model(25);
        m.next_page();
        m.next_page();
        m.toggle_selected("u22");
        m.toggle_selected("u1");
        m.set_records((1..=5).map(|i| UserRecord::new(format!("u{i}"))).collect());
        assert_eq!(m.pagination().page_index, 0);
        assert!(m.is_selected("u1"));
        assert!(!m.is_selected("u22"));
    }

    #[test]
    fn test_selection_persists_across_pages() {
        let mut m = model(20);
        m.toggle_select_all_visible();
        assert_eq!(m.header_state(), CheckState::Checked);
        m.next_page();
        assert_eq!(m.header_state(), CheckState::Unchecked);
        assert_eq!(m.selection().len(), 10);
        m.toggle_select_all_visible();
        assert!(m.is_selected("u11"));
        assert!(!m.is_selected("u1"));
    }

    #[test]
    fn test_header_counts_visible_rows_only() {
        let mut m = model(20);
        m.toggle_selected("u1");
        m.next_page();
        m.toggle_selected("u11");
        assert_eq!(m.header_state(), CheckState::Indeterminate);

        for i in 12..=20 {
            m.toggle_selected(&format!("u{i}"));
        }
        assert_eq!(m.header_state(), CheckState::Checked);
        assert!(m.is_selected("u1"));

        m.toggle_select_all_visible();
        assert!(m.selection().is_empty());
        assert_eq!(m.header_state(), CheckState::Unchecked);
    }

    #[test]
    fn test_apply_bulk_requires_staging() {
        let mut m = model(3);
        m.toggle_selected("u2");
        assert_eq!(m.apply_bulk(BulkMenu::AssignPermission), None);

        m.toggle_bulk(BulkAction::AssignPermission(Permission::Admin));
        let (_, count) = m.apply_bulk(BulkMenu::AssignPermission).unwrap();
        assert_eq!(count, 1);
        assert_eq!(m.record("u2").unwrap().permission(), "Admin");
        assert_eq!(m.staged(BulkMenu::AssignPermission), None);
    }

    #[test]
    fn test_bulk_delete_clamps_page() {
        let mut m = model(11);
        m.next_page();
        m.toggle_select_all_visible();
        m.toggle_bulk(BulkAction::DeleteAll);
        m.apply_bulk(BulkMenu::DeleteAll);
        assert_eq!(m.records().len(), 10);
        assert_eq!(m.pagination().page_index, 0);
        assert!(m.selection().is_empty());
    }

    #[test]
    fn test_single_expanded_row() {
        let mut m = model(3);
        m.toggle_expanded("u1");
        m.toggle_expanded("u2");
        assert!(!m.is_expanded("u1"));
        assert!(m.is_expanded("u2"));
        m.toggle_expanded("u2");
        assert!(!m.is_expanded("u2"));
    }

    #[test]
    fn test_delete_confirmation() {
        let mut m = model(3);
        m.toggle_selected("u2");
        m.request_delete("u2");
        assert_eq!(m.pending_delete().map(|r| r.id.as_str()), Some("u2"));
        m.cancel_delete();
        assert!(m.pending_delete().is_none());

        m.request_delete("u2");
        let removed = m.confirm_delete().unwrap();
        assert_eq!(removed.id, "u2");
        assert!(m.record("u2").is_none());
        assert!(!m.is_selected("u2"));

        m.request_delete("missing");
        assert!(m.confirm_delete().is_none());
    }
}
