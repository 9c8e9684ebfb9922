//! Selection Tracker
//!
//! Tracks which record identifiers are checked in the list views and derives
//! the tri-state header checkbox from the currently visible rows.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Visual state of the "select all visible" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

/// Set of selected record identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSet(BTreeSet<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &str) {
        if !self.0.remove(id) {
            self.0.insert(id.to_string());
        }
    }

    /// Replace the selection with exactly the visible ids.
    pub fn select_all_visible<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.0 = visible.into_iter().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Keep only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|id| keep(id));
    }

    /// Header checkbox state over the visible ids.
    ///
    /// Selected ids on other pages do not count.
    pub fn header_state(&self, visible: &[&str]) -> CheckState {
        let selected = visible.iter().filter(|id| self.0.contains(**id)).count();
        match selected {
            0 => CheckState::Unchecked,
            n if n == visible.len() => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// Header checkbox click: clear when fully checked, else select the page.
    pub fn toggle_all_visible(&mut self, visible: &[&str]) {
        if self.header_state(visible).is_checked() {
            self.clear();
        } else {
            self.select_all_visible(visible.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut sel = SelectionSet::new();
        sel.toggle("a");
        assert!(sel.contains("a"));
        sel.toggle("a");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_header_states() {
        let visible = ["a", "b", "c"];
        let mut sel = SelectionSet::new();
        assert_eq!(sel.header_state(&visible), CheckState::Unchecked);

        sel.toggle("b");
        assert_eq!(sel.header_state(&visible), CheckState::Indeterminate);

        sel.select_all_visible(visible.iter().copied());
        assert_eq!(sel.header_state(&visible), CheckState::Checked);
    }

    #[test]
    fn test_header_click_cycle() {
        let visible = ["a", "b"];
        let mut sel = SelectionSet::new();
        sel.toggle("a");
        sel.toggle_all_visible(&visible);
        assert_eq!(sel.len(), 2);
        sel.toggle_all_visible(&visible);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_off_page_selection_is_ignored() {
        let mut sel = SelectionSet::new();
        sel.select_all_visible(["x", "y"]);
        assert_eq!(sel.header_state(&["a", "b"]), CheckState::Unchecked);
        assert_eq!(sel.header_state(&[]), CheckState::Unchecked);

        sel.toggle("a");
        assert_eq!(sel.header_state(&["a", "b"]), CheckState::Indeterminate);

        sel.toggle("b");
        assert_eq!(sel.header_state(&["a", "b"]), CheckState::Checked);
    }

    #[test]
    fn test_select_all_replaces() {
        let mut sel = SelectionSet::new();
        sel.toggle("old");
        sel.select_all_visible(["a"]);
        assert!(!sel.contains("old"));
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_retain() {
        let mut sel = SelectionSet::new();
        sel.select_all_visible(["a", "b", "c"]);
        sel.retain(|id| id != "b");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
