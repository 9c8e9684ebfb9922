//! Pagination Slicer
//!
//! Cuts a filtered collection into fixed-size pages and reports the visible
//! range. The page index can never point past the last page: [`paginate`]
//! clamps structurally rather than trusting callers.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// Page Size
// =============================================================================

/// Rows per page offered by the footer selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Ten,
    #[default]
    TwentyFive,
    Fifty,
    SeventyFive,
    Hundred,
}

impl PageSize {
    /// Every selectable size, ascending.
    pub const ALL: [PageSize; 5] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::SeventyFive,
        PageSize::Hundred,
    ];

    /// Number of rows.
    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::SeventyFive => 75,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.get() == value)
            .ok_or_else(|| Error::Config(format!("unsupported page size {value}")))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

// =============================================================================
// Page Window
// =============================================================================

/// The slice of items on the current page plus its 1-based range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based index of the first item, or 0 when empty.
    pub range_start: usize,
    /// 1-based index of the last item, or 0 when empty.
    pub range_end: usize,
    /// Size of the whole filtered collection.
    pub total: usize,
}

impl<T> PageWindow<T> {
    /// Range label such as "26–50 of 50", or "0 of 0" when empty.
    pub fn label(&self) -> String {
        if self.total == 0 {
            "0 of 0".to_string()
        } else {
            format!("{}–{} of {}", self.range_start, self.range_end, self.total)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `items` for page `page_index`, clamping the index to the last page.
pub fn paginate<T: Clone>(items: &[T], page_index: usize, page_size: usize) -> PageWindow<T> {
    let size = page_size.max(1);
    let total = items.len();
    if total == 0 {
        return PageWindow {
            items: Vec::new(),
            range_start: 0,
            range_end: 0,
            total: 0,
        };
    }
    let last = (total - 1) / size;
    let index = page_index.min(last);
    let start = index * size;
    let end = (start + size).min(total);
    PageWindow {
        items: items[start..end].to_vec(),
        range_start: start + 1,
        range_end: end,
        total,
    }
}

// =============================================================================
// Pagination State
// =============================================================================

/// Current page size and zero-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub page_size: PageSize,
    pub page_index: usize,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_index: 0,
        }
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Whether another page follows for `total` items.
    pub fn has_next(&self, total: usize) -> bool {
        (self.page_index + 1) * self.page_size.get() < total
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Advance one page. Returns `false` (and stays put) on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        if self.has_next(total) {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Index of the last valid page for `total` items.
    pub fn last_index(&self, total: usize) -> usize {
        total.saturating_sub(1) / self.page_size.get()
    }

    /// Pull the index back inside `total` items.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.page_index.min(self.last_index(total));
    }

    /// Window for the current page over `items`.
    pub fn window<T: Clone>(&self, items: &[T]) -> PageWindow<T> {
        paginate(items, self.page_index, self.page_size.get())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_and_second_page() {
        let items = numbers(50);
        let first = paginate(&items, 0, 25);
        assert_eq!(first.items.len(), 25);
        assert_eq!(first.label(), "1–25 of 50");

        let second = paginate(&items, 1, 25);
        assert_eq!(second.items.first(), Some(&26));
        assert_eq!(second.label(), "26–50 of 50");
    }

    #[test]
    fn test_partial_last_page() {
        let items = numbers(12);
        let window = paginate(&items, 1, 10);
        assert_eq!(window.items, vec![11, 12]);
        assert_eq!(window.label(), "11–12 of 12");
    }

    #[test]
    fn test_empty_collection() {
        let window = paginate::<usize>(&[], 3, 25);
        assert!(window.is_empty());
        assert_eq!(window.range_start, 0);
        assert_eq!(window.range_end, 0);
        assert_eq!(window.label(), "0 of 0");
    }

    #[test]
    fn test_index_past_end_is_clamped() {
        let items = numbers(30);
        let window = paginate(&items, 9, 25);
        assert_eq!(window.label(), "26–30 of 30");
    }

    #[test]
    fn test_next_and_prev_bounds() {
        let mut p = Pagination::new(PageSize::TwentyFive);
        assert!(!p.has_prev());
        assert!(!p.prev());
        assert!(p.next(50));
        assert_eq!(p.page_index, 1);
        assert!(!p.has_next(50));
        assert!(!p.next(50));
        assert_eq!(p.page_index, 1);
        assert!(p.prev());
        assert_eq!(p.page_index, 0);
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut p = Pagination::new(PageSize::Ten);
        p.next(100);
        p.next(100);
        p.set_page_size(PageSize::Fifty);
        assert_eq!(p.page_index, 0);
        assert_eq!(p.page_size.get(), 50);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(PageSize::Ten);
        p.page_index = 4;
        p.clamp(15);
        assert_eq!(p.page_index, 1);
        p.clamp(0);
        assert_eq!(p.page_index, 0);
    }

    #[test]
    fn test_page_size_conversions() {
        assert_eq!(PageSize::try_from(75), Ok(PageSize::SeventyFive));
        assert!(PageSize::try_from(20).is_err());
        assert_eq!(usize::from(PageSize::default()), 25);
    }
}
