//! Search & Filter Predicate
//!
//! Narrows a record collection by a free-text query plus status and permission
//! criteria. Filtering never reorders records and never mutates them.
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

use serde::{Deserialize, Serialize};

use crate::types::{AccountStatus, Permission, UserRecord};

/// Menu label that disables a criterion.
pub const ALL_LABEL: &str = "All";

// =============================================================================
// Criterion
// =============================================================================

/// A single exact-match criterion, or the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// Accept every record.
    #[default]
    All,
    /// Accept only records whose value equals this label exactly.
    Only(String),
}

impl Criterion {
    /// Parse a menu label; `"All"` is the wildcard.
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Label shown in the filter menu.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(value) => value,
        }
    }

    /// Whether `value` passes this criterion.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl From<Permission> for Criterion {
    fn from(p: Permission) -> Self {
        Self::Only(p.label().to_string())
    }
}

impl From<AccountStatus> for Criterion {
    fn from(s: AccountStatus) -> Self {
        Self::Only(s.label().to_string())
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Combined search text and criteria for the list views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against name and email.
    pub search: String,
    /// Status criterion; absent statuses count as "Active".
    pub status: Criterion,
    /// Permission criterion; absent permissions count as "User".
    pub permission: Criterion,
}

impl FilterState {
    /// Whether no narrowing is in effect.
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.status == Criterion::All && self.permission == Criterion::All
    }

    /// Whether a single record passes every criterion.
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_search(record)
            && self.status.accepts(record.status())
            && self.permission.accepts(record.permission())
    }

    fn matches_search(&self, record: &UserRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.full_name().to_lowercase().contains(&needle)
            || record
                .email
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle))
    }
}

/// Order-preserving subset of `records` passing `state`.
pub fn filter_records<'a>(records: &'a [UserRecord], state: &FilterState) -> Vec<&'a UserRecord> {
    records.iter().filter(|r| state.matches(r)).collect()
}

// =============================================================================
// Highlighting
// =============================================================================

/// A run of text, flagged when it matched the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }
}

/// Split `text` into plain and highlighted runs for every case-insensitive
/// occurrence of `query`. An empty query yields the whole text unhighlighted.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![Segment::plain(text)];
    }

    // (byte offset, lowercased char) pairs so matches map back onto `text`.
    let folded: Vec<(usize, char)> = text
        .char_indices()
        .flat_map(|(i, c)| c.to_lowercase().map(move |l| (i, l)))
        .collect();

    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = folded[i..i + needle.len()].iter().map(|(_, c)| *c);
        if window.eq(needle.iter().copied()) {
            let start = folded[i].0;
            let end = folded
                .get(i + needle.len())
                .map_or(text.len(), |(offset, _)| *offset);
            if start < cursor || start == end {
                i += 1;
                continue;
            }
            if start > cursor {
                segments.push(Segment::plain(&text[cursor..start]));
            }
            segments.push(Segment {
                text: text[start..end].to_string(),
                highlighted: true,
            });
            cursor = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1").with_name("Ann", "Lee").with_email("ann@x.io"),
            UserRecord::new("2")
                .with_name("Bob", "Stone")
                .with_email("bob@y.io")
                .with_status("Inactive"),
            UserRecord::new("3")
                .with_name("Cara", "Annis")
                .with_email("c@z.io")
                .with_permission("Admin"),
        ]
    }

    fn ids(records: &[&UserRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_state_is_identity() {
        let records = sample();
        let state = FilterState::default();
        assert!(state.is_identity());
        assert_eq!(ids(&filter_records(&records, &state)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let records = sample();
        let state = FilterState {
            search: "ann".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_matches_email() {
        let records = sample();
        let state = FilterState {
            search: "Y.IO".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec!["2"]);
    }

    #[test]
    fn test_status_defaults_to_active() {
        let records = sample();
        let state = FilterState {
            status: Criterion::from(AccountStatus::Active),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec!["1", "3"]);
    }

    #[test]
    fn test_permission_defaults_to_user() {
        let records = sample();
        let state = FilterState {
            permission: Criterion::from(Permission::User),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec!["1", "2"]);
    }

    #[test]
    fn test_criteria_combine() {
        let records = sample();
        let state = FilterState {
            search: "a".into(),
            status: Criterion::parse("Active"),
            permission: Criterion::parse("Admin"),
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec!["3"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = sample();
        let state = FilterState {
            search: "zzz".into(),
            ..Default::default()
        };
        assert!(filter_records(&records, &state).is_empty());
    }

    #[test]
    fn test_criterion_parse() {
        assert_eq!(Criterion::parse("All"), Criterion::All);
        assert_eq!(Criterion::parse("Pending").label(), "Pending");
    }

    #[test]
    fn test_highlight_marks_every_match() {
        let segments = highlight("Anna Banana", "an");
        let marked: Vec<&str> = segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(marked, vec!["An", "an", "an"]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Anna Banana");
    }

    #[test]
    fn test_highlight_empty_query() {
        assert_eq!(highlight("Ann", ""), vec![Segment::plain("Ann")]);
        assert!(highlight("", "a").is_empty());
    }
}
