//! Property tests for the list view-model.

use proptest::prelude::*;
use teshdesk_core::{
    filter_records, paginate, BulkAction, BulkMenu, Criterion, FilterState, PageSize,
    CheckState, SelectionSet, UserListModel, UserRecord,
};

const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];
const PERMISSIONS: [&str; 4] = ["User", "Admin", "Super Admin", "Uncategorised"];

/// Optional attribute drawn from `choices`.
fn arb_choice(choices: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(choices).prop_map(str::to_string))
}

fn arb_record_fields(
) -> impl Strategy<Value = (Option<(String, String)>, Option<String>, Option<String>, Option<String>)>
{
    (
        proptest::option::of(("[A-Za-z]{1,8}", "[A-Za-z]{1,8}")),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,5}\\.io"),
        arb_choice(&STATUSES),
        arb_choice(&PERMISSIONS),
    )
}

/// Records with unique ids `r0..rN`.
fn arb_records(max: usize) -> impl Strategy<Value = Vec<UserRecord>> {
    proptest::collection::vec(arb_record_fields(), 0..max).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (name, email, status, permission))| {
                let mut record = UserRecord::new(format!("r{i}"));
                if let Some((first, last)) = name {
                    record = record.with_name(first, last);
                }
                record.email = email;
                record.status = status;
                record.permission = permission;
                record
            })
            .collect()
    })
}

fn arb_page_size() -> impl Strategy<Value = PageSize> {
    proptest::sample::select(PageSize::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum Op {
    Search(String),
    Status(Criterion),
    Permission(Criterion),
    PageSize(PageSize),
    Next,
    Prev,
    SelectPage,
    Bulk(BulkAction),
    Truncate(usize),
}

fn arb_criterion(choices: &'static [&'static str]) -> impl Strategy<Value = Criterion> {
    arb_choice(choices).prop_map(|c| c.map_or(Criterion::All, Criterion::Only))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{0,2}".prop_map(Op::Search),
        arb_criterion(&STATUSES).prop_map(Op::Status),
        arb_criterion(&PERMISSIONS).prop_map(Op::Permission),
        arb_page_size().prop_map(Op::PageSize),
        Just(Op::Next),
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::SelectPage),
        prop_oneof![
            Just(BulkAction::DeleteAll),
            proptest::sample::select(teshdesk_core::Permission::ALL.to_vec())
                .prop_map(BulkAction::AssignPermission),
            proptest::sample::select(teshdesk_core::AccountStatus::ALL.to_vec())
                .prop_map(BulkAction::ChangeStatus),
        ]
        .prop_map(Op::Bulk),
        (0usize..40).prop_map(Op::Truncate),
    ]
}

fn apply(model: &mut UserListModel, op: Op) {
    match op {
        Op::Search(q) => model.set_search(q),
        Op::Status(c) => model.set_status_filter(c),
        Op::Permission(c) => model.set_permission_filter(c),
        Op::PageSize(size) => model.set_page_size(size),
        Op::Next => {
            model.next_page();
        }
        Op::Prev => {
            model.prev_page();
        }
        Op::SelectPage => model.toggle_select_all_visible(),
        Op::Bulk(action) => {
            model.toggle_bulk(action);
            model.apply_bulk(action.menu());
        }
        Op::Truncate(n) => {
            let kept: Vec<UserRecord> = model.records().iter().take(n).cloned().collect();
            model.set_records(kept);
        }
    }
}

proptest! {
    /// Property: filtering returns an order-preserving subset whose members contain the query
    #[test]
    fn prop_search_results_contain_query(records in arb_records(40), query in "[a-z]{0,3}") {
        let state = FilterState { search: query.clone(), ..Default::default() };
        let result = filter_records(&records, &state);

        let positions = result
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap());
        let mut last = None;
        for pos in positions {
            prop_assert!(last.map_or(true, |l| pos > l), "order changed");
            last = Some(pos);
        }

        for record in &result {
            let name = record.full_name().to_lowercase();
            let email = record.email.clone().unwrap_or_default().to_lowercase();
            prop_assert!(name.contains(&query) || email.contains(&query));
        }
    }

    /// Property: an empty search with All/All returns the collection unchanged
    #[test]
    fn prop_empty_filter_is_identity(records in arb_records(40)) {
        let result = filter_records(&records, &FilterState::default());
        prop_assert_eq!(result.len(), records.len());
        for (a, b) in result.iter().zip(&records) {
            prop_assert_eq!(*a, b);
        }
    }

    /// Property: non-All criteria only return records with the defaulted value
    #[test]
    fn prop_criteria_only_return_matches(
        records in arb_records(40),
        status in proptest::sample::select(STATUSES.to_vec()),
        permission in proptest::sample::select(PERMISSIONS.to_vec()),
    ) {
        let state = FilterState {
            search: String::new(),
            status: Criterion::parse(status),
            permission: Criterion::parse(permission),
        };
        for record in filter_records(&records, &state) {
            prop_assert_eq!(record.status(), status);
            prop_assert_eq!(record.permission(), permission);
        }
    }

    /// Property: page windows are consistent with their range
    #[test]
    fn prop_paginate_range_matches_slice(
        len in 0usize..300,
        index in 0usize..40,
        size in arb_page_size(),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let window = paginate(&items, index, size.get());
        prop_assert_eq!(window.total, len);
        prop_assert!(window.items.len() <= size.get());
        if len == 0 {
            prop_assert!(window.items.is_empty());
            prop_assert_eq!(window.label(), "0 of 0");
        } else {
            prop_assert!(!window.items.is_empty());
            prop_assert_eq!(window.range_end - window.range_start + 1, window.items.len());
            prop_assert_eq!(window.items[0] + 1, window.range_start);
        }
        prop_assert_eq!(paginate(&items, index, size.get()), window);
    }

    /// Property: no sequence of operations leaves the page index past the last page
    #[test]
    fn prop_page_index_stays_in_bounds(
        records in arb_records(60),
        ops in proptest::collection::vec(arb_op(), 0..30),
    ) {
        let mut model = UserListModel::new(PageSize::Ten);
        model.set_records(records);
        for op in ops {
            let resets = matches!(
                op,
                Op::Search(_) | Op::Status(_) | Op::Permission(_) | Op::PageSize(_)
            );
            apply(&mut model, op);
            let pagination = model.pagination();
            if resets {
                prop_assert_eq!(pagination.page_index, 0);
            }
            let total = model.filtered().len();
            prop_assert!(pagination.page_index <= pagination.last_index(total));
        }
    }

    /// Property: selecting a page then clearing leaves nothing selected
    #[test]
    fn prop_select_all_then_clear_is_empty(ids in proptest::collection::vec("[a-z0-9]{1,6}", 0..30)) {
        let mut selection = SelectionSet::new();
        selection.select_all_visible(ids.iter().map(String::as_str));
        selection.clear();
        prop_assert!(selection.is_empty());
    }

    /// Property: the header checkbox depends only on the visible ids
    #[test]
    fn prop_header_ignores_off_page_ids(
        visible in proptest::collection::btree_set("v[a-z]{1,4}", 0..12),
        picked in proptest::collection::vec(any::<bool>(), 12),
        off_page in proptest::collection::btree_set("o[a-z]{1,4}", 0..6),
    ) {
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        let mut selection = SelectionSet::new();
        for (id, chosen) in visible.iter().zip(&picked) {
            if *chosen {
                selection.toggle(id);
            }
        }
        let on_page = selection.header_state(&visible);
        for id in &off_page {
            selection.toggle(id);
        }
        prop_assert_eq!(selection.header_state(&visible), on_page);

        let count = visible.iter().filter(|id| selection.contains(id)).count();
        let expected = if count == 0 {
            CheckState::Unchecked
        } else if count == visible.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        };
        prop_assert_eq!(on_page, expected);
    }

    /// Property: toggling an id twice restores the selection
    #[test]
    fn prop_double_toggle_is_noop(
        initial in proptest::collection::btree_set("[a-z]{1,4}", 0..10),
        id in "[a-z]{1,4}",
    ) {
        let mut selection = SelectionSet::new();
        selection.select_all_visible(initial.iter().map(String::as_str));
        let before = selection.clone();
        selection.toggle(&id);
        selection.toggle(&id);
        prop_assert_eq!(selection, before);
    }

    /// Property: bulk actions never touch records outside the selection
    #[test]
    fn prop_bulk_respects_selection(records in arb_records(30), pick in proptest::collection::vec(any::<bool>(), 30)) {
        let mut model = UserListModel::new(PageSize::Hundred);
        model.set_records(records.clone());
        for (record, chosen) in records.iter().zip(&pick) {
            if *chosen {
                model.toggle_selected(&record.id);
            }
        }
        let selected: Vec<String> = model.selection().iter().map(str::to_string).collect();

        model.toggle_bulk(BulkAction::ChangeStatus(teshdesk_core::AccountStatus::Inactive));
        model.apply_bulk(BulkMenu::ChangeStatus);

        for (before, after) in records.iter().zip(model.records()) {
            if selected.contains(&before.id) {
                prop_assert_eq!(after.status(), "Inactive");
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
