//! Search, filter selects and the bulk action bar

use leptos::*;
use tracing::info;

use teshdesk_core::{filter::ALL_LABEL, AccountStatus, BulkAction, BulkMenu, Criterion, Permission, UserListModel};

use crate::components::{forms::*, icons::*};
use crate::state::{use_app_state, UsersState};

fn criterion_options(labels: impl IntoIterator<Item = &'static str>) -> Vec<(String, String)> {
    std::iter::once(ALL_LABEL)
        .chain(labels)
        .map(|label| (label.to_string(), label.to_string()))
        .collect()
}

/// Search box plus status and permission filters
#[component]
pub fn FilterToolbar() -> impl IntoView {
    let UsersState { model } = expect_context();

    let search = Signal::derive(move || model.with(|m| m.filter().search.clone()));
    let status = Signal::derive(move || model.with(|m| m.filter().status.label().to_string()));
    let permission = Signal::derive(move || model.with(|m| m.filter().permission.label().to_string()));

    view! {
        <div class="filters-bar">
            <TextInput
                value=search
                on_input=move |v: String| model.update(|m| m.set_search(v))
                input_type=InputType::Search
                placeholder="Search by name or email..."
                icon=view! { <IconSearch size=IconSize::Sm /> }.into_view()
                class="search-box"
            />
            <Select
                value=status
                options=criterion_options(AccountStatus::ALL.map(AccountStatus::label))
                on_change=move |v: String| model.update(|m| m.set_status_filter(Criterion::parse(&v)))
                label="Status"
                class="filter-select"
            />
            <Select
                value=permission
                options=criterion_options(Permission::ALL.map(Permission::label))
                on_change=move |v: String| model.update(|m| m.set_permission_filter(Criterion::parse(&v)))
                label="Permission"
                class="filter-select"
            />
        </div>
    }
}

/// Bulk actions over the current selection
#[component]
pub fn BulkActionBar() -> impl IntoView {
    let UsersState { model } = expect_context();
    let selected = create_memo(move |_| model.with(|m| m.selection().len()));

    view! {
        <Show when=move || { selected.get() > 0 }>
            <div class="bulk-bar">
                <span class="bulk-count">
                    {move || format!("{} selected", selected.get())}
                </span>
                {BulkMenu::ALL.into_iter().map(|menu| view! { <BulkMenuGroup menu=menu /> }).collect_view()}
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| model.update(UserListModel::clear_selection)
                >
                    "Clear selection"
                </button>
            </div>
        </Show>
    }
}

/// One bulk menu: its choices (staging toggles) and an apply button
#[component]
fn BulkMenuGroup(menu: BulkMenu) -> impl IntoView {
    let state = use_app_state();
    let UsersState { model } = expect_context();
    let open = create_rw_signal(false);
    let staged = create_memo(move |_| model.with(|m| m.staged(menu)));

    let apply = move |_| {
        if let Some((action, count)) = model.try_update(|m| m.apply_bulk(menu)).flatten() {
            let summary = action.describe(count);
            info!(%summary, "Bulk action applied");
            state.toast_success(menu.label(), summary);
            open.set(false);
        }
    };

    let choice = move |action: BulkAction| {
        view! {
            <button
                type="button"
                class=move || format!("dropdown-item {}", if staged.get() == Some(action) { "active" } else { "" })
                aria-pressed=move || (staged.get() == Some(action)).to_string()
                on:click=move |_| model.update(|m| m.toggle_bulk(action))
            >
                <Show when=move || staged.get() == Some(action)>
                    <IconCheck size=IconSize::Xs />
                </Show>
                <span>{action.choice_label()}</span>
            </button>
        }
    };

    view! {
        <div class="dropdown bulk-menu">
            <button
                class=format!("btn btn-sm {}", if menu == BulkMenu::DeleteAll { "btn-danger" } else { "btn-ghost" })
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {match menu {
                    BulkMenu::DeleteAll => view! { <IconTrash size=IconSize::Sm /> }.into_view(),
                    _ => view! { <IconEdit size=IconSize::Sm /> }.into_view(),
                }}
                <span>{menu.label()}</span>
                <IconChevronDown size=IconSize::Xs />
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-menu">
                    {menu.choices().into_iter().map(choice).collect_view()}
                    <div class="dropdown-footer">
                        <button
                            class="btn btn-primary btn-sm"
                            disabled=move || staged.get().is_none()
                            on:click=apply
                        >
                            "Apply"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
