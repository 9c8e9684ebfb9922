//! Mobile card layout
//!
//! Same rows and selection as the desktop table; a tapped card expands to
//! show details, one at a time.

use leptos::*;
use leptos_router::*;

use teshdesk_core::{CheckState, PageView, UserListModel, UserRecord};

use crate::components::{icons::*, table::*};
use crate::state::UsersState;

#[component]
pub fn MobileUserList(page: Memo<PageView>) -> impl IntoView {
    let UsersState { model } = expect_context();
    let header = Signal::derive(move || model.with(UserListModel::header_state));

    view! {
        <div class="mobile-list mobile-only">
            <label class="mobile-select-all">
                <HeaderCheckbox
                    state=header
                    on_toggle=move |_: ()| model.update(UserListModel::toggle_select_all_visible)
                />
                <span>
                    {move || if header.get() == CheckState::Checked { "Deselect all" } else { "Select all" }}
                </span>
            </label>
            {move || page.with(|p| {
                p.rows
                    .iter()
                    .cloned()
                    .map(|record| view! { <MobileCard record=record /> })
                    .collect_view()
            })}
        </div>
    }
}

#[component]
fn MobileCard(record: UserRecord) -> impl IntoView {
    let UsersState { model } = expect_context();
    let id = store_value(record.id.clone());
    let selected = Signal::derive(move || id.with_value(|id| model.with(|m| m.is_selected(id))));
    let expanded = Signal::derive(move || id.with_value(|id| model.with(|m| m.is_expanded(id))));

    let toggle_expanded = move |_| id.with_value(|id| model.update(|m| m.toggle_expanded(id)));
    let edit_href = format!("/users/edit/{}", record.id);

    let email = record.display_email().to_string();
    let country = record.display_country().to_string();
    let permission = record.permission().to_string();
    let registered = record.display_registered();

    view! {
        <div class=move || format!(
            "mobile-card {} {}",
            if selected.get() { "selected" } else { "" },
            if expanded.get() { "expanded" } else { "" },
        )>
            <div class="mobile-card-header">
                <RowCheckbox
                    checked=selected
                    on_toggle=move |_: ()| id.with_value(|id| model.update(|m| m.toggle_selected(id)))
                />
                <button
                    type="button"
                    class="mobile-card-summary"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=toggle_expanded
                >
                    <span class="mobile-card-name">{record.display_name()}</span>
                    <StatusBadge status=record.status().to_string() />
                    {move || if expanded.get() {
                        view! { <IconChevronUp size=IconSize::Sm /> }.into_view()
                    } else {
                        view! { <IconChevronDown size=IconSize::Sm /> }.into_view()
                    }}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <dl class="mobile-card-details">
                    <dt>"Email"</dt>
                    <dd>{email.clone()}</dd>
                    <dt>"Country"</dt>
                    <dd>{country.clone()}</dd>
                    <dt>"Permission"</dt>
                    <dd>{permission.clone()}</dd>
                    <dt>"Registered"</dt>
                    <dd>{registered.clone()}</dd>
                </dl>
                <div class="mobile-card-actions">
                    <A href=edit_href.clone() class="btn btn-ghost btn-sm">
                        <IconEdit size=IconSize::Sm />
                        <span>"Edit"</span>
                    </A>
                    <button
                        class="btn btn-ghost btn-sm btn-danger-text"
                        on:click=move |_| id.with_value(|id| model.update(|m| m.request_delete(id)))
                    >
                        <IconTrash size=IconSize::Sm />
                        <span>"Delete"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
