//! Desktop table layout

use leptos::*;
use leptos_router::*;

use teshdesk_core::{PageView, UserListModel, UserRecord};

use crate::components::{icons::*, table::*};
use crate::state::UsersState;

/// Full-width table with a select-all header
#[component]
pub fn DesktopUserTable(page: Memo<PageView>) -> impl IntoView {
    let UsersState { model } = expect_context();
    let header = Signal::derive(move || model.with(UserListModel::header_state));
    let query = create_memo(move |_| model.with(|m| m.filter().search.clone()));

    view! {
        <div class="table-container desktop-only">
            <table class="data-table">
                <thead>
                    <tr>
                        <th class="col-select">
                            <HeaderCheckbox
                                state=header
                                on_toggle=move |_: ()| model.update(UserListModel::toggle_select_all_visible)
                            />
                        </th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Country"</th>
                        <th>"Status"</th>
                        <th>"Permission"</th>
                        <th>"Registered"</th>
                        <th class="col-actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || page.with(|p| {
                        p.rows
                            .iter()
                            .cloned()
                            .map(|record| view! { <DesktopRow record=record query=query /> })
                            .collect_view()
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn DesktopRow(record: UserRecord, query: Memo<String>) -> impl IntoView {
    let UsersState { model } = expect_context();
    let id = store_value(record.id.clone());
    let selected = Signal::derive(move || id.with_value(|id| model.with(|m| m.is_selected(id))));

    let name = record.display_name();
    let email = record.display_email().to_string();

    view! {
        <tr class=move || if selected.get() { "row-selected" } else { "" }>
            <td class="col-select">
                <RowCheckbox
                    checked=selected
                    on_toggle=move |_: ()| id.with_value(|id| model.update(|m| m.toggle_selected(id)))
                />
            </td>
            <td class="cell-name">
                {move || view! { <Highlighted text=name.clone() query=query.get() /> }}
            </td>
            <td class="cell-email">
                {move || view! { <Highlighted text=email.clone() query=query.get() /> }}
            </td>
            <td>{record.display_country().to_string()}</td>
            <td><StatusBadge status=record.status().to_string() /></td>
            <td>{record.permission().to_string()}</td>
            <td>{record.display_registered()}</td>
            <td class="col-actions">
                <A href=format!("/users/edit/{}", record.id) class="btn btn-ghost btn-sm">
                    <IconEdit size=IconSize::Sm />
                    <span class="sr-only">"Edit"</span>
                </A>
                <button
                    class="btn btn-ghost btn-sm btn-danger-text"
                    aria-label="Delete"
                    on:click=move |_| id.with_value(|id| model.update(|m| m.request_delete(id)))
                >
                    <IconTrash size=IconSize::Sm />
                </button>
            </td>
        </tr>
    }
}
