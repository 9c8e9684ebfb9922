//! User management: list, filters, bulk actions and the add/edit drawers

pub mod add;
pub mod desktop;
pub mod edit;
pub mod mobile;
pub mod toolbar;

pub use add::*;
pub use edit::*;

use leptos::*;
use leptos_router::*;
use tracing::{error, info, warn};

use teshdesk_core::{FetchState, PageSize, PageView, UserListModel};

use crate::api;
use crate::components::{icons::*, modal::ConfirmDialog, spinner::LoadingState, table::PageFooter};
use crate::state::{provide_users_state, use_app_state, UsersState};
use desktop::DesktopUserTable;
use mobile::MobileUserList;
use toolbar::{BulkActionBar, FilterToolbar};

/// User list page
///
/// Owns the view-model for the lifetime of `/users` and its nested routes,
/// and fetches the collection once per mount.
#[component]
pub fn UsersPage() -> impl IntoView {
    let state = use_app_state();
    let config = state.config.get_value();
    let UsersState { model } = provide_users_state(UserListModel::new(config.ui.page_size));

    if model.try_update(UserListModel::begin_fetch).unwrap_or(false) {
        let api_config = config.api.clone();
        spawn_local(async move {
            let result = api::fetch_users(&api_config).await.map_err(|e| {
                error!(error = %e, "Failed to load users");
                e.to_string()
            });
            if model.try_update(|m| m.finish_fetch(result)).is_none() {
                warn!("Users page unmounted before the fetch completed");
            }
        });
    }

    let fetch = create_memo(move |_| model.with(|m| m.fetch_state().clone()));
    let page = create_memo(move |_| model.with(UserListModel::page));

    view! {
        <div class="users-page">
            <div class="page-header">
                <div>
                    <h1>"Users"</h1>
                    <p class="page-subtitle">"Browse, filter and manage accounts"</p>
                </div>
                <A href="/users/add" class="btn btn-primary">
                    <IconPlus size=IconSize::Sm />
                    <span>"Add User"</span>
                </A>
            </div>

            {move || match fetch.get() {
                FetchState::Idle | FetchState::Loading => view! {
                    <LoadingState text="Loading users..." />
                }.into_view(),
                FetchState::Failed(message) => view! {
                    <div class="error-state">
                        <IconXCircle size=IconSize::Xl />
                        <h3>"Couldn't load users"</h3>
                        <p>{message}</p>
                    </div>
                }.into_view(),
                FetchState::Ready => view! { <UserListBody page=page /> }.into_view(),
            }}

            <DeleteConfirmation />
            <Outlet />
        </div>
    }
}

#[component]
fn UserListBody(page: Memo<PageView>) -> impl IntoView {
    let UsersState { model } = expect_context();

    view! {
        <FilterToolbar />
        <BulkActionBar />

        <Show
            when=move || page.with(|p| !p.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <IconUsers size=IconSize::Xl class="text-muted" />
                    <h3>"No users found"</h3>
                    <p>"Try a different search or filter"</p>
                </div>
            }
        >
            <DesktopUserTable page=page />
            <MobileUserList page=page />
        </Show>

        <PageFooter
            page=page
            page_size=Signal::derive(move || model.with(|m| m.pagination().page_size))
            on_page_size=move |size: PageSize| model.update(|m| m.set_page_size(size))
            on_prev=move |_: ()| model.update(|m| {
                m.prev_page();
            })
            on_next=move |_: ()| model.update(|m| {
                m.next_page();
            })
        />
    }
}

/// Confirmation for the row-level delete
#[component]
fn DeleteConfirmation() -> impl IntoView {
    let state = use_app_state();
    let UsersState { model } = expect_context();

    let pending = create_memo(move |_| model.with(|m| m.pending_delete().map(|r| r.display_name())));

    let handle_confirm = move |_: ()| {
        let Some(removed) = model.try_update(UserListModel::confirm_delete).flatten() else {
            return;
        };
        info!(id = %removed.id, "User deleted");
        state.toast_success("User deleted", format!("{} was removed", removed.display_name()));

        let api_config = state.config.with_value(|c| c.api.clone());
        if api_config.is_live() {
            spawn_local(async move {
                if let Err(e) = api::delete_user(&api_config, &removed.id).await {
                    error!(id = %removed.id, error = %e, "Delete request failed");
                    state.toast_error("Delete failed", e.to_string());
                }
            });
        }
    };

    view! {
        <ConfirmDialog
            show=Signal::derive(move || pending.with(Option::is_some))
            title="Delete user"
            message=Signal::derive(move || {
                format!(
                    "Are you sure you want to delete {}? This cannot be undone.",
                    pending.get().unwrap_or_default()
                )
            })
            confirm_text="Delete"
            danger=true
            on_confirm=handle_confirm
            on_cancel=move |_: ()| model.update(UserListModel::cancel_delete)
        />
    }
}
