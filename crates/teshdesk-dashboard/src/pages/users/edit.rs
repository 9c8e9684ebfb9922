//! Edit-user drawer

use leptos::*;
use leptos_router::*;
use tracing::{error, info};

use teshdesk_core::{EditPhase, EditUserForm, UserField, UserListModel, UserUpdate};

use super::add::field_input;
use crate::api;
use crate::components::{forms::*, icons::*, modal::Drawer, spinner::{LoadingState, Spinner}, toast::AlertBanner};
use crate::state::{use_app_state, use_users_state, ToastType};

/// Drawer at `/users/edit/:id`
#[component]
pub fn EditUserPage() -> impl IntoView {
    let users = use_users_state();
    let navigate = use_navigate();
    let params = use_params_map();

    let close = Callback::new(move |_: ()| navigate("/users", Default::default()));

    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));
    let loading = create_memo(move |_| users.model.with(UserListModel::is_loading));
    // Keyed on the id alone; edits to the record must not reseed the form.
    let found = create_memo(move |_| {
        let id = id.get();
        users
            .model
            .with(|m| m.record(&id).is_some())
            .then_some(id)
    });

    view! {
        <Drawer title="Edit User" on_close=close>
            {move || {
                if loading.get() {
                    return view! { <LoadingState text="Loading user..." /> }.into_view();
                }
                match found.get() {
                    Some(id) => view! { <UserEditor id=id on_close=close /> }.into_view(),
                    None => view! {
                        <div class="empty-state">
                            <IconAlertCircle size=IconSize::Xl class="text-muted" />
                            <h3>"User not found"</h3>
                            <p>"This user may have been deleted."</p>
                            <button class="btn btn-primary" on:click=move |_| close.call(())>
                                "Back to users"
                            </button>
                        </div>
                    }
                    .into_view(),
                }
            }}
        </Drawer>
    }
}

#[component]
fn UserEditor(id: String, on_close: Callback<()>) -> impl IntoView {
    let state = use_app_state();
    let users = use_users_state();

    let Some(seed) = users
        .model
        .with_untracked(|m| m.record(&id).map(EditUserForm::from_record))
    else {
        return ().into_view();
    };
    let form = create_rw_signal(seed);

    let finish_save = move |id: String, update: UserUpdate| {
        users.model.update(|m| {
            m.apply_update(&id, &update);
        });
        form.update(EditUserForm::complete_save);
        info!(%id, "User updated");
        state.toast_success("User updated", "Changes saved successfully.");
    };

    let handle_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let Some(update) = form.try_update(EditUserForm::begin_save).flatten() else {
            return;
        };
        let id = form.with_untracked(|f| f.user_id().to_string());
        let api_config = state.config.with_value(|c| c.api.clone());

        if api_config.is_live() {
            spawn_local(async move {
                match api::update_user(&api_config, &id, &update).await {
                    Ok(()) => finish_save(id, update),
                    Err(e) => {
                        error!(%id, error = %e, "Update request failed");
                        form.update(|f| f.fail_save(e.to_string()));
                    }
                }
            });
        } else {
            finish_save(id, update);
        }
    };

    let phase = create_memo(move |_| form.with(EditUserForm::phase));

    view! {
        <form class="user-form" on:submit=handle_submit>
            {move || form.with(|f| f.error().map(str::to_string)).map(|message| view! {
                <AlertBanner
                    variant=ToastType::Error
                    message=message
                    on_dismiss=Callback::new(move |_: ()| form.update(EditUserForm::dismiss_error))
                />
            })}

            <Show when=move || phase.get() == EditPhase::Saved>
                <AlertBanner variant=ToastType::Success message="User updated successfully" />
            </Show>

            {UserField::ALL
                .into_iter()
                .map(|field| {
                    field_input(
                        field,
                        Signal::derive(move || form.with(|f| f.value(field).to_string())),
                        Signal::derive(|| false),
                        Callback::new(move |v: String| form.update(|f| f.set_field(field, v))),
                    )
                })
                .collect_view()}

            <div class="form-group">
                <span class="form-label">"Status"</span>
                <Toggle
                    checked=Signal::derive(move || form.with(EditUserForm::is_active))
                    on_toggle=move |_: ()| form.update(EditUserForm::toggle_status)
                    label=Signal::derive(move || {
                        let label = if form.with(EditUserForm::is_active) { "Active" } else { "Inactive" };
                        label.to_string()
                    })
                />
            </div>

            <div class="form-actions">
                <button type="button" class="btn btn-ghost" on:click=move |_| on_close.call(())>
                    {move || if phase.get() == EditPhase::Saved { "Back to users" } else { "Cancel" }}
                </button>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !form.with(EditUserForm::can_save)
                >
                    <Show
                        when=move || phase.get() == EditPhase::Saving
                        fallback=|| view! { <IconCheck size=IconSize::Sm /> }
                    >
                        <Spinner inline=true />
                    </Show>
                    <span>"Save Changes"</span>
                </button>
            </div>
        </form>
    }
    .into_view()
}
