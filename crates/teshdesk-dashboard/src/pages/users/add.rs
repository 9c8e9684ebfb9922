//! Add-user drawer

use leptos::*;
use leptos_router::*;
use tracing::{info, warn};

use teshdesk_core::{AddUserForm, Error, FormPhase, UserField, UserSummary};

use crate::components::{forms::*, icons::*, modal::Drawer, toast::AlertBanner};
use crate::state::{use_app_state, ToastType};

/// Text input or select for one form field
pub(super) fn field_input(
    field: UserField,
    value: Signal<String>,
    invalid: Signal<bool>,
    on_input: Callback<String>,
) -> View {
    match field.options() {
        Some(options) => view! {
            <Select
                value=value
                options={options
                    .iter()
                    .map(|(v, label)| (v.to_string(), label.to_string()))
                    .collect::<Vec<_>>()}
                on_change=on_input
                label=field.label()
                placeholder=field.placeholder()
                invalid=invalid
                required=field.is_required()
            />
        }
        .into_view(),
        None => view! {
            <TextInput
                value=value
                on_input=on_input
                input_type={if field == UserField::Email { InputType::Email } else { InputType::Text }}
                label=field.label()
                placeholder=field.placeholder()
                invalid=invalid
                required=field.is_required()
            />
        }
        .into_view(),
    }
}

/// Drawer at `/users/add`
#[component]
pub fn AddUserPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let form = create_rw_signal(AddUserForm::new());

    let close = Callback::new(move |_: ()| navigate("/users", Default::default()));

    let handle_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        match form.try_update(AddUserForm::submit) {
            Some(Ok(summary)) => {
                info!(name = %summary.full_name, "User added");
                state.toast_success("User added", format!("{} was added", summary.full_name));
            }
            Some(Err(Error::Validation { fields })) => {
                warn!(missing = fields.len(), "Add user form incomplete");
            }
            Some(Err(e)) => state.toast_error("Add user failed", e.to_string()),
            None => {}
        }
    };

    let success = create_memo(move |_| {
        form.with(|f| match f.phase() {
            FormPhase::Success(summary) => Some(summary.clone()),
            _ => None,
        })
    });

    view! {
        <Drawer title="Add User" on_close=close>
            {move || match success.get() {
                Some(summary) => view! {
                    <AddUserSummary
                        summary=summary
                        on_another=move |_: ()| form.update(AddUserForm::add_another)
                        on_finish=move |_: ()| {
                            form.update(AddUserForm::finish);
                            close.call(());
                        }
                    />
                }
                .into_view(),
                None => view! {
                    <form class="user-form" novalidate=true on:submit=handle_submit>
                        {move || form.with(AddUserForm::show_alert).then(|| view! {
                            <AlertBanner
                                variant=ToastType::Error
                                message="Please fill in all required fields"
                                on_dismiss=Callback::new(move |_: ()| form.update(AddUserForm::dismiss_alert))
                            />
                        })}

                        {UserField::ALL
                            .into_iter()
                            .map(|field| {
                                field_input(
                                    field,
                                    Signal::derive(move || form.with(|f| f.value(field).to_string())),
                                    Signal::derive(move || form.with(|f| f.is_invalid(field))),
                                    Callback::new(move |v: String| form.update(|f| f.set_field(field, v))),
                                )
                            })
                            .collect_view()}

                        <div class="form-actions">
                            <button type="button" class="btn btn-ghost" on:click=move |_| close.call(())>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || form.with(|f| matches!(f.phase(), FormPhase::Submitting))
                            >
                                <IconPlus size=IconSize::Sm />
                                <span>"Add User"</span>
                            </button>
                        </div>
                    </form>
                }
                .into_view(),
            }}
        </Drawer>
    }
}

#[component]
fn AddUserSummary(
    summary: UserSummary,
    #[prop(into)] on_another: Callback<()>,
    #[prop(into)] on_finish: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-success">
            <div class="success-icon">
                <IconCheckCircle size=IconSize::Xl />
            </div>
            <h3>"User added successfully"</h3>
            <dl class="summary-list">
                <dt>"Full Name"</dt>
                <dd>{summary.full_name}</dd>
                <dt>"Email"</dt>
                <dd>{summary.email}</dd>
                <dt>"Permission"</dt>
                <dd>{summary.permission}</dd>
            </dl>
            <div class="form-actions">
                <button class="btn btn-ghost" on:click=move |_| on_another.call(())>"Add another"</button>
                <button class="btn btn-primary" on:click=move |_| on_finish.call(())>"Finish"</button>
            </div>
        </div>
    }
}
