//! Toast Notification Components

use crate::components::icons::*;
use crate::state::{use_app_state, Toast, ToastType};
use leptos::*;

const EXIT_ANIMATION_MS: u64 = 300;

/// Toast container component - renders all active toasts
#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! { <ToastItem toast=toast on_close=Callback::new(move |_| state.remove_toast(id)) /> }
                }
            />
        </div>
    }
}

/// Individual toast item
#[component]
fn ToastItem(toast: Toast, on_close: Callback<()>) -> impl IntoView {
    let exiting = create_rw_signal(false);

    let handle_close = move |_| {
        exiting.set(true);
        set_timeout(
            move || on_close.call(()),
            std::time::Duration::from_millis(EXIT_ANIMATION_MS),
        );
    };

    let toast_type = toast.toast_type;

    view! {
        <div
            class=move || format!(
                "toast {} {}",
                toast_type.class(),
                if exiting.get() { "toast-exit" } else { "toast-enter" }
            )
            role="alert"
        >
            <div class="toast-icon">
                {match toast_type {
                    ToastType::Success => view! { <IconCheckCircle /> }.into_view(),
                    ToastType::Error => view! { <IconXCircle /> }.into_view(),
                    ToastType::Warning => view! { <IconAlertTriangle /> }.into_view(),
                    ToastType::Info => view! { <IconInfo /> }.into_view(),
                }}
            </div>
            <div class="toast-content">
                <div class="toast-title">{toast.title}</div>
                <div class="toast-message">{toast.message}</div>
            </div>
            <button class="toast-close" aria-label="Dismiss" on:click=handle_close>
                <IconX size=IconSize::Sm />
            </button>
        </div>
    }
}

/// Inline alert that stays in place until dismissed
#[component]
pub fn AlertBanner(
    #[prop(into)] variant: ToastType,
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let variant_class = match variant {
        ToastType::Success => "alert-success",
        ToastType::Error => "alert-error",
        ToastType::Warning => "alert-warning",
        ToastType::Info => "alert-info",
    };

    view! {
        <div class=format!("alert {}", variant_class) role="alert">
            {match variant {
                ToastType::Success => view! { <IconCheckCircle size=IconSize::Sm /> }.into_view(),
                ToastType::Info => view! { <IconInfo size=IconSize::Sm /> }.into_view(),
                _ => view! { <IconAlertCircle size=IconSize::Sm /> }.into_view(),
            }}
            <span>{message}</span>
            {on_dismiss.map(|cb| view! {
                <button type="button" class="alert-dismiss" aria-label="Dismiss" on:click=move |_| cb.call(())>
                    <IconX size=IconSize::Sm />
                </button>
            })}
        </div>
    }
}
