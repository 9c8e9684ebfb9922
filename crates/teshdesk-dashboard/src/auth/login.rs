//! Login Page Component

use leptos::*;
use leptos_router::*;
use tracing::info;

use crate::components::{forms::*, icons::*, toast::AlertBanner};
use crate::state::{use_app_state, ToastType};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal::<Option<String>>(None);

    let handle_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        error.set(None);

        match state.login(&email.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                info!("Signed in, opening dashboard");
                state.toast_success("Welcome back", "You are now signed in.");
                navigate("/dashboard", Default::default());
            }
            Err(e) => {
                let message = e.to_string();
                state.toast_error("Sign in failed", message.clone());
                error.set(Some(message));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <h1 class="auth-title">"Welcome Back"</h1>
                    <p class="auth-subtitle">"Sign in to the TeshDesk console"</p>
                </div>

                <form class="auth-form" on:submit=handle_submit>
                    {move || error.get().map(|message| view! {
                        <AlertBanner variant=ToastType::Error message=message />
                    })}

                    <TextInput
                        value=email
                        on_input=move |v: String| email.set(v)
                        input_type=InputType::Email
                        label="Email"
                        placeholder="you@example.com"
                        required=true
                        icon=view! { <IconMail size=IconSize::Sm /> }.into_view()
                    />

                    <TextInput
                        value=password
                        on_input=move |v: String| password.set(v)
                        input_type=InputType::Password
                        label="Password"
                        placeholder="Enter your password"
                        required=true
                        icon=view! { <IconLock size=IconSize::Sm /> }.into_view()
                    />

                    <div class="auth-options">
                        <A href="/forget-password" class="link">"Forgot password?"</A>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
