//! Password recovery pages
//!
//! These screens are presentational: no request leaves the browser.

use leptos::*;
use leptos_router::*;
use teshdesk_core::PasswordStrength;
use tracing::debug;

use crate::components::{forms::*, icons::*, toast::AlertBanner};
use crate::state::{use_app_state, ToastType};

/// Email entry for a reset link
#[component]
pub fn ForgetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let error = create_rw_signal::<Option<String>>(None);

    let handle_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        if email.with_untracked(|v| v.trim().is_empty()) {
            error.set(Some("Please enter your email address".to_string()));
            return;
        }
        debug!("Reset link requested");
        navigate("/message-sent", Default::default());
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <h1 class="auth-title">"Forgot Password"</h1>
                    <p class="auth-subtitle">"Enter your email and we'll send you a reset link"</p>
                </div>

                <form class="auth-form" on:submit=handle_submit>
                    <TextInput
                        value=email
                        on_input=move |v: String| {
                            error.set(None);
                            email.set(v);
                        }
                        input_type=InputType::Email
                        label="Email"
                        placeholder="you@example.com"
                        required=true
                        error=Signal::derive(move || error.get())
                        icon=view! { <IconMail size=IconSize::Sm /> }.into_view()
                    />

                    <button type="submit" class="btn btn-primary btn-block">"Send Reset Link"</button>
                </form>

                <div class="auth-footer">
                    <A href="/login" class="link">
                        <IconArrowLeft size=IconSize::Sm />
                        "Back to login"
                    </A>
                </div>
            </div>
        </div>
    }
}

/// Confirmation after requesting a reset link
#[component]
pub fn MessageSentPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-container auth-message">
                <div class="auth-icon success">
                    <IconCheckCircle size=IconSize::Xl />
                </div>
                <h1 class="auth-title">"Check your email"</h1>
                <p class="auth-subtitle">
                    "If an account exists for that address, a password reset link is on its way."
                </p>
                <A href="/login" class="btn btn-primary btn-block">"Back to login"</A>
            </div>
        </div>
    }
}

/// New password entry with a strength meter
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal::<Option<String>>(None);

    let strength = create_memo(move |_| password.with(|p| PasswordStrength::rate(p)));

    let handle_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let (new, again) = (password.get_untracked(), confirm.get_untracked());
        if new.is_empty() {
            error.set(Some("Please enter a new password".to_string()));
        } else if new != again {
            error.set(Some("Passwords do not match".to_string()));
        } else {
            state.toast_success("Password updated", "Sign in with your new password.");
            navigate("/login", Default::default());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <h1 class="auth-title">"Reset Password"</h1>
                    <p class="auth-subtitle">"Choose a new password for your account"</p>
                </div>

                <form class="auth-form" on:submit=handle_submit>
                    {move || error.get().map(|message| view! {
                        <AlertBanner variant=ToastType::Error message=message />
                    })}

                    <TextInput
                        value=password
                        on_input=move |v: String| password.set(v)
                        input_type=InputType::Password
                        label="New Password"
                        placeholder="Enter a new password"
                        required=true
                        icon=view! { <IconKey size=IconSize::Sm /> }.into_view()
                    />

                    <Show when=move || password.with(|p| !p.is_empty())>
                        <div class=move || format!("password-strength {}", strength.get().class())>
                            <div class="strength-bar"></div>
                            <span class="strength-label">
                                "Strength: " {move || strength.get().label()}
                            </span>
                        </div>
                    </Show>

                    <TextInput
                        value=confirm
                        on_input=move |v: String| confirm.set(v)
                        input_type=InputType::Password
                        label="Confirm Password"
                        placeholder="Re-enter the new password"
                        required=true
                        icon=view! { <IconLock size=IconSize::Sm /> }.into_view()
                    />

                    <button type="submit" class="btn btn-primary btn-block">"Reset Password"</button>
                </form>

                <div class="auth-footer">
                    <A href="/login" class="link">"Back to login"</A>
                </div>
            </div>
        </div>
    }
}
