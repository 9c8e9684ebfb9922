//! TeshDesk Dashboard - Leptos/WASM Frontend
//!
//! The browser side of the TeshDesk admin console: login and password recovery,
//! the dashboard landing page, and user management with desktop and mobile
//! layouts over the shared `teshdesk-core` view-model.

use leptos::*;
use leptos_router::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;

use auth::{
    recovery::{ForgetPasswordPage, MessageSentPage, ResetPasswordPage},
    session::RouteGuard,
    LoginPage,
};
use components::toast::ToastContainer;
use pages::{
    dashboard::{AppShell, DashboardPage},
    not_found::NotFoundPage,
    users::{AddUserPage, EditUserPage, UsersPage},
};
use state::provide_app_state;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    view! {
        <Router>
            <Routes>
                // Public routes
                <Route path="/login" view=LoginPage />
                <Route path="/forget-password" view=ForgetPasswordPage />
                <Route path="/message-sent" view=MessageSentPage />
                <Route path="/reset-password" view=ResetPasswordPage />

                // Forwards to /dashboard or /login
                <Route path="/" view=|| view! { <RouteGuard>{()}</RouteGuard> } />

                <Route path="/dashboard" view=|| view! {
                    <RouteGuard>
                        <AppShell>
                            <DashboardPage />
                        </AppShell>
                    </RouteGuard>
                } />

                // Add/edit render as drawers over the list, so the list keeps
                // its fetched records, filters and selection underneath.
                <Route path="/users" view=|| view! {
                    <RouteGuard>
                        <AppShell>
                            <UsersPage />
                        </AppShell>
                    </RouteGuard>
                }>
                    <Route path="add" view=AddUserPage />
                    <Route path="edit/:id" view=EditUserPage />
                    <Route path="" view=|| () />
                </Route>

                <Route path="/*any" view=|| view! {
                    <RouteGuard>
                        <NotFoundPage />
                    </RouteGuard>
                } />
            </Routes>
            <ToastContainer />
        </Router>
    }
}

/// WASM entry point
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!(version = teshdesk_core::VERSION, "Starting TeshDesk console");
    mount_to_body(App);
}
