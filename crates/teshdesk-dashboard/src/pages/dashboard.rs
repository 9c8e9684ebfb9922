//! Main Dashboard Page

use leptos::*;
use leptos_router::*;

use crate::components::{icons::*, sidebar::Sidebar};
use crate::state::use_app_state;

/// Landing page after sign-in
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        state.logout();
        navigate("/login", Default::default());
    };

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Manage your workspace from one place"</p>
                </div>
                <button class="btn btn-ghost" on:click=handle_logout>
                    <IconLogout size=IconSize::Sm />
                    <span>"Logout"</span>
                </button>
            </div>

            <div class="welcome-panel card">
                <div class="welcome-icon">
                    <IconShield size=IconSize::Xl />
                </div>
                <div class="welcome-text">
                    <h2>"Welcome to TeshDesk"</h2>
                    <p>"Review accounts, adjust permissions and keep your user directory tidy."</p>
                </div>
            </div>

            <div class="feature-grid">
                <FeatureCard
                    title="Users"
                    description="Browse, filter and edit user accounts"
                    href="/users"
                    icon=view! { <IconUsers size=IconSize::Lg /> }.into_view()
                    color="primary"
                />
                <FeatureCard
                    title="Analytics"
                    description="Usage trends and sign-up reports"
                    icon=view! { <IconBarChart size=IconSize::Lg /> }.into_view()
                    color="info"
                />
                <FeatureCard
                    title="Settings"
                    description="Workspace preferences"
                    icon=view! { <IconSettings size=IconSize::Lg /> }.into_view()
                    color="warning"
                />
                <FeatureCard
                    title="Surveys"
                    description="Collect feedback from your users"
                    icon=view! { <IconClipboard size=IconSize::Lg /> }.into_view()
                    color="success"
                />
                <FeatureCard
                    title="AI Tools"
                    description="Assistants for everyday admin work"
                    icon=view! { <IconBrain size=IconSize::Lg /> }.into_view()
                    color="accent"
                />
            </div>
        </div>
    }
}

/// Feature card; cards without a destination are marked as coming soon
#[component]
fn FeatureCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] href: Option<&'static str>,
    icon: View,
    #[prop(into)] color: String,
) -> impl IntoView {
    let body = view! {
        <div class=format!("feature-icon feature-icon-{}", color)>{icon}</div>
        <div class="feature-content">
            <span class="feature-title">{title}</span>
            <span class="feature-desc">{description}</span>
        </div>
    };

    match href {
        Some(href) => view! {
            <A href=href class="feature-card">
                {body}
                <IconChevronRight size=IconSize::Sm class="feature-arrow" />
            </A>
        }
        .into_view(),
        None => view! {
            <div class="feature-card disabled" aria-disabled="true">
                {body}
                <span class="badge badge-muted">"Coming soon"</span>
            </div>
        }
        .into_view(),
    }
}

/// Application shell with sidebar and top bar
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="app-shell">
            <header class="topbar">
                <button
                    class="btn btn-ghost topbar-menu mobile-only"
                    aria-label="Toggle navigation"
                    on:click=move |_| state.toggle_mobile_nav()
                >
                    <IconMenu />
                </button>
                <A href="/dashboard" class="topbar-brand">
                    <span class="topbar-title">"TeshDesk"</span>
                </A>
            </header>
            <div class="app-content">
                <Sidebar />
                <main class="main-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
