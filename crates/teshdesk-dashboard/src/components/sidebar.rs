//! Sidebar Navigation Component

use leptos::*;
use leptos_router::*;

use crate::components::icons::*;
use crate::state::use_app_state;

/// Sidebar navigation item
#[component]
fn SidebarItem<F, V>(#[prop(into)] href: String, #[prop(into)] label: String, icon: F) -> impl IntoView
where
    F: Fn() -> V + 'static,
    V: IntoView,
{
    let location = use_location();

    let is_active = {
        let href = href.clone();
        move || location.pathname.with(|path| path.starts_with(&href))
    };

    view! {
        <A
            href=href
            class=move || format!("sidebar-item {}", if is_active() { "active" } else { "" })
        >
            <span class="sidebar-icon">{icon()}</span>
            <span class="sidebar-label">{label}</span>
        </A>
    }
}

/// Main sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let location = use_location();

    // Close the mobile drawer after navigating
    create_effect(move |_| {
        location.pathname.track();
        state.mobile_nav_open.set(false);
    });

    let handle_logout = move |_| {
        state.logout();
        navigate("/login", Default::default());
    };

    view! {
        <aside class=move || format!("sidebar {}", if state.mobile_nav_open.get() { "open" } else { "" })>
            <div class="sidebar-content">
                <div class="sidebar-section">
                    <SidebarItem href="/dashboard" label="Dashboard" icon=|| view! { <IconDashboard /> } />
                    <SidebarItem href="/users" label="Users" icon=|| view! { <IconUsers /> } />
                </div>
            </div>

            <div class="sidebar-footer">
                <button class="sidebar-item sidebar-logout" on:click=handle_logout>
                    <span class="sidebar-icon"><IconLogout /></span>
                    <span class="sidebar-label">"Logout"</span>
                </button>
            </div>
        </aside>
        <Show when=move || state.mobile_nav_open.get()>
            <div class="sidebar-backdrop" on:click=move |_| state.mobile_nav_open.set(false)></div>
        </Show>
    }
}
