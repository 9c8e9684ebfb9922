//! 404 page

use leptos::*;
use leptos_router::*;

use crate::components::icons::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <IconAlertTriangle size=IconSize::Xl />
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/dashboard" class="btn btn-primary">"Go to Dashboard"</A>
        </div>
    }
}
