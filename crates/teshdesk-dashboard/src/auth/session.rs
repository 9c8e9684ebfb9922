//! Session persistence and route guarding

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;
use tracing::debug;

use teshdesk_core::{Error, GuardDecision, Result, Route, SessionStorage};

use crate::state::use_app_state;

/// `localStorage` backend for the session flag
///
/// The flag is written as the bare string `true`, not JSON, so it stays
/// readable by anything else that checks the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Route guard wrapper
///
/// Decides synchronously from the session context, so protected children are
/// never built (and never fetch) for a signed-out visitor.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let state = use_app_state();
    let location = use_location();

    let decision = create_memo(move |_| state.guard(&Route::parse(&location.pathname.get())));
    let children = store_value(children);

    move || match decision.get() {
        GuardDecision::Render => children.with_value(|children| children()).into_view(),
        GuardDecision::Redirect(target) => {
            let path = target.path();
            debug!(from = %location.pathname.get_untracked(), to = %path, "Route guard redirect");
            view! { <Redirect path=path /> }.into_view()
        }
    }
}
