//! Global State Management for TeshDesk Dashboard
//!
//! Provides reactive state signals for the application.

use leptos::*;
use teshdesk_core::{ConsoleConfig, Error, GuardDecision, Route, Session, UserListModel};

use crate::auth::session::BrowserStorage;

/// Toast notification type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub toast_type: ToastType,
    pub title: String,
    pub message: String,
}

const TOAST_DURATION_MS: u64 = 5000;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded console configuration
    pub config: StoredValue<ConsoleConfig>,
    /// Session context; the route guard reads it through this signal
    session: RwSignal<Session<BrowserStorage>>,
    /// Whether the mobile navigation drawer is open
    pub mobile_nav_open: RwSignal<bool>,
    /// Active toast notifications
    pub toasts: RwSignal<Vec<Toast>>,
    /// Toast ID counter
    toast_counter: StoredValue<u64>,
}

impl AppState {
    /// Load config and read the persisted session flag once.
    pub fn new() -> Self {
        let config = crate::config::load();
        let session = Session::init(BrowserStorage, &config.auth);

        Self {
            config: store_value(config),
            session: create_rw_signal(session),
            mobile_nav_open: create_rw_signal(false),
            toasts: create_rw_signal(Vec::new()),
            toast_counter: store_value(0),
        }
    }

    /// Route guard decision for `route`
    pub fn guard(&self, route: &Route) -> GuardDecision {
        self.session.with(|s| s.guard(route))
    }

    /// Check credentials and persist the session flag
    pub fn login(&self, email: &str, password: &str) -> teshdesk_core::Result<()> {
        self.session
            .try_update(|s| s.login(email, password))
            .unwrap_or_else(|| Err(Error::Storage("session context disposed".to_string())))
    }

    /// Clear the session flag
    pub fn logout(&self) {
        self.session.update(Session::teardown);
        self.mobile_nav_open.set(false);
    }

    /// Toggle the mobile navigation drawer
    pub fn toggle_mobile_nav(&self) {
        self.mobile_nav_open.update(|v| *v = !*v);
    }

    /// Show a toast notification
    pub fn show_toast(&self, toast_type: ToastType, title: impl Into<String>, message: impl Into<String>) {
        self.toast_counter.update_value(|c| *c += 1);
        let id = self.toast_counter.get_value();

        let toast = Toast {
            id,
            toast_type,
            title: title.into(),
            message: message.into(),
        };

        self.toasts.update(|toasts| toasts.push(toast));

        // Auto-remove toast after duration
        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|t| t.retain(|toast| toast.id != id));
            },
            std::time::Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    /// Show success toast
    pub fn toast_success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastType::Success, title, message);
    }

    /// Show error toast
    pub fn toast_error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastType::Error, title, message);
    }

    /// Remove a specific toast
    pub fn remove_toast(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide app state context
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

// ============================================================================
// Users State
// ============================================================================

/// State for the user management page and its add/edit drawers
#[derive(Clone, Copy)]
pub struct UsersState {
    /// Shared desktop/mobile view-model
    pub model: RwSignal<UserListModel>,
}

impl UsersState {
    pub fn new(model: UserListModel) -> Self {
        Self {
            model: create_rw_signal(model),
        }
    }
}

/// Provide users state context
pub fn provide_users_state(model: UserListModel) -> UsersState {
    let state = UsersState::new(model);
    provide_context(state);
    state
}

/// Use users state from context
pub fn use_users_state() -> UsersState {
    expect_context::<UsersState>()
}
