//! TeshDesk Core - View-Model Layer for the TeshDesk Admin Console
//!
//! This crate holds everything the admin console decides without touching the
//! browser: the user record model, the search/filter predicate, the pagination
//! slicer, the selection tracker and bulk actions, the add/edit form state
//! machines, and the session gate with its route guard. The Leptos front end in
//! `teshdesk-dashboard` renders these types for both the desktop and the mobile
//! layout, so the two can never drift apart.
//!
//! # Key Features
//! - Order-preserving search and multi-criteria filtering
//! - Page windows with range labels and structural bounds checking
//! - Tri-state "select all visible" tracking and typed bulk actions
//! - Required-field validation with per-field revalidation
//! - Session context with explicit `init`/`teardown` and a pure route guard
//!
//! # Example
//! ```rust
//! use teshdesk_core::{FilterState, PageSize, Pagination, UserRecord, filter_records};
//!
//! let records: Vec<UserRecord> = (1..=50)
//!     .map(|i| UserRecord::new(format!("u{i}")).with_email(format!("user{i}@example.com")))
//!     .collect();
//!
//! let filtered = filter_records(&records, &FilterState::default());
//! let window = Pagination::new(PageSize::TwentyFive).window(&filtered);
//! assert_eq!(window.label(), "1–25 of 50");
//! ```
//!
//! @version 0.1.0
//! @author TeshCodes Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod api;
pub mod bulk;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod list;
pub mod pagination;
pub mod password;
pub mod route;
pub mod selection;
pub mod session;
pub mod types;

pub use api::{decode_users, decode_users_value};
pub use bulk::{BulkAction, BulkActionMenu, BulkMenu};
pub use config::{ApiConfig, AuthConfig, ConsoleConfig, NetworkMode, UiConfig};
pub use error::{Error, Result};
pub use filter::{filter_records, highlight, Criterion, FilterState, Segment};
pub use form::{
    AddUserForm, EditPhase, EditUserForm, FormPhase, UpdateName, UserDraft, UserField, UserSummary,
    UserUpdate, DEPARTMENT_OPTIONS, PERMISSION_OPTIONS,
};
pub use list::{FetchState, PageView, UserListModel};
pub use pagination::{paginate, PageSize, PageWindow, Pagination};
pub use password::PasswordStrength;
pub use route::{guard, GuardDecision, Route};
pub use selection::{CheckState, SelectionSet};
pub use session::{Credentials, MemoryStorage, Session, SessionStorage};
pub use types::{AccountStatus, Permission, UserRecord, PLACEHOLDER};

/// Console version, shown in the dashboard footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
