//! Reusable UI Components for TeshDesk Dashboard

pub mod forms;
pub mod icons;
pub mod modal;
pub mod sidebar;
pub mod spinner;
pub mod table;
pub mod toast;

pub use forms::*;
pub use icons::*;
pub use modal::*;
pub use sidebar::*;
pub use spinner::*;
pub use table::*;
pub use toast::*;
