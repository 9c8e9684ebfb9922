//! Dashboard Pages

pub mod dashboard;
pub mod not_found;
pub mod users;

pub use dashboard::*;
pub use not_found::*;
