//! Authentication Pages and Components

pub mod login;
pub mod recovery;
pub mod session;

pub use login::*;
pub use recovery::*;
pub use session::*;
