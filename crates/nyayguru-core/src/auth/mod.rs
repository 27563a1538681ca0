//! Authentication state management.

pub mod session;

pub use session::AuthSession;
